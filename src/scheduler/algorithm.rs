//! Scheduling discipline selector.

use serde::{Deserialize, Serialize};

/// The five CPU scheduling disciplines.
///
/// Serializes as a tagged object, e.g. `{"type":"round_robin","quantum":2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Longest Job First (non-preemptive).
    Ljf,
    /// Priority, lower value first (non-preemptive).
    Priority,
    /// Round Robin with a fixed time slice.
    RoundRobin {
        /// Time slice per turn (must be >= 1).
        quantum: u64,
    },
}

impl Algorithm {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Ljf => "LJF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether a running process can be preempted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin { .. })
    }

    /// All five disciplines, Round Robin using `quantum`.
    pub fn all(quantum: u64) -> [Algorithm; 5] {
        [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::Ljf,
            Algorithm::Priority,
            Algorithm::RoundRobin { quantum },
        ]
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::RoundRobin { quantum } => write!(f, "Round Robin (q={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_display() {
        assert_eq!(Algorithm::Fcfs.name(), "FCFS");
        assert_eq!(Algorithm::Priority.to_string(), "Priority");
        assert_eq!(
            Algorithm::RoundRobin { quantum: 3 }.to_string(),
            "Round Robin (q=3)"
        );
    }

    #[test]
    fn test_all_order() {
        let all = Algorithm::all(4);
        assert_eq!(all[0], Algorithm::Fcfs);
        assert_eq!(all[4], Algorithm::RoundRobin { quantum: 4 });
        assert_eq!(all.iter().filter(|a| a.is_preemptive()).count(), 1);
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"round_robin","quantum":2}"#);
        let back: Algorithm = serde_json::from_str(r#"{"type":"sjf"}"#).unwrap();
        assert_eq!(back, Algorithm::Sjf);
    }
}
