//! Built-in dispatching rules.
//!
//! | Rule | Score | Discipline |
//! |------|-------|------------|
//! | `Fcfs` | arrival time | First-Come, First-Served |
//! | `Sjf` | burst time | Shortest Job First |
//! | `Ljf` | -burst time | Longest Job First |
//! | `PriorityRule` | priority value | Non-preemptive Priority |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

#[inline]
fn clamp_score(value: u64) -> RuleScore {
    RuleScore::try_from(value).unwrap_or(RuleScore::MAX)
}

/// First-Come, First-Served.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        clamp_score(process.arrival_time)
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

/// Shortest Job First.
///
/// Prioritizes processes with shorter bursts. Minimizes mean waiting
/// time among non-preemptive disciplines when all jobs are ready.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        clamp_score(process.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Longest Job First.
#[derive(Debug, Clone, Copy)]
pub struct Ljf;

impl DispatchingRule for Ljf {
    fn name(&self) -> &'static str {
        "LJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        -clamp_score(process.burst_time)
    }

    fn description(&self) -> &'static str {
        "Longest Job First"
    }
}

/// Priority scheduling: lower priority value runs first.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRule;

impl DispatchingRule for PriorityRule {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Non-preemptive Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_process(id: u32, arrival: u64, burst: u64, priority: i32) -> Process {
        Process::new(id)
            .with_arrival(arrival)
            .with_burst(burst)
            .with_priority(priority)
    }

    #[test]
    fn test_fcfs_scores_arrival() {
        let early = make_process(1, 0, 9, 0);
        let late = make_process(2, 4, 1, 0);
        assert!(Fcfs.evaluate(&early) < Fcfs.evaluate(&late));
    }

    #[test]
    fn test_sjf_and_ljf_are_opposite() {
        let short = make_process(1, 0, 2, 0);
        let long = make_process(2, 0, 8, 0);
        assert!(Sjf.evaluate(&short) < Sjf.evaluate(&long));
        assert!(Ljf.evaluate(&long) < Ljf.evaluate(&short));
    }

    #[test]
    fn test_priority_lower_value_first() {
        let urgent = make_process(1, 0, 5, -1);
        let relaxed = make_process(2, 0, 5, 3);
        assert!(PriorityRule.evaluate(&urgent) < PriorityRule.evaluate(&relaxed));
    }

    #[test]
    fn test_huge_values_do_not_wrap() {
        let huge = make_process(1, u64::MAX, u64::MAX, 0);
        assert_eq!(Fcfs.evaluate(&huge), RuleScore::MAX);
        assert_eq!(Ljf.evaluate(&huge), -RuleScore::MAX);
    }

    #[test]
    fn test_names() {
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(Sjf.description(), "Shortest Job First");
        assert_eq!(Ljf.name(), "LJF");
        assert_eq!(PriorityRule.name(), "Priority");
    }
}
