//! Exhaustive safe-sequence enumeration.
//!
//! # Algorithm
//!
//! Depth-first search over completion orders. At each level, every
//! unfinished process whose need fits in `work` is tried in index order:
//! it is marked finished, its allocation is released into `work`, and the
//! search recurses. Reaching full depth records one safe sequence. State
//! is restored on the way back up, so one mutable frame serves the whole
//! search.
//!
//! Every interleaving is explored because optimal selection compares cost
//! over the full solution space. The search is factorial in the worst
//! case; `SearchLimits` bounds it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 8.6.3

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{fits_within, ResourceState, SafeSequence};
use crate::validation::validate_resource_state;

/// Bounds on the exhaustive search.
///
/// # Example
/// ```
/// use os_sim::banker::SearchLimits;
///
/// let limits = SearchLimits::unlimited().with_max_expansions(10_000);
/// assert_eq!(limits.max_expansions, Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum tentative allocation steps. `None` = unbounded.
    pub max_expansions: Option<u64>,
    /// Stop after this many complete sequences. `None` = unbounded.
    ///
    /// The search halts at the first feasible step taken once the cap is
    /// reached, and that step sets `truncated`. Every feasible prefix
    /// extends to a complete sequence (`work` never shrinks), so
    /// `truncated` implies unrecorded sequences exist. A cap equal to the
    /// true count is not truncated.
    pub max_sequences: Option<usize>,
}

impl SearchLimits {
    /// No limits: enumerate every safe sequence.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Caps the number of expansions.
    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Caps the number of recorded sequences.
    pub fn with_max_sequences(mut self, max: usize) -> Self {
        self.max_sequences = Some(max);
        self
    }
}

/// Outcome of a safety evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyStatus {
    /// At least one safe sequence exists.
    Safe,
    /// The exhaustive search found no safe sequence.
    Unsafe,
    /// The search was cut short before any sequence was found.
    Undetermined,
}

/// Result of a safety evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyResult {
    /// Overall verdict.
    pub status: SafetyStatus,
    /// Safe sequences in discovery order.
    pub safe_sequences: Vec<SafeSequence>,
    /// Minimum-cost sequence (first found on ties).
    pub optimal_sequence: Option<SafeSequence>,
    /// Whether a limit stopped the search early.
    pub truncated: bool,
    /// Tentative allocation steps performed.
    pub expansions: u64,
}

impl SafetyResult {
    /// Whether the state is proven safe.
    pub fn is_safe(&self) -> bool {
        self.status == SafetyStatus::Safe
    }

    /// Number of sequences found.
    pub fn sequence_count(&self) -> usize {
        self.safe_sequences.len()
    }
}

/// Banker's Algorithm safe-state analyzer.
///
/// # Example
///
/// ```
/// use os_sim::banker::BankersAnalyzer;
/// use os_sim::models::ResourceState;
///
/// let state = ResourceState::new(vec![3, 3, 2])
///     .with_process(vec![0, 1, 0], vec![7, 5, 3])
///     .with_process(vec![2, 0, 0], vec![3, 2, 2])
///     .with_process(vec![3, 0, 2], vec![9, 0, 2])
///     .with_process(vec![2, 1, 1], vec![2, 2, 2])
///     .with_process(vec![0, 0, 2], vec![4, 3, 3]);
///
/// let result = BankersAnalyzer::new().evaluate(&state).unwrap();
/// assert!(result.is_safe());
/// assert!(result.optimal_sequence.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BankersAnalyzer {
    limits: SearchLimits,
}

impl BankersAnalyzer {
    /// Creates an analyzer with no search limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets search limits.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The configured limits.
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Evaluates the safety of `state`.
    ///
    /// # Errors
    /// `Error::InvalidInput` if the state has no processes, mismatched
    /// vector lengths, an allocation above its maximum claim, or resource
    /// totals beyond `u64::MAX`.
    pub fn evaluate(&self, state: &ResourceState) -> Result<SafetyResult> {
        validate_resource_state(state)?;

        let mut search = Search::new(state, self.limits);
        search.descend();
        let Search {
            found,
            expansions,
            truncated,
            ..
        } = search;

        let safe_sequences: Vec<SafeSequence> = found
            .into_iter()
            .map(|order| SafeSequence::from_order(order, state))
            .collect();

        let optimal_sequence = select_optimal(&safe_sequences).cloned();

        let status = match (safe_sequences.is_empty(), truncated) {
            (false, _) => SafetyStatus::Safe,
            (true, false) => SafetyStatus::Unsafe,
            (true, true) => SafetyStatus::Undetermined,
        };

        if truncated {
            warn!(
                expansions,
                found = safe_sequences.len(),
                "safe-sequence search truncated by limits"
            );
        }
        debug!(
            processes = state.process_count(),
            resources = state.resource_count(),
            ?status,
            sequences = safe_sequences.len(),
            expansions,
            optimal_cost = optimal_sequence.as_ref().map(|s| s.cost),
            "safety evaluated"
        );

        Ok(SafetyResult {
            status,
            safe_sequences,
            optimal_sequence,
            truncated,
            expansions,
        })
    }
}

/// Evaluates `state` with no search limits.
pub fn evaluate_safety(state: &ResourceState) -> Result<SafetyResult> {
    BankersAnalyzer::new().evaluate(state)
}

/// Lowest cost wins; strict comparison keeps the first on ties.
fn select_optimal(sequences: &[SafeSequence]) -> Option<&SafeSequence> {
    let mut best: Option<&SafeSequence> = None;
    for seq in sequences {
        if best.map_or(true, |b| seq.cost < b.cost) {
            best = Some(seq);
        }
    }
    best
}

/// Mutable DFS frame shared by every recursion level.
struct Search<'a> {
    state: &'a ResourceState,
    need: Vec<Vec<u64>>,
    limits: SearchLimits,
    work: Vec<u64>,
    finished: Vec<bool>,
    path: Vec<usize>,
    found: Vec<Vec<usize>>,
    expansions: u64,
    truncated: bool,
}

impl<'a> Search<'a> {
    fn new(state: &'a ResourceState, limits: SearchLimits) -> Self {
        let n = state.process_count();
        Self {
            state,
            need: state.need_matrix(),
            limits,
            work: state.available.clone(),
            finished: vec![false; n],
            path: Vec::with_capacity(n),
            found: Vec::new(),
            expansions: 0,
            truncated: false,
        }
    }

    fn exhausted(&self) -> bool {
        self.limits
            .max_expansions
            .is_some_and(|max| self.expansions >= max)
            || self
                .limits
                .max_sequences
                .is_some_and(|max| self.found.len() >= max)
    }

    fn descend(&mut self) {
        let state = self.state;
        let n = self.finished.len();
        if self.path.len() == n {
            self.found.push(self.path.clone());
            return;
        }

        for p in 0..n {
            if self.finished[p] || !fits_within(&self.need[p], &self.work) {
                continue;
            }
            if self.exhausted() {
                self.truncated = true;
                return;
            }
            self.expansions += 1;

            // Validation bounds `available + allocations` by u64::MAX, so
            // release and undo are exact inverses.
            let allocation = &state.processes[p].allocation;
            for (w, &a) in self.work.iter_mut().zip(allocation) {
                *w += a;
            }
            self.finished[p] = true;
            self.path.push(p);

            self.descend();

            self.path.pop();
            self.finished[p] = false;
            for (w, &a) in self.work.iter_mut().zip(allocation) {
                *w -= a;
            }

            if self.truncated {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn textbook_state() -> ResourceState {
        ResourceState::new(vec![3, 3, 2])
            .with_process(vec![0, 1, 0], vec![7, 5, 3])
            .with_process(vec![2, 0, 0], vec![3, 2, 2])
            .with_process(vec![3, 0, 2], vec![9, 0, 2])
            .with_process(vec![2, 1, 1], vec![2, 2, 2])
            .with_process(vec![0, 0, 2], vec![4, 3, 3])
    }

    fn orders(result: &SafetyResult) -> Vec<Vec<usize>> {
        result
            .safe_sequences
            .iter()
            .map(|s| s.order.clone())
            .collect()
    }

    #[test]
    fn test_single_process_safe() {
        let state = ResourceState::new(vec![7, 4, 3]).with_process(vec![0, 1, 0], vec![7, 5, 3]);
        let result = evaluate_safety(&state).unwrap();
        assert!(result.is_safe());
        assert_eq!(orders(&result), vec![vec![0]]);
        assert_eq!(result.optimal_sequence.unwrap().order, vec![0]);
        assert!(!result.truncated);
    }

    #[test]
    fn test_single_process_insufficient() {
        // need [7,4,3] exceeds [3,3,2]
        let state = ResourceState::new(vec![3, 3, 2]).with_process(vec![0, 1, 0], vec![7, 5, 3]);
        let result = evaluate_safety(&state).unwrap();
        assert_eq!(result.status, SafetyStatus::Unsafe);
        assert!(result.safe_sequences.is_empty());
        assert!(result.optimal_sequence.is_none());
    }

    #[test]
    fn test_classic_unsafe() {
        let state = ResourceState::new(vec![0, 0, 0])
            .with_process(vec![1, 0, 0], vec![2, 1, 0])
            .with_process(vec![0, 1, 1], vec![1, 1, 2]);
        let result = evaluate_safety(&state).unwrap();
        assert!(!result.is_safe());
        assert_eq!(result.status, SafetyStatus::Unsafe);
        assert_eq!(result.sequence_count(), 0);
        assert!(result.optimal_sequence.is_none());
        assert_eq!(result.expansions, 0);
    }

    #[test]
    fn test_textbook_first_sequence_and_feasibility() {
        let state = textbook_state();
        let result = evaluate_safety(&state).unwrap();
        assert!(result.is_safe());
        assert_eq!(result.safe_sequences[0].order, vec![1, 3, 0, 2, 4]);

        let need = state.need_matrix();
        for seq in &result.safe_sequences {
            let mut sorted = seq.order.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 4]);

            let mut work = state.available.clone();
            for &p in &seq.order {
                assert!(fits_within(&need[p], &work));
                for (w, a) in work.iter_mut().zip(&state.processes[p].allocation) {
                    *w += a;
                }
            }
        }
    }

    #[test]
    fn test_textbook_optimal_is_min_cost() {
        let result = evaluate_safety(&textbook_state()).unwrap();
        let optimal = result.optimal_sequence.as_ref().unwrap();
        let min_cost = result.safe_sequences.iter().map(|s| s.cost).min().unwrap();
        assert_eq!(optimal.cost, min_cost);

        // First sequence in discovery order with that cost.
        let first = result
            .safe_sequences
            .iter()
            .find(|s| s.cost == min_cost)
            .unwrap();
        assert_eq!(optimal.order, first.order);
    }

    #[test]
    fn test_all_orders_when_nothing_needed() {
        // Zero need everywhere: every permutation is safe, all cost 0.
        let state = ResourceState::new(vec![0])
            .with_process(vec![1], vec![1])
            .with_process(vec![0], vec![0])
            .with_process(vec![2], vec![2]);
        let result = evaluate_safety(&state).unwrap();
        assert_eq!(
            orders(&result),
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
        // All tie at cost 0 → first found.
        assert_eq!(result.optimal_sequence.unwrap().order, vec![0, 1, 2]);
    }

    #[test]
    fn test_optimal_prefers_short_jobs_first() {
        // needs: P0 = 3, P1 = 1; both fit immediately.
        let state = ResourceState::new(vec![5, 5])
            .with_process(vec![1, 0], vec![3, 1])
            .with_process(vec![0, 0], vec![0, 1]);
        let result = evaluate_safety(&state).unwrap();
        assert_eq!(orders(&result), vec![vec![0, 1], vec![1, 0]]);
        let optimal = result.optimal_sequence.unwrap();
        assert_eq!(optimal.order, vec![1, 0]);
        assert_eq!(optimal.cost, 5);
    }

    #[test]
    fn test_max_sequences_limit() {
        let analyzer =
            BankersAnalyzer::new().with_limits(SearchLimits::unlimited().with_max_sequences(2));
        let result = analyzer.evaluate(&textbook_state()).unwrap();
        assert!(result.truncated);
        assert_eq!(result.status, SafetyStatus::Safe);
        assert_eq!(result.sequence_count(), 2);
        assert_eq!(result.safe_sequences[0].order, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_max_sequences_equal_to_count_not_truncated() {
        let total = evaluate_safety(&textbook_state()).unwrap().sequence_count();
        assert!(total > 1);

        let exact = BankersAnalyzer::new()
            .with_limits(SearchLimits::unlimited().with_max_sequences(total))
            .evaluate(&textbook_state())
            .unwrap();
        assert!(!exact.truncated);
        assert_eq!(exact.sequence_count(), total);

        let short = BankersAnalyzer::new()
            .with_limits(SearchLimits::unlimited().with_max_sequences(total - 1))
            .evaluate(&textbook_state())
            .unwrap();
        assert!(short.truncated);
        assert_eq!(short.sequence_count(), total - 1);
    }

    #[test]
    fn test_expansion_limit_yields_undetermined() {
        let analyzer =
            BankersAnalyzer::new().with_limits(SearchLimits::unlimited().with_max_expansions(2));
        let result = analyzer.evaluate(&textbook_state()).unwrap();
        assert!(result.truncated);
        assert_eq!(result.status, SafetyStatus::Undetermined);
        assert!(!result.is_safe());
        assert_eq!(result.expansions, 2);
        assert!(result.optimal_sequence.is_none());
    }

    #[test]
    fn test_limit_not_hit_is_exhaustive() {
        let unlimited = evaluate_safety(&textbook_state()).unwrap();
        let limited = BankersAnalyzer::new()
            .with_limits(SearchLimits::unlimited().with_max_expansions(unlimited.expansions))
            .evaluate(&textbook_state())
            .unwrap();
        assert!(!limited.truncated);
        assert_eq!(limited.safe_sequences, unlimited.safe_sequences);
    }

    #[test]
    fn test_invalid_state_rejected() {
        let state = ResourceState::new(vec![1, 1]).with_process(vec![1], vec![1, 1]);
        let err = evaluate_safety(&state).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::DimensionMismatch
        );
        assert!(evaluate_safety(&ResourceState::new(vec![1])).is_err());
    }

    #[test]
    fn test_boundary_totals_enumerate_every_order() {
        // Total units are exactly u64::MAX; P1's need fits from the start.
        let state = ResourceState::new(vec![u64::MAX - 2])
            .with_process(vec![2], vec![2])
            .with_process(vec![0], vec![u64::MAX - 2])
            .with_process(vec![0], vec![0]);
        let result = evaluate_safety(&state).unwrap();
        assert_eq!(
            orders(&result),
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
        // P1 last keeps every turnaround but one at zero.
        let optimal = result.optimal_sequence.unwrap();
        assert_eq!(optimal.order, vec![0, 2, 1]);
        assert_eq!(optimal.cost, u64::MAX - 2);
    }

    #[test]
    fn test_overflowing_totals_rejected() {
        let state = ResourceState::new(vec![u64::MAX - 1])
            .with_process(vec![2], vec![2])
            .with_process(vec![0], vec![u64::MAX - 1])
            .with_process(vec![0], vec![0]);
        let err = evaluate_safety(&state).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::ResourceOverflow
        );
    }

    #[test]
    fn test_max_claims_do_not_panic() {
        let state = ResourceState::new(vec![u64::MAX, u64::MAX])
            .with_process(vec![0, 0], vec![u64::MAX, u64::MAX]);
        let result = evaluate_safety(&state).unwrap();
        assert!(result.is_safe());
        let optimal = result.optimal_sequence.unwrap();
        assert_eq!(optimal.order, vec![0]);
        assert_eq!(optimal.total_time, u64::MAX);
    }

    #[test]
    fn test_idempotent() {
        let a = evaluate_safety(&textbook_state()).unwrap();
        let b = evaluate_safety(&textbook_state()).unwrap();
        assert_eq!(a, b);
    }
}
