//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence: a later rule is consulted only when every
//! earlier rule ties. Remaining ties keep the caller's candidate order,
//! so selection is stable and deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use os_sim::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Sjf)
///     .with_tie_breaker(rules::PriorityRule);
/// assert_eq!(engine.name(), "SJF");
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every candidate ties, so selection follows input order.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates an engine with a single primary rule.
    pub fn single<R: DispatchingRule + 'static>(rule: R) -> Self {
        Self::new().with_rule(rule)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Name of the primary rule ("INPUT" when empty).
    pub fn name(&self) -> &'static str {
        self.rules.first().map(|r| r.name()).unwrap_or("INPUT")
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Picks the best candidate.
    ///
    /// `candidates` are indices into `processes`. Returns the first
    /// candidate (in slice order) among those with the lowest scores.
    pub fn select_best(&self, processes: &[Process], candidates: &[usize]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for &idx in candidates {
            match best {
                None => best = Some(idx),
                Some(current) => {
                    if self.compare(&processes[idx], &processes[current]) == Ordering::Less {
                        best = Some(idx);
                    }
                }
            }
        }
        best
    }

    /// Sorts indices by rule evaluation (stable).
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
