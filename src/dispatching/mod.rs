//! Dispatching rules and rule engine for CPU scheduling.
//!
//! A dispatching rule maps a ready process to a score; the scheduler runs
//! the ready process with the lowest score next. Rules compose through a
//! [`RuleEngine`], which consults later rules only to break ties and
//! finally falls back to input order.
//!
//! # Usage
//!
//! ```
//! use os_sim::dispatching::{RuleEngine, rules};
//! use os_sim::models::Process;
//!
//! let processes = vec![
//!     Process::new(1).with_burst(5).with_priority(2),
//!     Process::new(2).with_burst(3).with_priority(2),
//! ];
//! let engine = RuleEngine::new()
//!     .with_rule(rules::PriorityRule)
//!     .with_tie_breaker(rules::Sjf);
//!
//! assert_eq!(engine.select_best(&processes, &[0, 1]), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Integer scores keep
/// comparisons exact.
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules should return smaller values
/// for processes that should run earlier.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FCFS").
    fn name(&self) -> &'static str;

    /// Scores a ready process.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
