//! Banker's Algorithm: safety analysis and deadlock avoidance.
//!
//! # Operations
//!
//! - [`evaluate_safety`] / [`BankersAnalyzer`]: enumerate every safe
//!   completion order and pick the one with the lowest cost (sum of
//!   synthetic turnaround times).
//! - [`find_safe_sequence`]: the textbook single-order safety check.
//! - [`request_resources`]: grant, defer, or deny a resource request.
//! - [`AllocationGraph`]: allocation/request edges for visualisation.
//!
//! An unsafe state is a normal result. A search stopped by
//! [`SearchLimits`] is reported as `truncated`, and as
//! [`SafetyStatus::Undetermined`] if it had not yet found a sequence.
//!
//! # References
//!
//! - Dijkstra (1965), "Cooperating Sequential Processes"
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 8.6

mod graph;
mod safety;
mod search;

pub use graph::{AllocationGraph, EdgeKind, GraphEdge};
pub use safety::{find_safe_sequence, request_resources, RequestOutcome};
pub use search::{evaluate_safety, BankersAnalyzer, SafetyResult, SafetyStatus, SearchLimits};
