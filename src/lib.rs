//! Simulators for two classic operating-system algorithms.
//!
//! Provides the computational core behind a teaching tool: the Banker's
//! Algorithm for deadlock avoidance, and single-CPU scheduling under
//! FCFS, SJF, LJF, Priority and Round Robin. Every operation is a pure
//! function from an immutable input snapshot to a freshly built result.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ScheduleBlock`,
//!   `ScheduleResult`, `ResourceState`, `SafeSequence`
//! - **`banker`**: Safe-sequence enumeration, safety check, resource requests
//! - **`scheduler`**: CPU scheduling simulation, KPIs, discipline comparison
//! - **`dispatching`**: Selection rules driving the non-preemptive disciplines
//! - **`validation`**: Input integrity checks (shapes, ids, zero bursts)
//!
//! # Example
//!
//! ```
//! use os_sim::banker::evaluate_safety;
//! use os_sim::models::{Process, ResourceState};
//! use os_sim::scheduler::schedule_round_robin;
//!
//! let state = ResourceState::new(vec![1, 1]).with_process(vec![1, 0], vec![2, 1]);
//! assert!(evaluate_safety(&state)?.is_safe());
//!
//! let processes = vec![
//!     Process::new(1).with_burst(5),
//!     Process::new(2).with_arrival(1).with_burst(3),
//! ];
//! let result = schedule_round_robin(&processes, 2)?;
//! assert_eq!(result.makespan(), 8);
//! # Ok::<(), os_sim::Error>(())
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5 and 8
//! - Dijkstra (1965), "Cooperating Sequential Processes"

pub mod banker;
pub mod dispatching;
mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
