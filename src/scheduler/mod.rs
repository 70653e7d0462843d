//! CPU scheduling simulators and KPI evaluation.
//!
//! Simulates a single CPU under five disciplines and reports the
//! execution timeline with per-process timing.
//!
//! # Algorithm
//!
//! `CpuScheduler` runs one arrival-gated selection loop parameterised by
//! a dispatching rule (FCFS, SJF, LJF, Priority, or a custom
//! [`RuleEngine`](crate::dispatching::RuleEngine)) or by a Round Robin
//! quantum.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, utilization, throughput, response
//! time and context switches. `compare_algorithms` runs every discipline
//! on the same workload.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod compare;
mod cpu;
mod kpi;

pub use algorithm::Algorithm;
pub use compare::{compare_algorithms, Comparison, ComparisonRow};
pub use cpu::CpuScheduler;
pub use kpi::ScheduleKpi;

use crate::error::Result;
use crate::models::{Process, ScheduleResult};

/// Schedules `processes` under `algorithm`.
pub fn schedule(processes: &[Process], algorithm: Algorithm) -> Result<ScheduleResult> {
    CpuScheduler::new(algorithm).schedule(processes)
}

/// First-Come, First-Served.
pub fn schedule_fcfs(processes: &[Process]) -> Result<ScheduleResult> {
    schedule(processes, Algorithm::Fcfs)
}

/// Shortest Job First (non-preemptive).
pub fn schedule_sjf(processes: &[Process]) -> Result<ScheduleResult> {
    schedule(processes, Algorithm::Sjf)
}

/// Longest Job First (non-preemptive).
pub fn schedule_ljf(processes: &[Process]) -> Result<ScheduleResult> {
    schedule(processes, Algorithm::Ljf)
}

/// Priority, lower value first (non-preemptive).
pub fn schedule_priority(processes: &[Process]) -> Result<ScheduleResult> {
    schedule(processes, Algorithm::Priority)
}

/// Round Robin with time slice `quantum`.
pub fn schedule_round_robin(processes: &[Process], quantum: u64) -> Result<ScheduleResult> {
    schedule(processes, Algorithm::RoundRobin { quantum })
}
