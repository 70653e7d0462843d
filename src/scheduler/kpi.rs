//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a completed
//! schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy Time | Sum of block lengths |
//! | Idle Time | Makespan - busy time |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Processes completed per time unit |
//! | Avg Response Time | Mean(first start - arrival) |
//! | Context Switches | Adjacent blocks of different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::ScheduleResult;

/// CPU schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: u64,
    /// Total time the CPU was running a process.
    pub busy_time: u64,
    /// Time in `[0, makespan)` with no process running.
    pub idle_time: u64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean delay between arrival and first execution.
    pub avg_response_time: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let busy_time = result.busy_time();
        let completed = result.process_count();

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                completed as f64 / makespan as f64,
            )
        };

        let avg_response_time = if completed == 0 {
            0.0
        } else {
            let total: f64 = result
                .details
                .iter()
                .map(|d| d.response_time() as f64)
                .sum();
            total / completed as f64
        };

        let context_switches = result
            .blocks
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count();

        Self {
            makespan,
            busy_time,
            idle_time: makespan.saturating_sub(busy_time),
            cpu_utilization,
            throughput,
            avg_response_time,
            context_switches,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_response: f64, min_utilization: f64) -> bool {
        self.avg_response_time <= max_avg_response && self.cpu_utilization >= min_utilization
    }
}
