//! Side-by-side comparison of all five disciplines.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Algorithm, CpuScheduler, ScheduleKpi};
use crate::error::Result;
use crate::models::{Process, ScheduleResult};

/// One discipline's summary in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Discipline that produced this row.
    pub algorithm: Algorithm,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Makespan of the schedule.
    pub total_time: u64,
    /// CPU utilization (0.0..1.0).
    pub cpu_utilization: f64,
    /// Full schedule behind the summary.
    pub result: ScheduleResult,
}

/// Results of running every discipline on the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Rows in FCFS, SJF, LJF, Priority, Round Robin order.
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Row with the lowest mean waiting time (first on ties).
    pub fn best_by_waiting(&self) -> Option<&ComparisonRow> {
        self.best_by(|r| r.avg_waiting_time)
    }

    /// Row with the lowest mean turnaround time (first on ties).
    pub fn best_by_turnaround(&self) -> Option<&ComparisonRow> {
        self.best_by(|r| r.avg_turnaround_time)
    }

    /// Row for a given discipline.
    pub fn row(&self, algorithm: Algorithm) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.algorithm == algorithm)
    }

    fn best_by(&self, key: impl Fn(&ComparisonRow) -> f64) -> Option<&ComparisonRow> {
        let mut best: Option<&ComparisonRow> = None;
        for row in &self.rows {
            if best.map_or(true, |b| key(row) < key(b)) {
                best = Some(row);
            }
        }
        best
    }
}

/// Runs all five disciplines on `processes`.
///
/// # Errors
/// `Error::InvalidInput` if the processes are invalid or `quantum` is zero.
pub fn compare_algorithms(processes: &[Process], quantum: u64) -> Result<Comparison> {
    let mut rows = Vec::with_capacity(5);
    for algorithm in Algorithm::all(quantum) {
        let result = CpuScheduler::new(algorithm).schedule(processes)?;
        let kpi = ScheduleKpi::calculate(&result);
        rows.push(ComparisonRow {
            algorithm,
            avg_waiting_time: result.avg_waiting_time,
            avg_turnaround_time: result.avg_turnaround_time,
            total_time: kpi.makespan,
            cpu_utilization: kpi.cpu_utilization,
            result,
        });
    }

    let comparison = Comparison { rows };
    debug!(
        processes = processes.len(),
        best_waiting = comparison.best_by_waiting().map(|r| r.algorithm.name()),
        "disciplines compared"
    );
    Ok(comparison)
}
