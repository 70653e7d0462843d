//! Schedule (solution) model.
//!
//! A schedule is the execution timeline a scheduler produced: an ordered
//! list of CPU blocks plus per-process timing details and aggregates.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// A contiguous CPU interval `[start, end)` given to one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    /// Process that ran.
    pub process_id: u32,
    /// Start tick (inclusive).
    pub start: u64,
    /// End tick (exclusive).
    pub end: u64,
}

/// Per-process timing details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDetail {
    /// Process identifier.
    pub process_id: u32,
    /// Arrival time.
    pub arrival_time: u64,
    /// CPU time required.
    pub burst_time: u64,
    /// Start of the process's first block.
    pub start_time: u64,
    /// End of the process's last block.
    pub completion_time: u64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: u64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: u64,
}

/// Result of a scheduling simulation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Per-process details, in completion order.
    pub details: Vec<ProcessDetail>,
    /// Execution timeline in chronological order.
    pub blocks: Vec<ScheduleBlock>,
    /// Sum of waiting times, saturating at `u64::MAX`.
    pub total_waiting_time: u64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
}

impl ScheduleBlock {
    /// Creates a block.
    pub fn new(process_id: u32, start: u64, end: u64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Block length (`end - start`, zero for an inverted block).
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether two blocks share any tick.
    #[inline]
    pub fn overlaps(&self, other: &ScheduleBlock) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl ProcessDetail {
    /// Builds a detail record, deriving turnaround and waiting times.
    pub fn new(
        process_id: u32,
        arrival_time: u64,
        burst_time: u64,
        start_time: u64,
        completion_time: u64,
    ) -> Self {
        let turnaround_time = completion_time.saturating_sub(arrival_time);
        Self {
            process_id,
            arrival_time,
            burst_time,
            start_time,
            completion_time,
            waiting_time: turnaround_time.saturating_sub(burst_time),
            turnaround_time,
        }
    }

    /// Response time: first execution minus arrival.
    #[inline]
    pub fn response_time(&self) -> u64 {
        self.start_time.saturating_sub(self.arrival_time)
    }
}

impl ScheduleResult {
    /// Assembles a result and computes aggregate waiting/turnaround figures.
    pub fn new(details: Vec<ProcessDetail>, blocks: Vec<ScheduleBlock>) -> Self {
        let total_waiting_time = details
            .iter()
            .map(|d| d.waiting_time)
            .fold(0, u64::saturating_add);

        let (avg_waiting_time, avg_turnaround_time) = if details.is_empty() {
            (0.0, 0.0)
        } else {
            let n = details.len() as f64;
            let waiting: f64 = details.iter().map(|d| d.waiting_time as f64).sum();
            let turnaround: f64 = details.iter().map(|d| d.turnaround_time as f64).sum();
            (waiting / n, turnaround / n)
        };

        Self {
            details,
            blocks,
            total_waiting_time,
            avg_waiting_time,
            avg_turnaround_time,
        }
    }

    /// Makespan: latest completion time.
    pub fn makespan(&self) -> u64 {
        self.details
            .iter()
            .map(|d| d.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Detail record for a process.
    pub fn detail_for(&self, process_id: u32) -> Option<&ProcessDetail> {
        self.details.iter().find(|d| d.process_id == process_id)
    }

    /// All blocks for a process, in chronological order.
    pub fn blocks_for(&self, process_id: u32) -> Vec<&ScheduleBlock> {
        self.blocks
            .iter()
            .filter(|b| b.process_id == process_id)
            .collect()
    }

    /// Total CPU time across all blocks, saturating at `u64::MAX`.
    pub fn busy_time(&self) -> u64 {
        self.blocks
            .iter()
            .map(ScheduleBlock::duration)
            .fold(0, u64::saturating_add)
    }

    /// Process ids in the order they completed.
    pub fn completion_order(&self) -> Vec<u32> {
        self.details.iter().map(|d| d.process_id).collect()
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.details.len()
    }
}
