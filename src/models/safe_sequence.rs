//! Safe completion orders and their synthetic timing.
//!
//! Each process in a safe sequence is given a synthetic burst equal to
//! the sum of its outstanding need. Processes then "run" back to back in
//! sequence order, which yields waiting/turnaround figures comparable
//! across sequences without inventing extra constants.
//!
//! Integer timings saturate at `u64::MAX`; the averages are accumulated
//! in `f64` and stay exact up to float precision.

use serde::{Deserialize, Serialize};

use super::ResourceState;

/// Timing for one process at its position in a safe sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStep {
    /// Process index in the `ResourceState`.
    pub process_index: usize,
    /// Synthetic burst: total outstanding need.
    pub burst_time: u64,
    /// Sum of bursts of all processes before this one.
    pub waiting_time: u64,
    /// `waiting_time + burst_time`.
    pub turnaround_time: u64,
}

/// A complete safe sequence with derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeSequence {
    /// Process indices in completion order.
    pub order: Vec<usize>,
    /// Per-process timing, aligned with `order`.
    pub steps: Vec<SequenceStep>,
    /// Sum of all synthetic bursts.
    pub total_time: u64,
    /// Mean synthetic burst.
    pub avg_burst_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Sum of turnaround times. Lower is better.
    pub cost: u64,
}

impl SafeSequence {
    /// Computes metrics for a completion order over `state`.
    ///
    /// `order` must contain valid indices into `state.processes`.
    pub fn from_order(order: Vec<usize>, state: &ResourceState) -> Self {
        let mut clock: u64 = 0;
        let mut cost: u64 = 0;
        let mut steps = Vec::with_capacity(order.len());

        for &idx in &order {
            let burst_time = state.processes[idx].total_need();
            let waiting_time = clock;
            let turnaround_time = waiting_time.saturating_add(burst_time);

            steps.push(SequenceStep {
                process_index: idx,
                burst_time,
                waiting_time,
                turnaround_time,
            });

            clock = clock.saturating_add(burst_time);
            cost = cost.saturating_add(turnaround_time);
        }

        let (avg_burst_time, avg_waiting_time, avg_turnaround_time) = if steps.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            let n = steps.len() as f64;
            let burst: f64 = steps.iter().map(|s| s.burst_time as f64).sum();
            let waiting: f64 = steps.iter().map(|s| s.waiting_time as f64).sum();
            let turnaround: f64 = steps.iter().map(|s| s.turnaround_time as f64).sum();
            (burst / n, waiting / n, turnaround / n)
        };

        Self {
            order,
            steps,
            total_time: clock,
            avg_burst_time,
            avg_waiting_time,
            avg_turnaround_time,
            cost,
        }
    }

    /// Number of processes in the sequence.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of a process in the sequence.
    pub fn position_of(&self, process_index: usize) -> Option<usize> {
        self.order.iter().position(|&p| p == process_index)
    }
}
