//! Process model for CPU scheduling.
//!
//! A process is a single unit of CPU work: it becomes ready at its
//! arrival time and needs `burst_time` units of CPU before it completes.
//!
//! # Time Representation
//! All times are non-negative integer ticks relative to t=0.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique, caller-assigned identifier.
    pub id: u32,
    /// Time at which the process becomes ready.
    pub arrival_time: u64,
    /// CPU time required (must be >= 1).
    pub burst_time: u64,
    /// Scheduling priority (lower = more urgent).
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with burst 1 and priority 0.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            arrival_time: 0,
            burst_time: 1,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: u64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: u64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: u64) -> bool {
        self.arrival_time <= time
    }
}
