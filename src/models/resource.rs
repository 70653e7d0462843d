//! Resource-allocation state for the Banker's Algorithm.
//!
//! A `ResourceState` is a snapshot of `m` resource types shared by `n`
//! processes: what is still free (`available`), what each process holds
//! (`allocation`) and the most it may ever claim (`max`).
//!
//! `need = max - allocation` is always derived, never stored.
//!
//! # Reference
//! Dijkstra (1965), "Cooperating Sequential Processes";
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 8.6

use serde::{Deserialize, Serialize};

/// One process's current holdings and maximum claim, per resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessClaim {
    /// Units currently held, indexed by resource type.
    pub allocation: Vec<u64>,
    /// Maximum units the process may request, indexed by resource type.
    pub max: Vec<u64>,
}

impl ProcessClaim {
    /// Creates a claim from allocation and maximum vectors.
    pub fn new(allocation: Vec<u64>, max: Vec<u64>) -> Self {
        Self { allocation, max }
    }

    /// Outstanding need per resource (`max - allocation`).
    ///
    /// Saturates at zero if `allocation > max`; validation rejects such
    /// claims before any analysis runs.
    pub fn need(&self) -> Vec<u64> {
        self.max
            .iter()
            .zip(&self.allocation)
            .map(|(&m, &a)| m.saturating_sub(a))
            .collect()
    }

    /// Sum of outstanding need across all resource types, saturating at
    /// `u64::MAX`.
    pub fn total_need(&self) -> u64 {
        self.need().into_iter().fold(0, u64::saturating_add)
    }

    /// Number of resource types this claim describes.
    pub fn resource_count(&self) -> usize {
        self.allocation.len()
    }
}

/// A snapshot of available resources and per-process claims.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceState {
    /// Free units per resource type.
    pub available: Vec<u64>,
    /// Process claims, indexed by process position.
    pub processes: Vec<ProcessClaim>,
}

impl ResourceState {
    /// Creates a state with the given available vector and no processes.
    pub fn new(available: Vec<u64>) -> Self {
        Self {
            available,
            processes: Vec::new(),
        }
    }

    /// Adds a process claim.
    pub fn with_process(mut self, allocation: Vec<u64>, max: Vec<u64>) -> Self {
        self.processes.push(ProcessClaim::new(allocation, max));
        self
    }

    /// Number of resource types.
    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Need matrix: `need[p][r]`.
    pub fn need_matrix(&self) -> Vec<Vec<u64>> {
        self.processes.iter().map(ProcessClaim::need).collect()
    }

    /// Total units per resource type (available plus everything allocated).
    pub fn total_resources(&self) -> Vec<u64> {
        let mut total = self.available.clone();
        for claim in &self.processes {
            for (t, &a) in total.iter_mut().zip(&claim.allocation) {
                *t = t.saturating_add(a);
            }
        }
        total
    }
}

/// Whether `lhs <= rhs` holds component-wise.
#[inline]
pub(crate) fn fits_within(lhs: &[u64], rhs: &[u64]) -> bool {
    lhs.iter().zip(rhs).all(|(l, r)| l <= r)
}
