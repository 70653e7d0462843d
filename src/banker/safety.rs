//! Single-sequence safety check and resource-request handling.
//!
//! The textbook safety algorithm stops at the first safe order. Because
//! finishing a process only ever grows `work`, always taking the
//! lowest-index process that fits never dead-ends: if any safe order
//! exists this greedy scan finds one, and it is the first order the
//! exhaustive search would report.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 8.6.3-8.6.4

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{fits_within, ResourceState};
use crate::validation::{validate_request, validate_resource_state};

/// Outcome of a resource request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestOutcome {
    /// The request leaves the system safe and was applied.
    Granted {
        /// State after the allocation.
        state: ResourceState,
        /// A safe order witnessing the new state.
        safe_sequence: Vec<usize>,
    },
    /// Not enough resources are free right now.
    MustWait,
    /// Granting would leave the system unsafe.
    Denied,
}

impl RequestOutcome {
    /// Whether the request was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, RequestOutcome::Granted { .. })
    }
}

/// Finds one safe sequence, or `None` if the state is unsafe.
///
/// # Errors
/// `Error::InvalidInput` if the state fails validation.
pub fn find_safe_sequence(state: &ResourceState) -> Result<Option<Vec<usize>>> {
    validate_resource_state(state)?;
    Ok(greedy_sequence(state))
}

fn greedy_sequence(state: &ResourceState) -> Option<Vec<usize>> {
    let need = state.need_matrix();
    let n = state.process_count();
    let mut work = state.available.clone();
    let mut finished = vec![false; n];
    let mut sequence = Vec::with_capacity(n);

    while sequence.len() < n {
        let next = (0..n).find(|&p| !finished[p] && fits_within(&need[p], &work))?;
        for (w, &a) in work.iter_mut().zip(&state.processes[next].allocation) {
            *w += a;
        }
        finished[next] = true;
        sequence.push(next);
    }

    Some(sequence)
}

/// Handles a request by `process` for `request` units.
///
/// # Algorithm
/// 1. Reject requests above the process's outstanding need.
/// 2. If the request exceeds `available`, the process must wait.
/// 3. Pretend to allocate and run the safety check; grant only if the
///    resulting state is safe.
///
/// The input state is never modified.
///
/// # Errors
/// `Error::InvalidInput` if the state is invalid, the process index is out
/// of range, the request has the wrong length, or it exceeds the need.
pub fn request_resources(
    state: &ResourceState,
    process: usize,
    request: &[u64],
) -> Result<RequestOutcome> {
    validate_resource_state(state)?;
    validate_request(state, process, request)?;

    if !fits_within(request, &state.available) {
        debug!(process, ?request, "request must wait");
        return Ok(RequestOutcome::MustWait);
    }

    let mut tentative = state.clone();
    for (avail, &req) in tentative.available.iter_mut().zip(request) {
        *avail -= req;
    }
    for (alloc, &req) in tentative.processes[process]
        .allocation
        .iter_mut()
        .zip(request)
    {
        *alloc += req;
    }

    let outcome = match greedy_sequence(&tentative) {
        Some(safe_sequence) => RequestOutcome::Granted {
            state: tentative,
            safe_sequence,
        },
        None => RequestOutcome::Denied,
    };
    debug!(process, ?request, granted = outcome.is_granted(), "request evaluated");
    Ok(outcome)
}
