//! Input validation for both simulators.
//!
//! Checks structural integrity of inputs before any computation runs.
//! Every problem is collected, so a caller sees all issues at once.
//!
//! Scheduling inputs:
//! - Empty process list
//! - Duplicate process IDs
//! - Zero burst times
//! - Timelines that would run past `u64::MAX`
//! - Zero Round Robin quantum
//!
//! Resource states:
//! - Empty process list
//! - Allocation/max vectors whose length differs from `available`
//! - Allocation exceeding the maximum claim
//! - Resource totals that do not fit in `u64`

use std::collections::HashSet;
use std::fmt;

use crate::models::{Process, ResourceState};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has a burst time of zero.
    ZeroBurst,
    /// Round Robin quantum is zero.
    ZeroQuantum,
    /// A resource vector has the wrong length.
    DimensionMismatch,
    /// A process holds more than its maximum claim.
    AllocationExceedsMax,
    /// A process index is out of range.
    UnknownProcess,
    /// A request asks for more than the process's outstanding need.
    RequestExceedsNeed,
    /// Latest arrival plus total burst exceeds `u64::MAX`.
    TimeOverflow,
    /// Available plus allocated units of a resource exceed `u64::MAX`.
    ResourceOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a process list for scheduling.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst time is at least 1
/// 4. The latest arrival plus the sum of all bursts fits in `u64`, which
///    bounds every clock value the simulation can reach
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process list is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has zero burst time", p.id),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Latest arrival {latest_arrival} plus total burst time exceeds u64::MAX"),
        ));
    }

    finish(errors)
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: u64) -> ValidationResult {
    if quantum == 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::ZeroQuantum,
            "Round Robin quantum must be at least 1",
        )]);
    }
    Ok(())
}

/// Validates a resource-allocation state.
///
/// Checks:
/// 1. At least one process
/// 2. Every `allocation` and `max` has one entry per resource type
/// 3. `allocation[r] <= max[r]` for every process and resource
/// 4. `available[r]` plus every `allocation[r]` fits in `u64`, so the
///    safety search can release allocations without overflow
pub fn validate_resource_state(state: &ResourceState) -> ValidationResult {
    let mut errors = Vec::new();
    let resources = state.resource_count();

    if state.processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Resource state has no processes",
        ));
    }

    for (p, claim) in state.processes.iter().enumerate() {
        if claim.allocation.len() != resources {
            errors.push(ValidationError::new(
                ValidationErrorKind::DimensionMismatch,
                format!(
                    "Process {p} allocation has {} entries, expected {resources}",
                    claim.allocation.len()
                ),
            ));
        }
        if claim.max.len() != resources {
            errors.push(ValidationError::new(
                ValidationErrorKind::DimensionMismatch,
                format!(
                    "Process {p} max has {} entries, expected {resources}",
                    claim.max.len()
                ),
            ));
        }

        for (r, (&alloc, &max)) in claim.allocation.iter().zip(&claim.max).enumerate() {
            if alloc > max {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AllocationExceedsMax,
                    format!("Process {p} holds {alloc} of resource {r} but may claim only {max}"),
                ));
            }
        }
    }

    for (r, &avail) in state.available.iter().enumerate() {
        let total = state.processes.iter().try_fold(avail, |acc, claim| {
            acc.checked_add(claim.allocation.get(r).copied().unwrap_or(0))
        });
        if total.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ResourceOverflow,
                format!("Total units of resource {r} exceed u64::MAX"),
            ));
        }
    }

    finish(errors)
}

/// Validates a resource request against a (valid) state.
///
/// Checks:
/// 1. `process` indexes an existing claim
/// 2. `request` has one entry per resource type
/// 3. `request[r] <= need[process][r]`
pub fn validate_request(state: &ResourceState, process: usize, request: &[u64]) -> ValidationResult {
    let Some(claim) = state.processes.get(process) else {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::UnknownProcess,
            format!(
                "Process index {process} out of range ({} processes)",
                state.process_count()
            ),
        )]);
    };

    if request.len() != state.resource_count() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::DimensionMismatch,
            format!(
                "Request has {} entries, expected {}",
                request.len(),
                state.resource_count()
            ),
        )]);
    }

    let errors = claim
        .need()
        .iter()
        .zip(request)
        .enumerate()
        .filter(|(_, (need, req))| req > need)
        .map(|(r, (need, req))| {
            ValidationError::new(
                ValidationErrorKind::RequestExceedsNeed,
                format!("Process {process} requests {req} of resource {r} but needs only {need}"),
            )
        })
        .collect();

    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_processes() {
        let processes = vec![
            Process::new(1).with_burst(3),
            Process::new(2).with_arrival(1).with_burst(2),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_empty_processes() {
        assert_eq!(
            kinds(validate_processes(&[])),
            vec![ValidationErrorKind::EmptyInput]
        );
    }

    #[test]
    fn test_duplicate_and_zero_burst_collected() {
        let processes = vec![
            Process::new(1).with_burst(0),
            Process::new(1).with_burst(4),
        ];
        let k = kinds(validate_processes(&processes));
        assert!(k.contains(&ValidationErrorKind::ZeroBurst));
        assert!(k.contains(&ValidationErrorKind::DuplicateId));
        assert_eq!(k.len(), 2);
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        assert_eq!(
            kinds(validate_quantum(0)),
            vec![ValidationErrorKind::ZeroQuantum]
        );
    }

    #[test]
    fn test_valid_resource_state() {
        let state = ResourceState::new(vec![3, 3, 2]).with_process(vec![0, 1, 0], vec![7, 5, 3]);
        assert!(validate_resource_state(&state).is_ok());
    }

    #[test]
    fn test_resource_state_dimension_mismatch() {
        let state = ResourceState::new(vec![3, 3])
            .with_process(vec![0, 1, 0], vec![7, 5])
            .with_process(vec![0, 0], vec![1, 1]);
        let k = kinds(validate_resource_state(&state));
        assert_eq!(k, vec![ValidationErrorKind::DimensionMismatch]);
    }

    #[test]
    fn test_resource_state_allocation_exceeds_max() {
        let state = ResourceState::new(vec![1]).with_process(vec![5], vec![2]);
        assert_eq!(
            kinds(validate_resource_state(&state)),
            vec![ValidationErrorKind::AllocationExceedsMax]
        );
    }

    #[test]
    fn test_resource_state_empty() {
        let state = ResourceState::new(vec![1, 2]);
        assert_eq!(
            kinds(validate_resource_state(&state)),
            vec![ValidationErrorKind::EmptyInput]
        );
    }

    #[test]
    fn test_request_checks() {
        let state = ResourceState::new(vec![3, 3]).with_process(vec![1, 0], vec![3, 2]);
        assert!(validate_request(&state, 0, &[2, 2]).is_ok());
        assert_eq!(
            kinds(validate_request(&state, 1, &[0, 0])),
            vec![ValidationErrorKind::UnknownProcess]
        );
        assert_eq!(
            kinds(validate_request(&state, 0, &[1])),
            vec![ValidationErrorKind::DimensionMismatch]
        );
        assert_eq!(
            kinds(validate_request(&state, 0, &[3, 1])),
            vec![ValidationErrorKind::RequestExceedsNeed]
        );
    }

    #[test]
    fn test_time_overflow_rejected() {
        let half = u64::MAX / 2 + 1;
        let processes = vec![
            Process::new(1).with_burst(half),
            Process::new(2).with_burst(half),
        ];
        assert_eq!(
            kinds(validate_processes(&processes)),
            vec![ValidationErrorKind::TimeOverflow]
        );

        let late = vec![Process::new(1).with_arrival(u64::MAX).with_burst(1)];
        assert_eq!(
            kinds(validate_processes(&late)),
            vec![ValidationErrorKind::TimeOverflow]
        );
    }

    #[test]
    fn test_time_horizon_at_limit_accepted() {
        let processes = vec![
            Process::new(1).with_arrival(1).with_burst(u64::MAX - 2),
            Process::new(2).with_burst(1),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_resource_overflow_rejected() {
        let state = ResourceState::new(vec![u64::MAX - 1, 0])
            .with_process(vec![2, 0], vec![2, 0])
            .with_process(vec![0, 0], vec![u64::MAX - 1, 0]);
        assert_eq!(
            kinds(validate_resource_state(&state)),
            vec![ValidationErrorKind::ResourceOverflow]
        );
    }

    #[test]
    fn test_resource_total_at_limit_accepted() {
        let state = ResourceState::new(vec![u64::MAX - 2])
            .with_process(vec![2], vec![2])
            .with_process(vec![0], vec![u64::MAX]);
        assert!(validate_resource_state(&state).is_ok());
    }

    #[test]
    fn test_error_display() {
        let e = ValidationError::new(ValidationErrorKind::ZeroQuantum, "bad quantum");
        assert_eq!(e.to_string(), "ZeroQuantum: bad quantum");
    }
}
