//! Crate error type.
//!
//! Both simulators are total over well-formed input, so the only failure
//! is malformed input. An unsafe resource state is a normal result, not
//! an error.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the analyzer and the scheduling engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input failed validation. Lists every detected problem.
    #[error("invalid input: {}", format_errors(.0))]
    InvalidInput(Vec<ValidationError>),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The validation errors behind this error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Error::InvalidInput(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::InvalidInput(errors)
    }
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
