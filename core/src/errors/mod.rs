//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::ValidationError;

use thiserror::Error;

/// Core domain errors
///
/// `Validation` covers malformed intents, which the flows swallow as no-ops.
/// `SubmissionFailed` and `Timeout` are collaborator outcomes that move a flow
/// to `Failed`; every one of them is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Submission failed: {message}")]
    SubmissionFailed { message: String },

    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },
}

impl DomainError {
    /// Whether the error came back from an external collaborator call
    pub fn is_submission_failure(&self) -> bool {
        matches!(
            self,
            DomainError::SubmissionFailed { .. } | DomainError::Timeout { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
