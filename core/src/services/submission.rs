//! Submission outcomes and the timeout-bounded collaborator call

use std::future::Future;
use std::time::Duration;

use crate::errors::{DomainError, DomainResult, ValidationError};

/// Result of a submit intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The collaborator accepted the submission
    Succeeded,
    /// The collaborator failed or timed out; the flow is now `Failed`
    Failed(DomainError),
    /// Preconditions on the entered data were not met; nothing changed
    Rejected(ValidationError),
    /// The flow state did not allow a submission; nothing changed
    Ignored(IgnoreReason),
    /// The flow was torn down while the call was pending and the result was dropped
    Discarded,
}

impl SubmitOutcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }
}

/// Why a submit intent was not acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A call is already in flight
    AlreadySubmitting,
    /// The flow already reached its terminal state
    AlreadyCompleted,
    /// The flow has been torn down
    TornDown,
}

/// Awaits a collaborator call, bounded by `timeout` (`Duration::ZERO` disables the bound)
pub(crate) async fn call_with_timeout<F>(call: F, timeout: Duration) -> DomainResult<()>
where
    F: Future<Output = Result<(), String>>,
{
    let result = if timeout.is_zero() {
        call.await
    } else {
        tokio::time::timeout(timeout, call)
            .await
            .map_err(|_| DomainError::Timeout {
                seconds: timeout.as_secs(),
            })?
    };
    result.map_err(|message| DomainError::SubmissionFailed { message })
}
