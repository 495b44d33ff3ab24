//! Submission status shared by the verification and password reset flows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Async submission state of a flow
///
/// Only explicit submit intents or the resolution of the pending call move
/// a flow between these states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

impl FlowStatus {
    /// A call is in flight
    pub fn is_submitting(&self) -> bool {
        matches!(self, FlowStatus::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FlowStatus::Success)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FlowStatus::Failed)
    }
}

impl fmt::Display for FlowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlowStatus::Idle => "idle",
            FlowStatus::Submitting => "submitting",
            FlowStatus::Success => "success",
            FlowStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}
