//! Read-only view of the verification flow for the host

use serde::Serialize;

use crate::domain::entities::{FlowStatus, ResendState};

/// Everything the verification screen renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationSnapshot {
    /// One entry per input slot, `None` when empty
    pub slots: Vec<Option<char>>,
    /// Slot that should hold input focus
    pub focus: usize,
    pub is_complete: bool,
    pub resend: ResendState,
    pub status: FlowStatus,
    /// Message of the last failed submission while `Failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    /// False once the flow has been torn down
    pub is_active: bool,
}
