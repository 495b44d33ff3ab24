//! Read-only view of the password reset flow

use serde::Serialize;

use crate::domain::entities::FlowStatus;

/// Everything the reset request screen renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetSnapshot {
    pub email: String,
    pub status: FlowStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    pub is_active: bool,
}
