//! Email submit-and-confirm state machine

use std::sync::{Arc, Mutex};
use uuid::Uuid;

use fin_shared::validation::{is_valid_email, mask_email};
use fin_shared::PasswordResetConfig;

use crate::domain::entities::FlowStatus;
use crate::domain::value_objects::Destination;
use crate::errors::{DomainError, ValidationError};
use crate::services::navigation::Navigator;
use crate::services::submission::{call_with_timeout, IgnoreReason, SubmitOutcome};
use crate::sync::lock;

use super::traits::PasswordResetServiceTrait;
use super::types::ResetSnapshot;

struct ResetState {
    email: String,
    status: FlowStatus,
    failure: Option<DomainError>,
    session: Option<Uuid>,
}

/// Password reset request screen controller
pub struct RequestResetFlow<P, N>
where
    P: PasswordResetServiceTrait,
    N: Navigator,
{
    state: Mutex<ResetState>,
    reset_service: Arc<P>,
    navigator: Arc<N>,
    config: PasswordResetConfig,
}

impl<P, N> RequestResetFlow<P, N>
where
    P: PasswordResetServiceTrait,
    N: Navigator,
{
    pub fn new(reset_service: Arc<P>, navigator: Arc<N>, config: PasswordResetConfig) -> Self {
        let session = Uuid::new_v4();
        tracing::info!(
            session_id = %session,
            event = "password_reset_flow_started",
            "Password reset flow started"
        );

        Self {
            state: Mutex::new(ResetState {
                email: String::new(),
                status: FlowStatus::Idle,
                failure: None,
                session: Some(session),
            }),
            reset_service,
            navigator,
            config,
        }
    }

    pub fn session_id(&self) -> Option<Uuid> {
        lock(&self.state).session
    }

    pub fn status(&self) -> FlowStatus {
        lock(&self.state).status
    }

    pub fn email(&self) -> String {
        lock(&self.state).email.clone()
    }

    pub fn snapshot(&self) -> ResetSnapshot {
        let state = lock(&self.state);
        ResetSnapshot {
            email: state.email.clone(),
            status: state.status,
            failure: state.failure.as_ref().map(ToString::to_string),
            is_active: state.session.is_some(),
        }
    }

    /// Replace the email field contents
    ///
    /// Ignored while a request is in flight or after teardown. Returns whether
    /// the value was stored.
    pub fn set_email(&self, value: &str) -> bool {
        let mut state = lock(&self.state);
        if state.session.is_none() || state.status.is_submitting() {
            return false;
        }
        state.email = value.to_string();
        true
    }

    /// Send the reset request for the entered email
    ///
    /// No-op when the email is malformed or a request is already in flight.
    /// The trimmed address is what the collaborator receives.
    pub async fn submit(&self) -> SubmitOutcome {
        let (session, email) = {
            let mut state = lock(&self.state);
            let Some(session) = state.session else {
                return SubmitOutcome::Ignored(IgnoreReason::TornDown);
            };
            if state.status.is_submitting() {
                return SubmitOutcome::Ignored(IgnoreReason::AlreadySubmitting);
            }
            if !is_valid_email(&state.email) {
                tracing::debug!(
                    session_id = %session,
                    event = "password_reset_rejected",
                    "Email failed shape check"
                );
                return SubmitOutcome::Rejected(ValidationError::InvalidEmail);
            }

            state.status = FlowStatus::Submitting;
            state.failure = None;
            (session, state.email.trim().to_string())
        };

        tracing::info!(
            session_id = %session,
            email = %mask_email(&email),
            event = "password_reset_requested",
            "Requesting password reset"
        );

        let result = call_with_timeout(
            self.reset_service.request_password_reset(&email),
            self.config.request_timeout(),
        )
        .await;

        let mut state = lock(&self.state);
        if state.session != Some(session) {
            tracing::warn!(
                session_id = %session,
                event = "password_reset_stale_response_discarded",
                "Discarding reset result for a torn down flow"
            );
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                state.status = FlowStatus::Success;
                tracing::info!(
                    session_id = %session,
                    event = "password_reset_sent",
                    "Password reset requested"
                );
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %session,
                    error = %e,
                    event = "password_reset_failed",
                    "Password reset request failed"
                );
                state.status = FlowStatus::Failed;
                state.failure = Some(e.clone());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// `Failed` back to `Idle`, keeping the entered email
    pub fn retry(&self) -> bool {
        let mut state = lock(&self.state);
        if state.session.is_none() || !state.status.is_failed() {
            return false;
        }
        state.status = FlowStatus::Idle;
        state.failure = None;
        true
    }

    /// `Success` back to `Idle` with the email cleared
    pub fn reset(&self) -> bool {
        let mut state = lock(&self.state);
        if state.session.is_none() || !state.status.is_success() {
            return false;
        }
        state.status = FlowStatus::Idle;
        state.email.clear();
        true
    }

    /// Leave the screen: tear the flow down and navigate back
    pub fn go_back(&self) -> bool {
        if !self.teardown() {
            return false;
        }
        self.navigator.navigate_to(Destination::Back);
        true
    }

    /// Invalidate any pending request; idempotent
    pub fn teardown(&self) -> bool {
        match lock(&self.state).session.take() {
            Some(session) => {
                tracing::info!(
                    session_id = %session,
                    event = "flow_torn_down",
                    "Password reset flow torn down"
                );
                true
            }
            None => false,
        }
    }
}
