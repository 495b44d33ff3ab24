//! One-time-code verification flow
//!
//! Composes the segmented entry, the resend timer and the verify call into
//! the state machine a verification screen binds to.

use std::sync::{Arc, Mutex};
use uuid::Uuid;

use fin_shared::{ConfigError, OtpConfig};

use crate::domain::entities::{FlowStatus, ResendState};
use crate::domain::value_objects::Destination;
use crate::errors::{DomainError, ValidationError};
use crate::services::code_entry::{FocusChange, SegmentedCodeEntry};
use crate::services::navigation::Navigator;
use crate::services::resend::{ResendOutcome, ResendServiceTrait, ResendTimer};
use crate::services::submission::{call_with_timeout, IgnoreReason, SubmitOutcome};
use crate::sync::lock;

use super::traits::CodeVerifierTrait;
use super::types::VerificationSnapshot;

struct FlowState {
    entry: SegmentedCodeEntry,
    status: FlowStatus,
    failure: Option<DomainError>,
    // Cleared on teardown; pending calls compare against it before applying results
    session: Option<Uuid>,
    navigated: bool,
}

impl FlowState {
    fn accepts_input(&self) -> bool {
        self.session.is_some()
            && !matches!(self.status, FlowStatus::Submitting | FlowStatus::Success)
    }
}

/// Verification screen controller
///
/// Mount with [`start`](Self::start), feed it user intents, render
/// [`snapshot`](Self::snapshot), and call [`teardown`](Self::teardown) when the
/// screen goes away. At most one verification is in flight per instance and
/// the navigator is invoked at most once on success.
pub struct VerificationFlow<V, R, N>
where
    V: CodeVerifierTrait,
    R: ResendServiceTrait + 'static,
    N: Navigator,
{
    state: Mutex<FlowState>,
    timer: ResendTimer<R>,
    verifier: Arc<V>,
    navigator: Arc<N>,
    config: OtpConfig,
}

impl<V, R, N> VerificationFlow<V, R, N>
where
    V: CodeVerifierTrait,
    R: ResendServiceTrait + 'static,
    N: Navigator,
{
    /// Create the flow with an empty code and a running resend countdown
    ///
    /// Must be called from within a tokio runtime. Fails without starting the
    /// countdown when `config` does not pass [`OtpConfig::validate`].
    ///
    /// # Arguments
    ///
    /// * `verifier` - Verify collaborator
    /// * `resend_service` - Resend collaborator, invoked fire-and-forget
    /// * `navigator` - Host navigation callback
    /// * `config` - Code length, cooldown, timeout and success route
    pub fn start(
        verifier: Arc<V>,
        resend_service: Arc<R>,
        navigator: Arc<N>,
        config: OtpConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let session = Uuid::new_v4();
        tracing::info!(
            session_id = %session,
            code_length = config.code_length,
            cooldown_seconds = config.resend_cooldown_seconds,
            event = "otp_flow_started",
            "Verification flow started"
        );

        Ok(Self {
            state: Mutex::new(FlowState {
                entry: SegmentedCodeEntry::new(config.code_length),
                status: FlowStatus::Idle,
                failure: None,
                session: Some(session),
                navigated: false,
            }),
            timer: ResendTimer::start(resend_service, config.resend_cooldown_seconds),
            verifier,
            navigator,
            config,
        })
    }

    /// Identity of this activation, `None` after teardown
    pub fn session_id(&self) -> Option<Uuid> {
        lock(&self.state).session
    }

    pub fn status(&self) -> FlowStatus {
        lock(&self.state).status
    }

    pub fn resend_state(&self) -> ResendState {
        self.timer.state()
    }

    pub fn config(&self) -> &OtpConfig {
        &self.config
    }

    pub fn snapshot(&self) -> VerificationSnapshot {
        let resend = self.timer.state();
        let state = lock(&self.state);
        VerificationSnapshot {
            slots: state.entry.buffer().slots().to_vec(),
            focus: state.entry.cursor(),
            is_complete: state.entry.is_complete(),
            resend,
            status: state.status,
            failure: state.failure.as_ref().map(ToString::to_string),
            is_active: state.session.is_some(),
        }
    }

    /// Digit typed (or slot cleared with an empty value) in slot `index`
    pub fn on_digit_input(&self, index: usize, value: &str) -> FocusChange {
        self.edit(|entry| entry.set_digit(index, value))
    }

    pub fn on_backspace(&self, index: usize) -> FocusChange {
        self.edit(|entry| entry.backspace(index))
    }

    /// Text pasted into slot `index`
    pub fn on_paste(&self, index: usize, text: &str) -> FocusChange {
        self.edit(|entry| entry.paste(index, text))
    }

    /// Empty the code, e.g. after a failed verification
    pub fn clear_code(&self) -> FocusChange {
        self.edit(SegmentedCodeEntry::clear)
    }

    /// Request a new code if the countdown has elapsed
    ///
    /// Never touches the entered code or the submission status.
    pub fn resend(&self) -> ResendOutcome {
        self.timer.resend()
    }

    /// Verify the entered code
    ///
    /// No-op unless the code is complete and no verification is in flight.
    /// On success the navigator receives the configured success route once;
    /// on failure the entered code is kept so the user can retry or edit.
    pub async fn submit(&self) -> SubmitOutcome {
        let (session, code) = {
            let mut state = lock(&self.state);
            let Some(session) = state.session else {
                return SubmitOutcome::Ignored(IgnoreReason::TornDown);
            };
            match state.status {
                FlowStatus::Submitting => {
                    tracing::debug!(
                        session_id = %session,
                        event = "otp_submit_ignored",
                        "Verification already in flight"
                    );
                    return SubmitOutcome::Ignored(IgnoreReason::AlreadySubmitting);
                }
                FlowStatus::Success => {
                    return SubmitOutcome::Ignored(IgnoreReason::AlreadyCompleted);
                }
                FlowStatus::Idle | FlowStatus::Failed => {}
            }
            if !state.entry.is_complete() {
                let rejected = ValidationError::IncompleteCode {
                    filled: state.entry.buffer().filled_count(),
                    required: state.entry.len(),
                };
                tracing::debug!(
                    session_id = %session,
                    error = %rejected,
                    event = "otp_submit_rejected",
                    "Code incomplete"
                );
                return SubmitOutcome::Rejected(rejected);
            }

            state.status = FlowStatus::Submitting;
            state.failure = None;
            (session, state.entry.as_string())
        };

        tracing::info!(
            session_id = %session,
            event = "otp_submit_started",
            "Submitting verification code"
        );

        let result =
            call_with_timeout(self.verifier.verify_code(&code), self.config.verify_timeout()).await;

        {
            let mut state = lock(&self.state);
            if state.session != Some(session) {
                tracing::warn!(
                    session_id = %session,
                    event = "otp_stale_response_discarded",
                    "Discarding verification result for a torn down flow"
                );
                return SubmitOutcome::Discarded;
            }

            if let Err(e) = result {
                tracing::warn!(
                    session_id = %session,
                    error = %e,
                    event = "otp_verification_failed",
                    "Verification failed"
                );
                state.status = FlowStatus::Failed;
                state.failure = Some(e.clone());
                return SubmitOutcome::Failed(e);
            }

            state.status = FlowStatus::Success;
            if state.navigated {
                return SubmitOutcome::Succeeded;
            }
            state.navigated = true;
        }

        tracing::info!(
            session_id = %session,
            route = %self.config.success_route,
            event = "otp_verified",
            "Verification code accepted"
        );
        self.timer.stop();

        // A teardown since the result was applied suppresses the navigation
        if self.session_id() != Some(session) {
            tracing::debug!(
                session_id = %session,
                event = "otp_navigation_skipped",
                "Flow torn down before navigating"
            );
            return SubmitOutcome::Discarded;
        }
        self.navigator
            .navigate_to(Destination::route(self.config.success_route.clone()));

        SubmitOutcome::Succeeded
    }

    /// Leave the screen: tear the flow down and navigate back
    ///
    /// Returns `false` without navigating if the flow was already torn down
    /// or already navigated on a successful verification.
    pub fn go_back(&self) -> bool {
        match self.release() {
            Some(FlowStatus::Success) => {
                tracing::debug!(event = "otp_back_ignored", "Flow already completed");
                false
            }
            Some(_) => {
                self.navigator.navigate_to(Destination::Back);
                true
            }
            None => false,
        }
    }

    /// Release the countdown task and invalidate any pending verification
    ///
    /// Idempotent; returns `true` on the call that actually tore down.
    pub fn teardown(&self) -> bool {
        self.release().is_some()
    }

    // Status at the moment of teardown, `None` if already torn down
    fn release(&self) -> Option<FlowStatus> {
        let released = {
            let mut state = lock(&self.state);
            let status = state.status;
            state.session.take().map(|session| (session, status))
        };
        self.timer.stop();

        let (session, status) = released?;
        tracing::info!(
            session_id = %session,
            event = "flow_torn_down",
            "Verification flow torn down"
        );
        Some(status)
    }

    fn edit(&self, apply: impl FnOnce(&mut SegmentedCodeEntry) -> FocusChange) -> FocusChange {
        let mut state = lock(&self.state);
        if !state.accepts_input() {
            tracing::debug!(status = %state.status, event = "otp_input_locked", "Ignoring input");
            return FocusChange::Unchanged;
        }
        apply(&mut state.entry)
    }
}
