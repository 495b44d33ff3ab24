//! Unit tests for the password reset request flow

use std::sync::Arc;

use fin_shared::PasswordResetConfig;

use crate::domain::entities::FlowStatus;
use crate::domain::value_objects::Destination;
use crate::errors::{DomainError, ValidationError};
use crate::services::mocks::{MockNavigator, MockPasswordResetService};
use crate::services::password_reset::RequestResetFlow;
use crate::services::submission::{IgnoreReason, SubmitOutcome};

fn build_flow(
    should_fail: bool,
) -> (
    RequestResetFlow<MockPasswordResetService, MockNavigator>,
    Arc<MockPasswordResetService>,
    Arc<MockNavigator>,
) {
    let service = Arc::new(MockPasswordResetService::new(should_fail));
    let navigator = Arc::new(MockNavigator::new());
    let flow = RequestResetFlow::new(
        service.clone(),
        navigator.clone(),
        PasswordResetConfig::default(),
    );
    (flow, service, navigator)
}

#[tokio::test]
async fn test_invalid_email_stays_idle_without_calling_service() {
    let (flow, service, _) = build_flow(false);
    flow.set_email("not-an-email");

    let outcome = flow.submit().await;

    assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::InvalidEmail));
    assert_eq!(flow.status(), FlowStatus::Idle);
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn test_successful_request() {
    let (flow, service, navigator) = build_flow(false);
    flow.set_email("  jane@example.com ");

    assert_eq!(flow.submit().await, SubmitOutcome::Succeeded);

    assert_eq!(flow.status(), FlowStatus::Success);
    assert_eq!(service.calls(), vec!["jane@example.com".to_string()]);
    assert!(navigator.destinations().is_empty());
}

#[tokio::test]
async fn test_failure_then_retry_keeps_email() {
    let (flow, service, _) = build_flow(true);
    flow.set_email("jane@example.com");

    let outcome = flow.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(DomainError::SubmissionFailed { .. })));
    let snapshot = flow.snapshot();
    assert_eq!(snapshot.status, FlowStatus::Failed);
    assert_eq!(snapshot.failure.as_deref(), Some("Submission failed: Mail service unavailable"));

    assert!(flow.retry());
    let snapshot = flow.snapshot();
    assert_eq!(snapshot.status, FlowStatus::Idle);
    assert_eq!(snapshot.email, "jane@example.com");
    assert!(snapshot.failure.is_none());

    // Retry is only valid from Failed
    assert!(!flow.retry());

    flow.submit().await;
    assert_eq!(service.calls().len(), 2);
}

#[tokio::test]
async fn test_reset_only_from_success_clears_email() {
    let (flow, _, _) = build_flow(false);
    flow.set_email("jane@example.com");
    assert!(!flow.reset());

    flow.submit().await;
    assert!(flow.reset());

    assert_eq!(flow.status(), FlowStatus::Idle);
    assert_eq!(flow.email(), "");
    assert!(!flow.reset());
}

#[tokio::test]
async fn test_in_flight_guard_and_locked_field() {
    let (service, gate) = MockPasswordResetService::gated(false);
    let service = Arc::new(service);
    let flow = Arc::new(RequestResetFlow::new(
        service.clone(),
        Arc::new(MockNavigator::new()),
        PasswordResetConfig::default(),
    ));
    flow.set_email("jane@example.com");

    let pending = tokio::spawn({
        let flow = Arc::clone(&flow);
        async move { flow.submit().await }
    });
    while service.calls().is_empty() {
        tokio::task::yield_now().await;
    }

    assert_eq!(flow.status(), FlowStatus::Submitting);
    assert_eq!(flow.submit().await, SubmitOutcome::Ignored(IgnoreReason::AlreadySubmitting));
    assert!(!flow.set_email("other@example.com"));

    gate.notify_one();
    assert_eq!(pending.await.unwrap(), SubmitOutcome::Succeeded);
    assert_eq!(service.calls().len(), 1);
    assert_eq!(flow.email(), "jane@example.com");
}

#[tokio::test]
async fn test_late_response_after_teardown_is_discarded() {
    let (service, gate) = MockPasswordResetService::gated(false);
    let service = Arc::new(service);
    let flow = Arc::new(RequestResetFlow::new(
        service.clone(),
        Arc::new(MockNavigator::new()),
        PasswordResetConfig::default(),
    ));
    flow.set_email("jane@example.com");

    let pending = tokio::spawn({
        let flow = Arc::clone(&flow);
        async move { flow.submit().await }
    });
    while service.calls().is_empty() {
        tokio::task::yield_now().await;
    }

    flow.teardown();
    gate.notify_one();

    assert_eq!(pending.await.unwrap(), SubmitOutcome::Discarded);
    assert_eq!(flow.status(), FlowStatus::Submitting);
    assert!(!flow.snapshot().is_active);
}

#[tokio::test(start_paused = true)]
async fn test_request_timeout() {
    let (service, _gate) = MockPasswordResetService::gated(false);
    let flow = RequestResetFlow::new(
        Arc::new(service),
        Arc::new(MockNavigator::new()),
        PasswordResetConfig::default().with_request_timeout(5),
    );
    flow.set_email("jane@example.com");

    assert_eq!(
        flow.submit().await,
        SubmitOutcome::Failed(DomainError::Timeout { seconds: 5 })
    );
    assert_eq!(flow.status(), FlowStatus::Failed);
}

#[tokio::test]
async fn test_go_back() {
    let (flow, _, navigator) = build_flow(false);

    assert!(flow.go_back());
    assert!(!flow.go_back());
    assert_eq!(navigator.destinations(), vec![Destination::Back]);
    assert!(!flow.set_email("jane@example.com"));
    assert_eq!(flow.submit().await, SubmitOutcome::Ignored(IgnoreReason::TornDown));
}
