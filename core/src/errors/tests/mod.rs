//! Unit tests for domain error types

use crate::errors::{DomainError, DomainResult, ValidationError};

#[test]
fn test_validation_error_messages() {
    let error = ValidationError::InvalidSlotIndex { index: 7, length: 6 };
    assert_eq!(error.to_string(), "Slot index 7 is out of range for a 6-digit code");

    let error = ValidationError::InvalidDigit { value: "42".to_string() };
    assert_eq!(error.to_string(), "Expected a single digit, got \"42\"");

    let error = ValidationError::IncompleteCode { filled: 5, required: 6 };
    assert!(error.to_string().contains("5 of 6"));
}

#[test]
fn test_validation_converts_transparently() {
    fn reject() -> DomainResult<()> {
        let checked: Result<(), ValidationError> = Err(ValidationError::InvalidEmail);
        checked?;
        Ok(())
    }

    let error = reject().unwrap_err();
    assert_eq!(error, DomainError::Validation(ValidationError::InvalidEmail));
    assert_eq!(error.to_string(), "Invalid email format");
    assert!(!error.is_submission_failure());
}

#[test]
fn test_submission_failures() {
    let failed = DomainError::SubmissionFailed {
        message: "code mismatch".to_string(),
    };
    assert!(failed.is_submission_failure());
    assert_eq!(failed.to_string(), "Submission failed: code mismatch");

    let timeout = DomainError::Timeout { seconds: 30 };
    assert!(timeout.is_submission_failure());
    assert_eq!(timeout.to_string(), "Request timed out after 30 seconds");
}
