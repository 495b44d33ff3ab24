//! Validation errors raised by malformed user intents

use thiserror::Error;

/// Rejected input; the public intent handlers treat these as silent no-ops
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Slot index {index} is out of range for a {length}-digit code")]
    InvalidSlotIndex { index: usize, length: usize },

    #[error("Expected a single digit, got {value:?}")]
    InvalidDigit { value: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Code incomplete: {filled} of {required} digits entered")]
    IncompleteCode { filled: usize, required: usize },
}
