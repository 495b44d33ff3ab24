//! Flow controllers and the collaborator seams they depend on.

pub mod code_entry;
pub mod navigation;
pub mod password_reset;
pub mod resend;
pub mod submission;
pub mod verification;

#[cfg(test)]
pub(crate) mod mocks;

// Re-export commonly used types
pub use code_entry::{FocusChange, SegmentedCodeEntry};
pub use navigation::Navigator;
pub use password_reset::{PasswordResetServiceTrait, RequestResetFlow, ResetSnapshot};
pub use resend::{ResendCountdown, ResendOutcome, ResendServiceTrait, ResendTimer};
pub use submission::{IgnoreReason, SubmitOutcome};
pub use verification::{CodeVerifierTrait, VerificationFlow, VerificationSnapshot};
