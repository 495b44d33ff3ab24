//! Verification flow module for one-time-code screens
//!
//! This module provides the verification screen controller:
//! - Segmented code entry with focus management
//! - Countdown-gated resend
//! - Single in-flight verification with timeout and stale-response guard
//! - Navigation on success or back

mod flow;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use flow::VerificationFlow;
pub use traits::CodeVerifierTrait;
pub use types::VerificationSnapshot;
