//! Resend gating
//!
//! [`ResendCountdown`] is the pure two-state machine; [`ResendTimer`] drives it
//! from a one-second tokio interval and fires the resend request.

mod countdown;
mod timer;
mod traits;

#[cfg(test)]
mod tests;

pub use countdown::ResendCountdown;
pub use timer::{ResendOutcome, ResendTimer};
pub use traits::ResendServiceTrait;
