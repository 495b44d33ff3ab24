//! Password reset request flow
//!
//! Single email field submitted to the reset collaborator, with the same
//! submit guard and stale-response handling as the verification flow.

mod flow;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use flow::RequestResetFlow;
pub use traits::PasswordResetServiceTrait;
pub use types::ResetSnapshot;
