//! # Pocket Ledger Core
//!
//! Flow controllers behind the sign-in screens of the Pocket Ledger client.
//! This crate contains the one-time-code verification flow, the password
//! reset request flow, the entities they own, the collaborator traits a host
//! implements, and the error types shared between them.

pub mod domain;
pub mod errors;
pub mod services;

mod sync;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
