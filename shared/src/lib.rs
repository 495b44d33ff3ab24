//! Shared configuration and utilities for the Pocket Ledger client flows
//!
//! This crate provides common functionality used by the flow controllers:
//! - Configuration types
//! - Tracing bootstrap
//! - Input validation helpers

pub mod config;
pub mod telemetry;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, Environment, LogFormat, LoggingConfig, OtpConfig,
    PasswordResetConfig,
};
pub use telemetry::init_tracing;
pub use utils::validation;
