//! Flow controller configuration for the verification and password reset screens

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ConfigError;

/// Number of digits in a one-time code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Seconds a user waits before another code can be requested
pub const DEFAULT_RESEND_COOLDOWN_SECONDS: u64 = 60;

/// Upper bound on a single verify or reset request
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// One-time-code verification screen configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OtpConfig {
    /// Number of segmented input slots
    pub code_length: usize,

    /// Countdown length before resend becomes available (seconds)
    pub resend_cooldown_seconds: u64,

    /// Timeout applied to the verify call (seconds)
    pub verify_timeout_seconds: u64,

    /// Route handed to the navigator after a successful verification
    pub success_route: String,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            resend_cooldown_seconds: DEFAULT_RESEND_COOLDOWN_SECONDS,
            verify_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            success_route: String::from("home"),
        }
    }
}

impl OtpConfig {
    /// Set the code length
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    /// Set the resend cooldown in seconds
    pub fn with_resend_cooldown(mut self, seconds: u64) -> Self {
        self.resend_cooldown_seconds = seconds;
        self
    }

    /// Set the verify timeout in seconds
    pub fn with_verify_timeout(mut self, seconds: u64) -> Self {
        self.verify_timeout_seconds = seconds;
        self
    }

    /// Set the route used after success
    pub fn with_success_route(mut self, route: impl Into<String>) -> Self {
        self.success_route = route.into();
        self
    }

    /// Verify call bound; `Duration::ZERO` means unbounded
    pub fn verify_timeout(&self) -> Duration {
        Duration::from_secs(self.verify_timeout_seconds)
    }

    /// Check the values the verification flow relies on
    ///
    /// A zero-length code would count as complete while empty, and a zero
    /// cooldown would leave resend ungated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.code_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "otp.code_length".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.resend_cooldown_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "otp.resend_cooldown_seconds".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.success_route.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "otp.success_route".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Password reset request screen configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PasswordResetConfig {
    /// Timeout applied to the reset request call (seconds)
    pub request_timeout_seconds: u64,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl PasswordResetConfig {
    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = seconds;
        self
    }

    /// Reset call bound; `Duration::ZERO` means unbounded
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
