//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `flow` - OTP verification and password reset flow settings

pub mod environment;
pub mod flow;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use flow::{OtpConfig, PasswordResetConfig};

/// Configuration rejected by [`AppConfig::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Complete client configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Verification screen configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Password reset screen configuration
    #[serde(default)]
    pub password_reset: PasswordResetConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create configuration for an environment with its logging defaults
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            otp: OtpConfig::default(),
            password_reset: PasswordResetConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from environment
    ///
    /// Malformed numeric overrides are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::for_environment(Environment::from_env());

        if let Some(length) = env_parse("OTP_CODE_LENGTH") {
            config.otp.code_length = length;
        }
        if let Some(seconds) = env_parse("OTP_RESEND_COOLDOWN_SECONDS") {
            config.otp.resend_cooldown_seconds = seconds;
        }
        if let Some(seconds) = env_parse("OTP_VERIFY_TIMEOUT_SECONDS") {
            config.otp.verify_timeout_seconds = seconds;
        }
        if let Ok(route) = env::var("OTP_SUCCESS_ROUTE") {
            config.otp.success_route = route;
        }
        if let Some(seconds) = env_parse("PASSWORD_RESET_TIMEOUT_SECONDS") {
            config.password_reset.request_timeout_seconds = seconds;
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }

    /// Check the invariants the flow controllers rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.otp.validate()
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}
