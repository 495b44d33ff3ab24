//! Trait for the password reset collaborator

use async_trait::async_trait;

/// Backend call that emails a password reset link
#[async_trait]
pub trait PasswordResetServiceTrait: Send + Sync {
    /// Request a reset for `email`; returns exactly once per call
    async fn request_password_reset(&self, email: &str) -> Result<(), String>;
}
