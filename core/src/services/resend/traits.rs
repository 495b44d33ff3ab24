//! Trait for the code resend collaborator

use async_trait::async_trait;

/// Backend call that sends a fresh one-time code
#[async_trait]
pub trait ResendServiceTrait: Send + Sync {
    /// Request a new code; the outcome is only logged
    async fn request_resend(&self) -> Result<(), String>;
}
