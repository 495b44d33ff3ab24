//! Trait for the code verification collaborator

use async_trait::async_trait;

/// Backend call that checks an entered one-time code
#[async_trait]
pub trait CodeVerifierTrait: Send + Sync {
    /// Verify the assembled code; `Err` carries the failure message
    ///
    /// Returns exactly once per call.
    async fn verify_code(&self, code: &str) -> Result<(), String>;
}
