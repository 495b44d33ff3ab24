//! Mock collaborators shared by the flow tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::domain::value_objects::Destination;
use crate::services::navigation::Navigator;
use crate::services::password_reset::PasswordResetServiceTrait;
use crate::services::resend::ResendServiceTrait;
use crate::services::verification::CodeVerifierTrait;

// Mock verifier accepting a single expected code
pub struct MockCodeVerifier {
    pub expected_code: String,
    pub received: Arc<Mutex<Vec<String>>>,
    pub gate: Option<Arc<Notify>>,
}

impl MockCodeVerifier {
    pub fn new(expected_code: &str) -> Self {
        Self {
            expected_code: expected_code.to_string(),
            received: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Holds every call until the returned `Notify` is signalled
    pub fn gated(expected_code: &str) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let mut verifier = Self::new(expected_code);
        verifier.gate = Some(Arc::clone(&gate));
        (verifier, gate)
    }

    pub fn calls(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl CodeVerifierTrait for MockCodeVerifier {
    async fn verify_code(&self, code: &str) -> Result<(), String> {
        self.received.lock().unwrap().push(code.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if code == self.expected_code {
            Ok(())
        } else {
            Err("Invalid verification code".to_string())
        }
    }
}

// Mock resend service counting requests
pub struct MockResendService {
    pub requests: Arc<AtomicUsize>,
    pub should_fail: bool,
}

impl MockResendService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            requests: Arc::new(AtomicUsize::new(0)),
            should_fail,
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResendServiceTrait for MockResendService {
    async fn request_resend(&self) -> Result<(), String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err("SMS gateway unavailable".to_string());
        }
        Ok(())
    }
}

// Mock password reset service recording submitted emails
pub struct MockPasswordResetService {
    pub received: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
    pub gate: Option<Arc<Notify>>,
}

impl MockPasswordResetService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            should_fail,
            gate: None,
        }
    }

    pub fn gated(should_fail: bool) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let mut service = Self::new(should_fail);
        service.gate = Some(Arc::clone(&gate));
        (service, gate)
    }

    pub fn calls(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl PasswordResetServiceTrait for MockPasswordResetService {
    async fn request_password_reset(&self, email: &str) -> Result<(), String> {
        self.received.lock().unwrap().push(email.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.should_fail {
            return Err("Mail service unavailable".to_string());
        }
        Ok(())
    }
}

// Mock navigator recording destinations
#[derive(Default)]
pub struct MockNavigator {
    pub visited: Mutex<Vec<Destination>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destinations(&self) -> Vec<Destination> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for MockNavigator {
    fn navigate_to(&self, destination: Destination) {
        self.visited.lock().unwrap().push(destination);
    }
}
