//! Pure resend countdown state machine

use crate::domain::entities::{ResendPhase, ResendState};

/// Countdown from a fixed duration down to resend eligibility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendCountdown {
    duration_seconds: u64,
    seconds_remaining: u64,
}

impl ResendCountdown {
    /// Enters `CountingDown(duration_seconds)`
    pub fn start(duration_seconds: u64) -> Self {
        Self {
            duration_seconds,
            seconds_remaining: duration_seconds,
        }
    }

    /// Duration used by the initial start and every restart
    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.seconds_remaining
    }

    pub fn is_eligible(&self) -> bool {
        self.seconds_remaining == 0
    }

    pub fn state(&self) -> ResendState {
        ResendState::counting_down(self.seconds_remaining)
    }

    pub fn phase(&self) -> ResendPhase {
        self.state().phase()
    }

    /// Advances the countdown by one second
    ///
    /// Returns `true` on the tick that reaches eligibility. Ticking while
    /// eligible does nothing.
    pub fn tick(&mut self) -> bool {
        if self.seconds_remaining == 0 {
            return false;
        }
        self.seconds_remaining -= 1;
        self.seconds_remaining == 0
    }

    /// Restarts the countdown if eligible
    ///
    /// Returns `false` and leaves the countdown untouched while counting down.
    pub fn try_restart(&mut self) -> bool {
        if !self.is_eligible() {
            return false;
        }
        self.seconds_remaining = self.duration_seconds;
        true
    }
}
