//! Resend countdown state as exposed to the host.

use serde::Serialize;

/// Snapshot of the resend gate
///
/// `can_resend` holds exactly when `seconds_remaining` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResendState {
    seconds_remaining: u64,
    can_resend: bool,
}

impl ResendState {
    /// State for a countdown with `seconds_remaining` left
    pub fn counting_down(seconds_remaining: u64) -> Self {
        Self {
            seconds_remaining,
            can_resend: seconds_remaining == 0,
        }
    }

    /// State once the countdown has elapsed
    pub fn eligible() -> Self {
        Self::counting_down(0)
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.seconds_remaining
    }

    pub fn can_resend(&self) -> bool {
        self.can_resend
    }

    pub fn phase(&self) -> ResendPhase {
        if self.can_resend {
            ResendPhase::Eligible
        } else {
            ResendPhase::CountingDown {
                seconds_remaining: self.seconds_remaining,
            }
        }
    }
}

/// The two states of the resend gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendPhase {
    CountingDown { seconds_remaining: u64 },
    Eligible,
}
