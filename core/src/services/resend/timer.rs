//! Countdown-gated resend driven by a one-second interval task

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::domain::entities::ResendState;
use crate::sync::lock;

use super::countdown::ResendCountdown;
use super::traits::ResendServiceTrait;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Result of a resend intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendOutcome {
    /// The countdown restarted and a new code was requested
    Requested { next_resend_at: DateTime<Utc> },
    /// Still counting down; nothing changed
    CoolingDown { seconds_remaining: u64 },
    /// The timer was stopped with its flow
    Stopped,
}

/// Resend gate owning the countdown and its tick task
///
/// The tick task is acquired on start and released by [`stop`](Self::stop)
/// or on drop, whichever comes first.
pub struct ResendTimer<R: ResendServiceTrait + 'static> {
    countdown: Arc<Mutex<ResendCountdown>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    resend_service: Arc<R>,
    stopped: AtomicBool,
}

impl<R: ResendServiceTrait + 'static> ResendTimer<R> {
    /// Enters `CountingDown(duration_seconds)` and schedules the tick task
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(resend_service: Arc<R>, duration_seconds: u64) -> Self {
        let timer = Self {
            countdown: Arc::new(Mutex::new(ResendCountdown::start(duration_seconds))),
            ticker: Mutex::new(None),
            resend_service,
            stopped: AtomicBool::new(false),
        };
        timer.spawn_ticker();

        tracing::debug!(
            duration_seconds = duration_seconds,
            event = "countdown_started",
            "Resend countdown started"
        );
        timer
    }

    pub fn state(&self) -> ResendState {
        lock(&self.countdown).state()
    }

    pub fn duration_seconds(&self) -> u64 {
        lock(&self.countdown).duration_seconds()
    }

    /// When resend becomes available, `None` once eligible
    pub fn next_resend_at(&self) -> Option<DateTime<Utc>> {
        let remaining = lock(&self.countdown).seconds_remaining();
        (remaining > 0).then(|| Utc::now() + ChronoDuration::seconds(remaining as i64))
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Restarts the countdown and requests a new code, only while eligible
    ///
    /// The request runs detached; its outcome is logged and never blocks or
    /// alters the countdown.
    pub fn resend(&self) -> ResendOutcome {
        if self.is_stopped() {
            tracing::debug!(
                event = "resend_ignored",
                reason = "stopped",
                "Resend timer already stopped"
            );
            return ResendOutcome::Stopped;
        }

        let (restarted, seconds_remaining, duration_seconds) = {
            let mut countdown = lock(&self.countdown);
            let restarted = countdown.try_restart();
            (restarted, countdown.seconds_remaining(), countdown.duration_seconds())
        };

        if !restarted {
            tracing::debug!(
                seconds_remaining = seconds_remaining,
                event = "resend_ignored",
                "Resend requested during cooldown"
            );
            return ResendOutcome::CoolingDown { seconds_remaining };
        }

        self.spawn_ticker();

        let resend_service = Arc::clone(&self.resend_service);
        tokio::spawn(async move {
            if let Err(e) = resend_service.request_resend().await {
                tracing::warn!(
                    error = %e,
                    event = "resend_request_failed",
                    "Resend request failed"
                );
            }
        });

        tracing::info!(
            cooldown_seconds = duration_seconds,
            event = "resend_requested",
            "New verification code requested"
        );

        ResendOutcome::Requested {
            next_resend_at: Utc::now() + ChronoDuration::seconds(duration_seconds as i64),
        }
    }

    /// Cancels the tick task; later resend intents are ignored
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        if let Some(handle) = lock(&self.ticker).take() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub(super) fn countdown_handle(&self) -> std::sync::Weak<Mutex<ResendCountdown>> {
        Arc::downgrade(&self.countdown)
    }

    fn spawn_ticker(&self) {
        let mut ticker = lock(&self.ticker);
        if let Some(handle) = ticker.take() {
            handle.abort();
        }
        if self.is_stopped() || lock(&self.countdown).is_eligible() {
            return;
        }

        let countdown = Arc::clone(&self.countdown);
        *ticker = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                interval.tick().await;

                let (elapsed, eligible) = {
                    let mut countdown = lock(&countdown);
                    let elapsed = countdown.tick();
                    (elapsed, countdown.is_eligible())
                };

                if elapsed {
                    tracing::debug!(event = "countdown_elapsed", "Resend is now available");
                }
                if eligible {
                    break;
                }
            }
        }));
    }
}

impl<R: ResendServiceTrait + 'static> Drop for ResendTimer<R> {
    fn drop(&mut self) {
        let ticker = self.ticker.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = ticker.take() {
            handle.abort();
        }
    }
}
