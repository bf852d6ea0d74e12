//! Host-clock timers behind the pure [`Sequencer`](crate::sequencer::Sequencer)
//! contract. Every timer is cancelled when its owner drops; a callback can
//! never run after the guard is gone.

use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use crate::{
    core::Seconds,
    error::{KeepsakeError, KeepsakeResult},
};

struct TimerShared {
    cancelled: Mutex<bool>,
    cvar: Condvar,
}

impl TimerShared {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            cancelled: Mutex::new(false),
            cvar: Condvar::new(),
        })
    }

    /// Block until the deadline passes or the timer is cancelled. Returns
    /// `true` when the deadline was reached uncancelled.
    fn wait_until(&self, deadline: Instant) -> bool {
        let mut cancelled = self
            .cancelled
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        loop {
            if *cancelled {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            let (guard, _timeout) = self
                .cvar
                .wait_timeout(cancelled, deadline - now)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            cancelled = guard;
        }
    }

    fn cancel(&self) {
        let mut cancelled = self
            .cancelled
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *cancelled = true;
        self.cvar.notify_all();
    }
}

fn check_delay(name: &str, delay: Seconds) -> KeepsakeResult<()> {
    if !delay.as_f64().is_finite() || delay.as_f64() < 0.0 {
        return Err(KeepsakeError::timer(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

/// One-shot completion timer. The callback runs at most once, after `delay`,
/// and never after this guard is dropped: `Drop` cancels the wait and joins
/// the worker thread before returning.
pub struct CompletionTimer {
    shared: Arc<TimerShared>,
    handle: Option<JoinHandle<()>>,
}

impl CompletionTimer {
    pub fn after<F>(delay: Seconds, callback: F) -> KeepsakeResult<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        check_delay("completion delay", delay)?;
        let shared = TimerShared::new();
        let worker = Arc::clone(&shared);
        let deadline = Instant::now() + delay.to_duration();

        let handle = std::thread::Builder::new()
            .name("keepsake-completion".into())
            .spawn(move || {
                if worker.wait_until(deadline) {
                    tracing::debug!(delay_secs = delay.as_f64(), "completion timer fired");
                    callback();
                } else {
                    tracing::debug!("completion timer cancelled before firing");
                }
            })
            .map_err(|e| KeepsakeError::timer(format!("spawn completion timer: {e}")))?;

        Ok(Self {
            shared,
            handle: Some(handle),
        })
    }

    /// Explicit disposal; identical to dropping the guard.
    pub fn cancel(mut self) {
        self.cancel_and_join();
    }

    fn cancel_and_join(&mut self) {
        self.shared.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for CompletionTimer {
    fn drop(&mut self) {
        self.cancel_and_join();
    }
}

/// Repeating timer for the carousel auto-advance. Ticks every `interval`
/// until dropped; the same cancellation discipline as [`CompletionTimer`].
pub struct Ticker {
    shared: Arc<TimerShared>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn every<F>(interval: Seconds, mut on_tick: F) -> KeepsakeResult<Self>
    where
        F: FnMut() + Send + 'static,
    {
        check_delay("tick interval", interval)?;
        if interval.is_zero() {
            return Err(KeepsakeError::timer("tick interval must be > 0"));
        }
        let shared = TimerShared::new();
        let worker = Arc::clone(&shared);
        let period = interval.to_duration();

        let handle = std::thread::Builder::new()
            .name("keepsake-ticker".into())
            .spawn(move || {
                let mut next = Instant::now() + period;
                while worker.wait_until(next) {
                    on_tick();
                    next += period;
                }
                tracing::debug!("ticker cancelled");
            })
            .map_err(|e| KeepsakeError::timer(format!("spawn ticker: {e}")))?;

        Ok(Self {
            shared,
            handle: Some(handle),
        })
    }

    pub fn cancel(mut self) {
        self.cancel_and_join();
    }

    fn cancel_and_join(&mut self) {
        self.shared.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel_and_join();
    }
}
