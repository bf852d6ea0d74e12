use crate::{
    core::Seconds,
    error::{KeepsakeError, KeepsakeResult},
};

/// Lifecycle of one activation. `Completed` is terminal; a cancelled run
/// goes back to `Idle` and never fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Running,
    Completed,
}

/// Pure completion state machine. Translates a schedule total into exactly
/// one completion event under simulated time; the host-clock counterpart is
/// [`CompletionTimer`](crate::driver::CompletionTimer).
#[derive(Clone, Debug)]
pub struct Sequencer {
    phase: Phase,
    total: Seconds,
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            total: Seconds::ZERO,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Start (or restart) a run. Re-activation mid-run drops the prior
    /// deadline and reschedules from the new total; this is a correctness
    /// guard, not a supported feature.
    pub fn activate(&mut self, total: Seconds) -> KeepsakeResult<()> {
        if !total.as_f64().is_finite() || total.as_f64() < 0.0 {
            return Err(KeepsakeError::validation(
                "sequencer total must be finite and >= 0",
            ));
        }
        self.phase = Phase::Running;
        self.total = total;
        Ok(())
    }

    /// Advance simulated time to `at` seconds since activation. Returns
    /// `true` exactly once, on the tick that crosses the total.
    pub fn advance_to(&mut self, at: Seconds) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if at >= self.total {
            self.phase = Phase::Completed;
            return true;
        }
        false
    }

    /// Disposal before the deadline. No completion can be observed after
    /// this returns.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Idle;
        }
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
