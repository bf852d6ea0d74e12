use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    core::Seconds,
    driver::CompletionTimer,
    error::KeepsakeResult,
    eval::{self, PresentationFrame},
    schedule::Schedule,
    script::Script,
    sequencer::Sequencer,
    timing::TimingConfig,
};

/// The authored document the CLI consumes: timing plus script. The schedule
/// is always derived, never stored.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Storyboard {
    #[serde(default)]
    pub timing: TimingConfig,
    pub script: Script,
}

/// One mounted intro: script, timing, and the schedule derived from them.
/// Construction validates; after that every query is pure.
#[derive(Clone, Debug)]
pub struct Presentation {
    script: Script,
    timing: TimingConfig,
    schedule: Schedule,
}

impl Presentation {
    pub fn new(script: Script, timing: TimingConfig) -> KeepsakeResult<Self> {
        let schedule = Schedule::derive(&timing, &script)?;
        Ok(Self {
            script,
            timing,
            schedule,
        })
    }

    pub fn from_storyboard(storyboard: Storyboard) -> KeepsakeResult<Self> {
        Self::new(storyboard.script, storyboard.timing)
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn total_duration(&self) -> Seconds {
        self.schedule.total
    }

    /// What the surface shows `at` seconds after activation.
    pub fn frame_at(&self, at: Seconds) -> KeepsakeResult<PresentationFrame> {
        eval::eval_frame(&self.schedule, &self.script, &self.timing, at)
    }

    /// Schedule the completion signal on the host clock. The callback runs
    /// once, `total_duration` after this call; dropping the returned timer
    /// is the disposal path and suppresses it.
    pub fn start<F>(&self, on_complete: F) -> KeepsakeResult<CompletionTimer>
    where
        F: FnOnce() + Send + 'static,
    {
        CompletionTimer::after(self.total_duration(), on_complete)
    }

    /// A pre-activated pure sequencer for simulated-time hosts. Drive it
    /// with `advance_to`; it fires exactly once, at the completion total.
    pub fn sequencer(&self) -> KeepsakeResult<Sequencer> {
        let mut sequencer = Sequencer::new();
        sequencer.activate(self.total_duration())?;
        Ok(sequencer)
    }
}

/// The parent container's completed flag: false until the completion signal,
/// true exactly once after it. Downstream sections (gallery, theater) reveal
/// when this flips.
#[derive(Clone, Debug, Default)]
pub struct IntroGate {
    completed: Arc<AtomicBool>,
}

impl IntroGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed(&self) -> bool {
        self.completed.load(Ordering::Acquire)
    }

    /// Arm the gate on a presentation. Keep the returned timer alive for as
    /// long as the intro is mounted; dropping it cancels the pending flip.
    pub fn arm(&self, presentation: &Presentation) -> KeepsakeResult<CompletionTimer> {
        let flag = Arc::clone(&self.completed);
        presentation.start(move || {
            flag.store(true, Ordering::Release);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Line;
    use std::time::Duration;

    fn short_presentation() -> Presentation {
        let timing = TimingConfig {
            start_delay: Seconds(0.005),
            per_line: Seconds(0.005),
            fade: Seconds(0.005),
            gap_before_wishes: Seconds(0.005),
            wish_entry_delay: Seconds(0.0),
            tail_delay: Seconds(0.005),
        };
        let script = Script {
            messages: vec![Line::text("hi")],
            wishes: vec![Line::text("bye")],
            counter: None,
        };
        Presentation::new(script, timing).unwrap()
    }

    #[test]
    fn storyboard_roundtrips_and_derives() {
        let storyboard = Storyboard {
            timing: TimingConfig::default(),
            script: Script {
                messages: vec![Line::text("a"), Line::text("b")],
                wishes: vec![Line::text("w")],
                counter: None,
            },
        };
        let text = serde_json::to_string(&storyboard).unwrap();
        let de: Storyboard = serde_json::from_str(&text).unwrap();
        assert_eq!(de, storyboard);

        let p = Presentation::from_storyboard(de).unwrap();
        // start=1, 2 lines * 3.5, gap 2, 1 wish * 3.5, tail 2.
        assert_eq!(p.total_duration(), Seconds(15.5));
    }

    #[test]
    fn gate_flips_after_total() {
        let p = short_presentation();
        let gate = IntroGate::new();
        let timer = gate.arm(&p).unwrap();

        assert!(!gate.completed());
        std::thread::sleep(Duration::from_millis(120));
        assert!(gate.completed());
        drop(timer);
        assert!(gate.completed());
    }

    #[test]
    fn dropped_gate_timer_never_flips() {
        let timing = TimingConfig {
            start_delay: Seconds(0.1),
            per_line: Seconds(0.1),
            fade: Seconds(0.1),
            gap_before_wishes: Seconds(0.1),
            wish_entry_delay: Seconds(0.0),
            tail_delay: Seconds(0.1),
        };
        let script = Script {
            messages: vec![Line::text("hi")],
            wishes: vec![Line::text("bye")],
            counter: None,
        };
        let p = Presentation::new(script, timing).unwrap();

        let gate = IntroGate::new();
        let timer = gate.arm(&p).unwrap();
        drop(timer);
        std::thread::sleep(Duration::from_millis(700));
        assert!(!gate.completed());
    }
}
