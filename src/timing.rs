use crate::{
    core::Seconds,
    error::{KeepsakeError, KeepsakeResult},
};

/// Base durations driving the intro timeline. Constant for a given run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Quiet lead-in before the first message line.
    pub start_delay: Seconds,
    /// Spacing between consecutive lines, both phases.
    pub per_line: Seconds,
    /// Visible fade duration of one line.
    pub fade: Seconds,
    /// Pause between the last message and the wish panel. Strictly positive.
    pub gap_before_wishes: Seconds,
    /// Delay between the wish panel appearing and its first line.
    pub wish_entry_delay: Seconds,
    /// Tail after the last wish before the completion signal.
    pub tail_delay: Seconds,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            start_delay: Seconds(1.0),
            per_line: Seconds(3.5),
            fade: Seconds(2.0),
            gap_before_wishes: Seconds(2.0),
            wish_entry_delay: Seconds(0.5),
            tail_delay: Seconds(2.0),
        }
    }
}

impl TimingConfig {
    pub fn validate(&self) -> KeepsakeResult<()> {
        let fields = [
            ("start_delay", self.start_delay),
            ("per_line", self.per_line),
            ("fade", self.fade),
            ("gap_before_wishes", self.gap_before_wishes),
            ("wish_entry_delay", self.wish_entry_delay),
            ("tail_delay", self.tail_delay),
        ];
        for (name, value) in fields {
            if !value.as_f64().is_finite() {
                return Err(KeepsakeError::validation(format!("{name} must be finite")));
            }
            if value.as_f64() < 0.0 {
                return Err(KeepsakeError::validation(format!("{name} must be >= 0")));
            }
        }
        if self.per_line.is_zero() {
            return Err(KeepsakeError::validation("per_line must be > 0"));
        }
        // A zero gap would let the wish panel land on the phase divider.
        if self.gap_before_wishes.is_zero() {
            return Err(KeepsakeError::validation("gap_before_wishes must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_authored_run() {
        let t = TimingConfig::default();
        assert_eq!(t.start_delay, Seconds(1.0));
        assert_eq!(t.per_line, Seconds(3.5));
        assert_eq!(t.gap_before_wishes, Seconds(2.0));
        assert!(t.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_gap() {
        let t = TimingConfig {
            gap_before_wishes: Seconds::ZERO,
            ..TimingConfig::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_duration() {
        let t = TimingConfig {
            tail_delay: Seconds(-1.0),
            ..TimingConfig::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let t: TimingConfig = serde_json::from_str(r#"{ "per_line": 2.0 }"#).unwrap();
        assert_eq!(t.per_line, Seconds(2.0));
        assert_eq!(t.start_delay, Seconds(1.0));
    }
}
