use crate::{
    core::Seconds,
    ease::Ease,
    error::{KeepsakeError, KeepsakeResult},
};

/// One authored line of the intro. Plain text renders as-is; a composite
/// line is resolved by the presentation surface via its `render_id`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line {
    Text { value: String },
    Composite { render_id: String },
}

impl Line {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    pub fn composite(render_id: impl Into<String>) -> Self {
        Self::Composite {
            render_id: render_id.into(),
        }
    }

    pub fn validate(&self) -> KeepsakeResult<()> {
        match self {
            Self::Text { value } => {
                if value.trim().is_empty() {
                    return Err(KeepsakeError::validation("text line must be non-empty"));
                }
            }
            Self::Composite { render_id } => {
                if render_id.trim().is_empty() {
                    return Err(KeepsakeError::validation(
                        "composite line render_id must be non-empty",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// The numeric counter hosted inside one message line. It animates over its
/// own duration, independent of the completion total.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CounterSpec {
    /// Index of the hosting message line.
    pub line: usize,
    pub from: i64,
    pub to: i64,
    pub duration: Seconds,
    pub ease: Ease,
}

impl CounterSpec {
    pub fn validate(&self, message_count: usize) -> KeepsakeResult<()> {
        if self.line >= message_count {
            return Err(KeepsakeError::validation(format!(
                "counter host line {} is out of range (script has {} messages)",
                self.line, message_count
            )));
        }
        if !self.duration.as_f64().is_finite() || self.duration.as_f64() <= 0.0 {
            return Err(KeepsakeError::validation("counter duration must be > 0"));
        }
        Ok(())
    }

    /// Counter value `elapsed` seconds after its host line appears.
    pub fn value_at(&self, elapsed: Seconds) -> i64 {
        let t = (elapsed.as_f64() / self.duration.as_f64()).clamp(0.0, 1.0);
        let eased = self.ease.apply(t);
        let value = self.from as f64 + (self.to - self.from) as f64 * eased;
        value.round() as i64
    }
}

/// The authored intro content: two fixed line lists plus the optional
/// counter. Immutable once built.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    pub messages: Vec<Line>,
    pub wishes: Vec<Line>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter: Option<CounterSpec>,
}

impl Script {
    pub fn validate(&self) -> KeepsakeResult<()> {
        for line in self.messages.iter().chain(self.wishes.iter()) {
            line.validate()?;
        }
        if let Some(counter) = &self.counter {
            counter.validate(self.messages.len())?;
        }
        Ok(())
    }
}
