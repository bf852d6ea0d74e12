use std::fmt;

use crate::{
    core::Seconds,
    error::{KeepsakeError, KeepsakeResult},
    script::Script,
    timing::TimingConfig,
};

/// The opening rule draws in ahead of the first line, clamped to
/// `start_delay` when that comes first.
const OPENING_RULE_OFFSET: Seconds = Seconds(0.5);

/// One scheduled visual unit of the intro.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementId {
    OpeningRule,
    Message(usize),
    Counter,
    PhaseDivider,
    WishPanel,
    Wish(usize),
    ClosingRule,
    Footer,
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpeningRule => write!(f, "opening-rule"),
            Self::Message(i) => write!(f, "message[{i}]"),
            Self::Counter => write!(f, "counter"),
            Self::PhaseDivider => write!(f, "phase-divider"),
            Self::WishPanel => write!(f, "wish-panel"),
            Self::Wish(j) => write!(f, "wish[{j}]"),
            Self::ClosingRule => write!(f, "closing-rule"),
            Self::Footer => write!(f, "footer"),
        }
    }
}

/// `(element, start offset)` pair. Derived, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleEntry {
    pub element: ElementId,
    pub offset: Seconds,
}

/// The full derived timeline: every element's start offset plus the phase
/// boundaries and the completion total. Pure function of
/// `(TimingConfig, Script)`; re-deriving from the same inputs yields the
/// same values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
    pub part1_end: Seconds,
    pub box_appear: Seconds,
    pub total: Seconds,
}

impl Schedule {
    pub fn derive(timing: &TimingConfig, script: &Script) -> KeepsakeResult<Self> {
        timing.validate()?;
        script.validate()?;

        let n = script.messages.len();
        let m = script.wishes.len();

        let part1_end = timing.start_delay + timing.per_line * n as f64;
        let box_appear = part1_end + timing.gap_before_wishes;
        let total = box_appear + timing.per_line * m as f64 + timing.tail_delay;

        let mut entries = Vec::with_capacity(n + m + 6);

        let opening = if timing.start_delay < OPENING_RULE_OFFSET {
            timing.start_delay
        } else {
            OPENING_RULE_OFFSET
        };
        entries.push(ScheduleEntry {
            element: ElementId::OpeningRule,
            offset: opening,
        });

        for i in 0..n {
            let offset = timing.start_delay + timing.per_line * i as f64;
            entries.push(ScheduleEntry {
                element: ElementId::Message(i),
                offset,
            });
            if script.counter.as_ref().is_some_and(|c| c.line == i) {
                entries.push(ScheduleEntry {
                    element: ElementId::Counter,
                    offset,
                });
            }
        }

        entries.push(ScheduleEntry {
            element: ElementId::PhaseDivider,
            offset: part1_end,
        });
        entries.push(ScheduleEntry {
            element: ElementId::WishPanel,
            offset: box_appear,
        });

        for j in 0..m {
            entries.push(ScheduleEntry {
                element: ElementId::Wish(j),
                offset: box_appear + timing.wish_entry_delay + timing.per_line * j as f64,
            });
        }

        entries.push(ScheduleEntry {
            element: ElementId::ClosingRule,
            offset: total.saturating_sub(timing.tail_delay),
        });
        entries.push(ScheduleEntry {
            element: ElementId::Footer,
            offset: total,
        });

        let schedule = Self {
            entries,
            part1_end,
            box_appear,
            total,
        };
        schedule.validate(timing, script)?;
        Ok(schedule)
    }

    pub fn offset_of(&self, element: ElementId) -> Option<Seconds> {
        self.entries
            .iter()
            .find(|e| e.element == element)
            .map(|e| e.offset)
    }

    /// Invariant checks: authored order is offset order within each phase,
    /// phase boundaries strictly separate, and the completion total covers
    /// the last line's visible window. A failure here is a design-time
    /// defect in the inputs, not a runtime condition.
    pub fn validate(&self, timing: &TimingConfig, script: &Script) -> KeepsakeResult<()> {
        let n = script.messages.len();
        let m = script.wishes.len();

        let message_offsets: Vec<Seconds> = (0..n)
            .map(|i| self.offset_of(ElementId::Message(i)))
            .collect::<Option<_>>()
            .ok_or_else(|| KeepsakeError::schedule("missing message entry"))?;
        if !message_offsets.windows(2).all(|w| w[0] <= w[1]) {
            return Err(KeepsakeError::schedule("message offsets must not decrease"));
        }
        if let Some(last) = message_offsets.last()
            && self.part1_end < *last
        {
            return Err(KeepsakeError::schedule("part1_end precedes the last message"));
        }

        if self.box_appear <= self.part1_end {
            return Err(KeepsakeError::schedule(
                "wish panel must appear strictly after the message phase",
            ));
        }

        let wish_offsets: Vec<Seconds> = (0..m)
            .map(|j| self.offset_of(ElementId::Wish(j)))
            .collect::<Option<_>>()
            .ok_or_else(|| KeepsakeError::schedule("missing wish entry"))?;
        if !wish_offsets.windows(2).all(|w| w[0] <= w[1]) {
            return Err(KeepsakeError::schedule("wish offsets must not decrease"));
        }
        if let Some(first) = wish_offsets.first()
            && *first < self.box_appear
        {
            return Err(KeepsakeError::schedule("wish precedes its panel"));
        }

        if let Some(closing) = self.offset_of(ElementId::ClosingRule)
            && let Some(last) = wish_offsets.last()
            && closing < *last
        {
            return Err(KeepsakeError::schedule(
                "closing rule precedes the last wish",
            ));
        }

        // Completion must not cut off the last scheduled line.
        let floor = match wish_offsets.last() {
            Some(last) => *last + timing.per_line,
            None => self.box_appear,
        };
        if self.total < floor {
            return Err(KeepsakeError::schedule(
                "total duration ends before the last line finishes",
            ));
        }

        if let Some(counter) = &script.counter {
            let host = self
                .offset_of(ElementId::Message(counter.line))
                .ok_or_else(|| KeepsakeError::schedule("counter host line is unscheduled"))?;
            let counter_offset = self
                .offset_of(ElementId::Counter)
                .ok_or_else(|| KeepsakeError::schedule("counter is unscheduled"))?;
            if counter_offset != host {
                return Err(KeepsakeError::schedule(
                    "counter must start with its host line",
                ));
            }
        }

        Ok(())
    }
}
