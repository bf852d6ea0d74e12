#![forbid(unsafe_code)]

pub mod ambient;
pub mod catalog;
pub mod core;
pub mod driver;
pub mod dsl;
pub mod ease;
pub mod error;
pub mod eval;
pub mod gallery;
pub mod guide;
pub mod playback;
pub mod player;
pub mod schedule;
pub mod script;
pub mod sequencer;
pub mod timing;

pub use catalog::{Catalog, MediaItem};
pub use crate::core::Seconds;
pub use driver::{CompletionTimer, Ticker};
pub use dsl::{CatalogBuilder, ScriptBuilder};
pub use ease::Ease;
pub use error::{KeepsakeError, KeepsakeResult};
pub use eval::{ElementState, PresentationFrame, eval_frame};
pub use gallery::{CardWindow, Carousel};
pub use playback::{AudioHost, MusicToggle, PlaybackEvent};
pub use player::{IntroGate, Presentation, Storyboard};
pub use schedule::{ElementId, Schedule, ScheduleEntry};
pub use script::{CounterSpec, Line, Script};
pub use sequencer::{Phase, Sequencer};
pub use timing::TimingConfig;
