//! # Keepsake guide
//!
//! A walkthrough of the crate's architecture for anyone extending it.
//! For copy/paste commands, start with the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Script`](crate::Script): the authored intro content — two fixed line
//!   lists ("messages" then "wishes") plus an optional numeric counter
//!   hosted inside one message line
//! - [`TimingConfig`](crate::TimingConfig): the base durations every offset
//!   is computed from; constant for the lifetime of one run
//! - [`Schedule`](crate::Schedule): the derived timeline — one start offset
//!   per visual element, the phase boundaries, and the completion total
//! - [`eval_frame`](crate::eval_frame): what the surface shows at an
//!   instant, as eased reveal progress per element
//! - [`Sequencer`](crate::Sequencer) / [`CompletionTimer`](crate::CompletionTimer):
//!   the one-shot completion contract, in pure and host-clock form
//! - [`IntroGate`](crate::IntroGate): the parent's completed flag, flipped
//!   exactly once by the completion signal
//!
//! The pipeline is explicitly staged:
//!
//! 1. Derive the timeline: [`Schedule::derive`](crate::Schedule::derive)
//! 2. Render reactively: [`Presentation::frame_at`](crate::Presentation::frame_at)
//! 3. Signal completion: [`IntroGate::arm`](crate::IntroGate::arm)
//!
//! ---
//!
//! ## "What is the schedule" vs "how it is rendered"
//!
//! The page this engine drives was originally a chain of per-element
//! declarative delays, which made the timing impossible to test without a
//! rendering surface. Here the schedule is a plain data structure produced
//! by a pure function: same config and line counts in, same offsets out.
//! The surface consumes offsets; it never computes them. That split is the
//! crate's most important contract — if a collaborator needs a timing
//! value, it must come from the [`Schedule`](crate::Schedule).
//!
//! ---
//!
//! ## Cancellation discipline
//!
//! Every timer is owned by a guard ([`CompletionTimer`](crate::CompletionTimer),
//! [`Ticker`](crate::Ticker)) whose `Drop` cancels the wait and joins the
//! worker before returning. A callback therefore cannot observe a disposed
//! owner. The pure [`Sequencer`](crate::Sequencer) mirrors the same state
//! machine (`Idle -> Running -> Completed`, cancel back to `Idle`) for
//! simulated-time tests.
//!
//! ---
//!
//! ## Collaborators
//!
//! - [`Carousel`](crate::Carousel): cyclic index over the photo list;
//!   modular `advance`, a 3-card window, optional auto-advance ticker
//! - [`MusicToggle`](crate::MusicToggle): confirmed-playback observable
//!   over the [`AudioHost`](crate::AudioHost) seam; autoplay refusal is
//!   expected, swallowed, and recovered only by a manual toggle
//! - [`Catalog`](crate::Catalog): the static photo/video lists
//! - [`ambient`](crate::ambient): seeded, deterministic backdrop generation
//!
//! ## Building a storyboard
//!
//! JSON is supported via Serde; for programmatic usage prefer the builders:
//!
//! ```
//! use keepsake::{Presentation, ScriptBuilder, Seconds, TimingConfig};
//!
//! let script = ScriptBuilder::new()
//!     .message("This page is a keepsake of everything we made")
//!     .composite_message("days-together")
//!     .counter(0, 425, Seconds(4.0))
//!     .message("I am so glad you were there for all of it")
//!     .wish("From here on, only good days")
//!     .build()
//!     .unwrap();
//!
//! let intro = Presentation::new(script, TimingConfig::default()).unwrap();
//! assert!(intro.total_duration() > Seconds(10.0));
//! ```
