//! Learner's Point Core Library
//!
//! The stateful parts of the Learner's Point site, kept free of any renderer
//! so they can be driven and tested on their own.
//!
//! ## Overview
//!
//! Each animated widget is an explicit state machine owning a single timer:
//!
//! - **Typewriter** ([`PhraseCycle`]): types, pauses, deletes and rests over a
//!   list of phrases.
//! - **Carousel** ([`Carousel`]): wrap-around slide index with keyboard, swipe
//!   and auto-advance triggers.
//! - **Loading** ([`ProgressMeter`], [`Rotator`], [`Deadline`]): the splash
//!   screen's progress bar, status messages and reveal deadline.
//! - **Visibility** ([`VisibilityTrigger`]): viewport intersection flags that
//!   gate entrance animations.
//!
//! Machines implement [`TimedMachine`] and run under [`timer::drive`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use learnerspoint_core::{timer, PhraseCycle, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let mut cycle = PhraseCycle::new(config.hero.phrases.clone(), config.hero.timing)?;
//! tokio::spawn(async move {
//!     timer::drive(|step| step(&mut cycle)).await;
//! });
//! ```

pub mod card;
pub mod carousel;
pub mod config;
pub mod error;
pub mod loading;
pub mod relay;
pub mod timer;
pub mod typewriter;
pub mod visibility;

// Re-exports
pub use card::{ExpandableCard, Presentation, PresentationStyle};
pub use carousel::{Carousel, Direction, NavKey, SwipeGesture, SwipeOutcome};
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use loading::{LoadingTiming, ProgressMeter};
pub use relay::{
    is_success_redirect, ContactFields, FormKind, FormRelay, HttpRelay, Receipts, Submission,
};
pub use timer::{Deadline, Rotator, TimedMachine};
pub use typewriter::{CyclePhase, PhraseCycle, TypewriterTiming};
pub use visibility::{Span, VisibilityOptions, VisibilityTrigger};
