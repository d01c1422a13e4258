//! # Restwell Core Library
//!
//! This library provides the core state for the Restwell sleep-aid dashboard.
//! It implements a CLI-first philosophy where all state can be inspected and
//! driven via a standalone CLI binary, with any graphical front end being a
//! thin view layer over the same core library.
//!
//! ## Architecture
//!
//! - **Dashboard**: the aggregate state machine. It holds no timers of its
//!   own -- the caller invokes `sample_clock()`, `tick_sound()` and
//!   `advance_breathing()` to make time pass, which keeps every piece
//!   deterministic and testable.
//! - **Session**: a tokio wrapper that owns a `Dashboard` and runs the
//!   periodic tickers (clock sampler, active-channel countdown, breathing
//!   rotation), starting and aborting each one as its owning state flips.
//! - **Catalog**: static presentation data (sound metadata, sleep tips)
//!   passed through to the view untouched.
//!
//! ## Key Components
//!
//! - [`Dashboard`]: aggregate state machine and snapshot source
//! - [`Session`]: live runtime with managed tickers
//! - [`select_theme`]: time-of-day / override theme resolution
//! - [`Config`]: TOML-based user preferences

pub mod breathing;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod routine;
pub mod session;
pub mod sound;
pub mod theme;

pub use breathing::{BreathingCycle, BreathingPhase, PHASE_INTERVAL_MS};
pub use catalog::{sleep_tips, sound_infos, SleepTip, SoundInfo};
pub use clock::{ClockSample, TimeOfDay};
pub use config::Config;
pub use dashboard::{ChannelView, Dashboard, Snapshot};
pub use error::{ConfigError, CoreError, Result};
pub use events::Event;
pub use routine::{RoutineChecklist, RoutineItem};
pub use session::{Session, SessionIntervals};
pub use sound::{SoundBoard, SoundId, DEFAULT_COUNTDOWN_SECS};
pub use theme::{select_theme, themes, Theme, ThemeId};
