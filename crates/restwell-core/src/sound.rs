//! Ambient-sound countdown state machine.
//!
//! Three fixed channels, at most one active at a time. The board does not
//! use internal threads -- the caller is responsible for calling `tick()`
//! once per second while a channel is active.
//!
//! ## State Transitions
//!
//! ```text
//! idle -> active -> idle (toggle)
//!         active -> active on another channel (toggle displaces)
//! ```
//!
//! Reaching zero does not deactivate the channel; it keeps displaying 0:00
//! while nominally playing until the user toggles it off or resets it.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Default countdown on (re)start: 10 minutes.
pub const DEFAULT_COUNTDOWN_SECS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundId {
    Rain,
    Ocean,
    Forest,
}

impl SoundId {
    pub const ALL: [SoundId; 3] = [SoundId::Rain, SoundId::Ocean, SoundId::Forest];

    pub fn key(&self) -> &'static str {
        match self {
            SoundId::Rain => "rain",
            SoundId::Ocean => "ocean",
            SoundId::Forest => "forest",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "rain" => Some(SoundId::Rain),
            "ocean" => Some(SoundId::Ocean),
            "forest" => Some(SoundId::Forest),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        match self {
            SoundId::Rain => 0,
            SoundId::Ocean => 1,
            SoundId::Forest => 2,
        }
    }
}

/// Countdown state for the fixed channel set.
///
/// The single `active` pointer enforces the at-most-one-active invariant
/// structurally; there is no per-channel `is_active` flag to drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundBoard {
    remaining_secs: [u32; 3],
    active: Option<SoundId>,
}

impl Default for SoundBoard {
    fn default() -> Self {
        Self {
            remaining_secs: [0; 3],
            active: None,
        }
    }
}

impl SoundBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn active(&self) -> Option<SoundId> {
        self.active
    }

    pub fn is_active(&self, id: SoundId) -> bool {
        self.active == Some(id)
    }

    pub fn remaining_secs(&self, id: SoundId) -> u32 {
        self.remaining_secs[id.index()]
    }

    /// 0.0 .. 1.0 fraction of the default countdown still remaining.
    pub fn progress(&self, id: SoundId) -> f64 {
        f64::from(self.remaining_secs(id)) / f64::from(DEFAULT_COUNTDOWN_SECS)
    }

    /// `M:SS`, what the channel card shows.
    pub fn format_remaining(&self, id: SoundId) -> String {
        let secs = self.remaining_secs(id);
        format!("{}:{:02}", secs / 60, secs % 60)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Toggle a channel. Toggling the active channel stops it (remaining
    /// retained); toggling any other channel displaces the current one and
    /// activates it, refilling the countdown first when it sits at zero.
    pub fn toggle(&mut self, id: SoundId) -> Event {
        if self.active == Some(id) {
            self.active = None;
            return Event::SoundStopped {
                sound: id,
                remaining_secs: self.remaining_secs(id),
                at: Utc::now(),
            };
        }

        let stopped = self.active.take();
        if self.remaining_secs(id) == 0 {
            self.remaining_secs[id.index()] = DEFAULT_COUNTDOWN_SECS;
        }
        self.active = Some(id);
        Event::SoundStarted {
            sound: id,
            remaining_secs: self.remaining_secs(id),
            stopped,
            at: Utc::now(),
        }
    }

    /// Refill a channel's countdown without touching the active pointer.
    pub fn reset(&mut self, id: SoundId) -> Event {
        self.remaining_secs[id.index()] = DEFAULT_COUNTDOWN_SECS;
        Event::SoundReset {
            sound: id,
            at: Utc::now(),
        }
    }

    /// One-second decrement of the active channel, floored at zero.
    /// Call once per second while a channel is active.
    pub fn tick(&mut self) {
        if let Some(id) = self.active {
            let slot = &mut self.remaining_secs[id.index()];
            *slot = slot.saturating_sub(1);
        }
    }
}
