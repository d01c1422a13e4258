use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::breathing::BreathingPhase;
use crate::sound::SoundId;
use crate::theme::ThemeId;

/// Every state change in the dashboard produces an Event.
/// The view layer polls for events or receives them from command calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A sound channel became the active countdown.
    SoundStarted {
        sound: SoundId,
        remaining_secs: u32,
        /// Channel that was displaced, if any.
        stopped: Option<SoundId>,
        at: DateTime<Utc>,
    },
    /// The active channel was toggled off (remaining time retained).
    SoundStopped {
        sound: SoundId,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    SoundReset {
        sound: SoundId,
        at: DateTime<Utc>,
    },
    BreathingStarted {
        phase: BreathingPhase,
        at: DateTime<Utc>,
    },
    BreathingStopped {
        phase: BreathingPhase,
        at: DateTime<Utc>,
    },
    PhaseAdvanced {
        phase: BreathingPhase,
        at: DateTime<Utc>,
    },
    ThemeSelected {
        /// Raw key the user picked.
        key: String,
        /// Resolved id when the key is in the theme table.
        resolved: Option<ThemeId>,
        at: DateTime<Utc>,
    },
    RoutineToggled {
        id: u32,
        completed: bool,
        at: DateTime<Utc>,
    },
    CustomizerToggled {
        visible: bool,
        at: DateTime<Utc>,
    },
}
