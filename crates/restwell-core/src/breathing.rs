//! Guided-breathing phase rotation.
//!
//! A three-phase cycle gated by an on/off toggle. The phase advances only
//! while enabled; disabling freezes the current phase and re-enabling
//! resumes from it rather than resetting to inhale.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// One rotation step every 4 seconds.
pub const PHASE_INTERVAL_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathingPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathingPhase {
    pub fn next(self) -> Self {
        match self {
            BreathingPhase::Inhale => BreathingPhase::Hold,
            BreathingPhase::Hold => BreathingPhase::Exhale,
            BreathingPhase::Exhale => BreathingPhase::Inhale,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BreathingCycle {
    enabled: bool,
    phase: BreathingPhase,
}

impl Default for BreathingCycle {
    fn default() -> Self {
        Self {
            enabled: false,
            phase: BreathingPhase::Inhale,
        }
    }
}

impl BreathingCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn phase(&self) -> BreathingPhase {
        self.phase
    }

    pub fn toggle(&mut self) -> Event {
        self.enabled = !self.enabled;
        if self.enabled {
            Event::BreathingStarted {
                phase: self.phase,
                at: Utc::now(),
            }
        } else {
            Event::BreathingStopped {
                phase: self.phase,
                at: Utc::now(),
            }
        }
    }

    /// One rotation step. Call every [`PHASE_INTERVAL_MS`] while enabled.
    pub fn advance(&mut self) -> Option<Event> {
        if !self.enabled {
            return None;
        }
        self.phase = self.phase.next();
        Some(Event::PhaseAdvanced {
            phase: self.phase,
            at: Utc::now(),
        })
    }
}
