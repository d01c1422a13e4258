//! Aggregate dashboard engine.
//!
//! A single state-owner combining the clock sample, theme override, sound
//! board, breathing cycle and routine checklist. The engine holds no timers
//! -- time passes only when the caller invokes `sample_clock()`,
//! `tick_sound()` or `advance_breathing()`, so scenarios can be driven
//! in tests without sleeping.
//!
//! Every derived value (progress ratios, display strings, the resolved
//! theme) is recomputed inside `snapshot()` from source state on each call;
//! nothing is cached.

use chrono::Utc;
use serde::Serialize;

use crate::breathing::{BreathingCycle, BreathingPhase};
use crate::catalog::{sleep_tips, sound_info, SleepTip};
use crate::clock::{ClockSample, TimeOfDay};
use crate::events::Event;
use crate::routine::{RoutineChecklist, RoutineItem};
use crate::sound::{SoundBoard, SoundId};
use crate::theme::{select_theme, Theme, ThemeId};

#[derive(Debug, Clone)]
pub struct Dashboard {
    clock: ClockSample,
    theme_override: Option<String>,
    sounds: SoundBoard,
    breathing: BreathingCycle,
    routine: RoutineChecklist,
    customizer_visible: bool,
    clock_24h: bool,
}

/// Read model for one sound channel card.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelView {
    pub id: SoundId,
    pub name: &'static str,
    pub remaining_secs: u32,
    pub display: String,
    pub active: bool,
    pub progress: f64,
}

/// Full read model handed to the view layer.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub time: String,
    pub time_of_day: TimeOfDay,
    pub theme: &'static Theme,
    pub channels: Vec<ChannelView>,
    pub breathing_enabled: bool,
    pub breathing_phase: BreathingPhase,
    pub routine: Vec<RoutineItem>,
    pub routine_progress: f64,
    pub customizer_visible: bool,
    pub tips: &'static [SleepTip],
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::with_clock(ClockSample::now())
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fixed clock sample. Tests use this to pin the hour.
    pub fn with_clock(clock: ClockSample) -> Self {
        Self {
            clock,
            theme_override: None,
            sounds: SoundBoard::new(),
            breathing: BreathingCycle::new(),
            routine: RoutineChecklist::new(),
            customizer_visible: false,
            clock_24h: true,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn clock(&self) -> ClockSample {
        self.clock
    }

    pub fn sounds(&self) -> &SoundBoard {
        &self.sounds
    }

    pub fn breathing(&self) -> &BreathingCycle {
        &self.breathing
    }

    pub fn routine(&self) -> &RoutineChecklist {
        &self.routine
    }

    pub fn theme_override(&self) -> Option<&str> {
        self.theme_override.as_deref()
    }

    pub fn customizer_visible(&self) -> bool {
        self.customizer_visible
    }

    /// The theme currently displayed: recognized override, else time-derived.
    pub fn current_theme(&self) -> &'static Theme {
        select_theme(self.clock.time_of_day(), self.theme_override.as_deref())
    }

    /// Build the full read model. Derived values are recomputed here on
    /// every call.
    pub fn snapshot(&self) -> Snapshot {
        let channels = SoundId::ALL
            .iter()
            .map(|&id| ChannelView {
                id,
                name: sound_info(id).name,
                remaining_secs: self.sounds.remaining_secs(id),
                display: self.sounds.format_remaining(id),
                active: self.sounds.is_active(id),
                progress: self.sounds.progress(id),
            })
            .collect();

        Snapshot {
            time: if self.clock_24h {
                self.clock.display_time()
            } else {
                self.clock.display_time_ampm()
            },
            time_of_day: self.clock.time_of_day(),
            theme: self.current_theme(),
            channels,
            breathing_enabled: self.breathing.enabled(),
            breathing_phase: self.breathing.phase(),
            routine: self.routine.items().to_vec(),
            routine_progress: self.routine.progress(),
            customizer_visible: self.customizer_visible,
            tips: sleep_tips(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn toggle_sound(&mut self, id: SoundId) -> Event {
        self.sounds.toggle(id)
    }

    pub fn reset_sound(&mut self, id: SoundId) -> Event {
        self.sounds.reset(id)
    }

    pub fn toggle_breathing(&mut self) -> Event {
        self.breathing.toggle()
    }

    /// Remember a theme choice. The raw key is stored as given; resolution
    /// (including fallback for unknown keys) happens on every read.
    pub fn select_theme(&mut self, key: &str) -> Event {
        self.theme_override = Some(key.to_string());
        Event::ThemeSelected {
            key: key.to_string(),
            resolved: ThemeId::parse(key),
            at: Utc::now(),
        }
    }

    pub fn toggle_routine_item(&mut self, id: u32) -> Option<Event> {
        self.routine.toggle(id)
    }

    /// Pure UI-visibility flag for the theme customizer panel.
    pub fn toggle_customizer(&mut self) -> Event {
        self.customizer_visible = !self.customizer_visible;
        Event::CustomizerToggled {
            visible: self.customizer_visible,
            at: Utc::now(),
        }
    }

    pub fn set_clock_24h(&mut self, clock_24h: bool) {
        self.clock_24h = clock_24h;
    }

    // ── Ticks (driven by the session) ────────────────────────────────

    pub fn sample_clock(&mut self, sample: ClockSample) {
        self.clock = sample;
    }

    pub fn tick_sound(&mut self) {
        self.sounds.tick();
    }

    pub fn advance_breathing(&mut self) -> Option<Event> {
        self.breathing.advance()
    }
}
