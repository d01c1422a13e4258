//! Wall-clock sampling and time-of-day derivation.
//!
//! The dashboard never reads the clock itself. A [`ClockSample`] is captured
//! by the caller (the session's 1 Hz sampler, or a test with a fixed time)
//! and handed to the dashboard, so theme derivation stays a pure function of
//! its inputs.

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

/// Hour buckets driving the time-based themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// 05:00 - 11:59
    Morning,
    /// 12:00 - 16:59
    Afternoon,
    /// 17:00 - 20:59
    Evening,
    /// 21:00 - 04:59
    Night,
}

impl TimeOfDay {
    /// Bucket for an hour-of-day. Hours outside 0..24 land in `Night`,
    /// the same branch the wrap-around range takes.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// One captured reading of the local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSample {
    pub at: DateTime<Local>,
}

impl ClockSample {
    pub fn now() -> Self {
        Self { at: Local::now() }
    }

    pub fn new(at: DateTime<Local>) -> Self {
        Self { at }
    }

    pub fn hour(&self) -> u32 {
        self.at.hour()
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hour())
    }

    /// `HH:MM:SS`, what the dashboard header shows.
    pub fn display_time(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }

    /// 12-hour variant, e.g. `8:05:09 PM`.
    pub fn display_time_ampm(&self) -> String {
        self.at.format("%-I:%M:%S %p").to_string()
    }
}
