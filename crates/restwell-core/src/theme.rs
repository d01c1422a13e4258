//! Visual theme table and selection.
//!
//! Seven fixed entries: four derived from the time of day, three
//! user-selectable moods. Selection never fails -- an unknown override key
//! falls back to the time-derived entry.

use serde::{Deserialize, Serialize};

use crate::clock::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Morning,
    Afternoon,
    Evening,
    Night,
    Aurora,
    Ocean,
    Forest,
}

impl ThemeId {
    /// Case-insensitive key lookup. Returns `None` for unknown keys so the
    /// caller can apply the time-derived fallback.
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "morning" => Some(ThemeId::Morning),
            "afternoon" => Some(ThemeId::Afternoon),
            "evening" => Some(ThemeId::Evening),
            "night" => Some(ThemeId::Night),
            "aurora" => Some(ThemeId::Aurora),
            "ocean" => Some(ThemeId::Ocean),
            "forest" => Some(ThemeId::Forest),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ThemeId::Morning => "morning",
            ThemeId::Afternoon => "afternoon",
            ThemeId::Evening => "evening",
            ThemeId::Night => "night",
            ThemeId::Aurora => "aurora",
            ThemeId::Ocean => "ocean",
            ThemeId::Forest => "forest",
        }
    }
}

impl From<TimeOfDay> for ThemeId {
    fn from(tod: TimeOfDay) -> Self {
        match tod {
            TimeOfDay::Morning => ThemeId::Morning,
            TimeOfDay::Afternoon => ThemeId::Afternoon,
            TimeOfDay::Evening => ThemeId::Evening,
            TimeOfDay::Night => ThemeId::Night,
        }
    }
}

/// One immutable theme descriptor. The gradient is an opaque style token
/// interpreted by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: ThemeId,
    pub name: &'static str,
    pub gradient: &'static str,
    pub icon: &'static str,
}

const THEMES: [Theme; 7] = [
    Theme {
        id: ThemeId::Morning,
        name: "Morning Glow",
        gradient: "from-emerald-400 via-cyan-300 to-blue-400",
        icon: "sunrise",
    },
    Theme {
        id: ThemeId::Afternoon,
        name: "Afternoon Sky",
        gradient: "from-blue-400 via-cyan-300 to-emerald-400",
        icon: "sun",
    },
    Theme {
        id: ThemeId::Evening,
        name: "Evening Sunset",
        gradient: "from-orange-400 via-rose-400 to-violet-500",
        icon: "sunset",
    },
    Theme {
        id: ThemeId::Night,
        name: "Night Dreams",
        gradient: "from-violet-600 via-blue-600 to-emerald-500",
        icon: "moon",
    },
    Theme {
        id: ThemeId::Aurora,
        name: "Aurora Borealis",
        gradient: "from-emerald-400 via-cyan-400 to-violet-500",
        icon: "sparkles",
    },
    Theme {
        id: ThemeId::Ocean,
        name: "Ocean Depths",
        gradient: "from-blue-600 via-cyan-500 to-emerald-400",
        icon: "heart",
    },
    Theme {
        id: ThemeId::Forest,
        name: "Forest Whisper",
        gradient: "from-emerald-600 via-green-500 to-cyan-400",
        icon: "heart",
    },
];

/// The full fixed table, in display order.
pub fn themes() -> &'static [Theme] {
    &THEMES
}

pub fn theme(id: ThemeId) -> &'static Theme {
    THEMES
        .iter()
        .find(|t| t.id == id)
        .expect("every ThemeId has a table entry")
}

/// Resolve the displayed theme: a recognized override wins, anything else
/// falls back to the time-derived entry.
pub fn select_theme(tod: TimeOfDay, user_override: Option<&str>) -> &'static Theme {
    let id = user_override
        .and_then(ThemeId::parse)
        .unwrap_or_else(|| ThemeId::from(tod));
    theme(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_7_entries() {
        assert_eq!(themes().len(), 7);
    }

    #[test]
    fn morning_without_override() {
        let t = select_theme(TimeOfDay::from_hour(6), None);
        assert_eq!(t.id, ThemeId::Morning);
        assert_eq!(t.name, "Morning Glow");
    }

    #[test]
    fn override_wins_regardless_of_hour() {
        let t = select_theme(TimeOfDay::Morning, Some("ocean"));
        assert_eq!(t.id, ThemeId::Ocean);
        let t = select_theme(TimeOfDay::Night, Some("ocean"));
        assert_eq!(t.id, ThemeId::Ocean);
    }

    #[test]
    fn unknown_override_falls_back() {
        let t = select_theme(TimeOfDay::Evening, Some("lava-lamp"));
        assert_eq!(t.id, ThemeId::Evening);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ThemeId::parse("Aurora"), Some(ThemeId::Aurora));
        assert_eq!(ThemeId::parse("FOREST"), Some(ThemeId::Forest));
        assert_eq!(ThemeId::parse(""), None);
    }

    #[test]
    fn key_round_trips() {
        for t in themes() {
            assert_eq!(ThemeId::parse(t.id.key()), Some(t.id));
        }
    }
}
