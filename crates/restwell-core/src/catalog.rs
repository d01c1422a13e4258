//! Static presentation data passed through to the view layer.
//!
//! None of this is state: the sound metadata and sleep tips are fixed
//! tables the view renders as-is.

use serde::Serialize;

use crate::sound::SoundId;

/// Display metadata for one sound channel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SoundInfo {
    pub id: SoundId,
    pub name: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
}

const SOUND_INFOS: [SoundInfo; 3] = [
    SoundInfo {
        id: SoundId::Rain,
        name: "Rain",
        icon: "🌧️",
        gradient: "from-blue-400 to-cyan-400",
    },
    SoundInfo {
        id: SoundId::Ocean,
        name: "Ocean Waves",
        icon: "🌊",
        gradient: "from-cyan-400 to-emerald-400",
    },
    SoundInfo {
        id: SoundId::Forest,
        name: "Forest",
        icon: "🌲",
        gradient: "from-emerald-400 to-green-400",
    },
];

pub fn sound_infos() -> &'static [SoundInfo] {
    &SOUND_INFOS
}

pub fn sound_info(id: SoundId) -> &'static SoundInfo {
    SOUND_INFOS
        .iter()
        .find(|s| s.id == id)
        .expect("every SoundId has metadata")
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SleepTip {
    pub category: &'static str,
    pub tip: &'static str,
    pub icon: &'static str,
}

const SLEEP_TIPS: [SleepTip; 6] = [
    SleepTip {
        category: "Routine",
        tip: "Go to bed at the same time every night",
        icon: "⏰",
    },
    SleepTip {
        category: "Environment",
        tip: "Keep your bedroom cool and dark",
        icon: "🌙",
    },
    SleepTip {
        category: "Health",
        tip: "Avoid caffeine 6 hours before bedtime",
        icon: "☕",
    },
    SleepTip {
        category: "Relaxation",
        tip: "Practice deep breathing before sleep",
        icon: "🧘",
    },
    SleepTip {
        category: "Technology",
        tip: "Turn off screens 1 hour before bed",
        icon: "📱",
    },
    SleepTip {
        category: "Comfort",
        tip: "Invest in a comfortable mattress",
        icon: "🛏️",
    },
];

pub fn sleep_tips() -> &'static [SleepTip] {
    &SLEEP_TIPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_channel_has_metadata() {
        for id in SoundId::ALL {
            assert_eq!(sound_info(id).id, id);
        }
    }

    #[test]
    fn six_tips() {
        assert_eq!(sleep_tips().len(), 6);
    }
}
