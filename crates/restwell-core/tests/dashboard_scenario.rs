//! End-to-end workflow test for the dashboard engine.
//!
//! Walks the full morning scenario: time-derived theme, starting and
//! switching sound countdowns, routine progress and the breathing rotation,
//! all against a fixed simulated clock.

use chrono::{Local, TimeZone};
use restwell_core::{BreathingPhase, ClockSample, Dashboard, SoundId};

fn dashboard_at_0800() -> Dashboard {
    let at = Local.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    Dashboard::with_clock(ClockSample::new(at))
}

#[test]
fn morning_session_workflow() {
    let mut dash = dashboard_at_0800();

    // 08:00, no override: time-derived theme.
    assert_eq!(dash.current_theme().name, "Morning Glow");

    // Start the rain countdown.
    dash.toggle_sound(SoundId::Rain);
    {
        let snap = dash.snapshot();
        let rain = snap.channels.iter().find(|c| c.id == SoundId::Rain).unwrap();
        assert_eq!(rain.remaining_secs, 600);
        assert!(rain.active);
        assert!(snap
            .channels
            .iter()
            .filter(|c| c.id != SoundId::Rain)
            .all(|c| !c.active));
    }

    // One second passes.
    dash.tick_sound();
    assert_eq!(dash.sounds().remaining_secs(SoundId::Rain), 599);

    // Switching to ocean displaces rain, which keeps its remaining time.
    dash.toggle_sound(SoundId::Ocean);
    assert!(!dash.sounds().is_active(SoundId::Rain));
    assert_eq!(dash.sounds().remaining_secs(SoundId::Rain), 599);
    assert!(dash.sounds().is_active(SoundId::Ocean));
    assert_eq!(dash.sounds().remaining_secs(SoundId::Ocean), 600);

    // First routine item done: 1/5.
    dash.toggle_routine_item(1);
    let snap = dash.snapshot();
    assert!(snap.routine[0].completed);
    assert_eq!(snap.routine_progress, 0.2);

    // Breathing: three rotations from inhale.
    dash.toggle_breathing();
    let mut phases = Vec::new();
    for _ in 0..3 {
        dash.advance_breathing();
        phases.push(dash.breathing().phase());
    }
    assert_eq!(
        phases,
        vec![
            BreathingPhase::Hold,
            BreathingPhase::Exhale,
            BreathingPhase::Inhale,
        ]
    );
}

#[test]
fn override_survives_clock_changes() {
    let mut dash = dashboard_at_0800();
    dash.select_theme("ocean");
    assert_eq!(dash.current_theme().name, "Ocean Depths");

    let night = Local.with_ymd_and_hms(2024, 3, 1, 23, 0, 0).unwrap();
    dash.sample_clock(ClockSample::new(night));
    assert_eq!(dash.current_theme().name, "Ocean Depths");
}

#[test]
fn countdown_displays_zero_while_nominally_playing() {
    let mut dash = dashboard_at_0800();
    dash.toggle_sound(SoundId::Forest);
    for _ in 0..700 {
        dash.tick_sound();
    }
    let snap = dash.snapshot();
    let forest = snap.channels.iter().find(|c| c.id == SoundId::Forest).unwrap();
    assert_eq!(forest.remaining_secs, 0);
    assert_eq!(forest.display, "0:00");
    assert!(forest.active, "reaching zero does not auto-stop");
}
