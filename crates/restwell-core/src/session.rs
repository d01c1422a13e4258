//! Live dashboard runtime.
//!
//! [`Session`] owns a [`Dashboard`] behind a tokio mutex and runs its
//! periodic tickers:
//!
//! - the clock sampler, for as long as the session lives;
//! - the countdown decrement, only while some sound channel is active;
//! - the breathing rotation, only while the breathing cycle is enabled.
//!
//! The two conditional tickers are one task each, keyed by their owning
//! state: activating a channel aborts and respawns the single countdown
//! task rather than running one task per channel. Each ticker also exits
//! on its own when it observes its owning state turned off, so an abort
//! handle going stale is harmless.
//!
//! `dispose()` (and `Drop`) aborts everything; no ticker outlives the
//! session.

use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;

use crate::breathing::PHASE_INTERVAL_MS;
use crate::clock::ClockSample;
use crate::dashboard::{Dashboard, Snapshot};
use crate::events::Event;
use crate::sound::SoundId;

/// Ticker periods. Production defaults are 1 s / 1 s / 4 s; tests inject
/// millisecond-scale values.
#[derive(Debug, Clone, Copy)]
pub struct SessionIntervals {
    pub clock: Duration,
    pub countdown: Duration,
    pub breathing: Duration,
}

impl Default for SessionIntervals {
    fn default() -> Self {
        Self {
            clock: Duration::from_secs(1),
            countdown: Duration::from_secs(1),
            breathing: Duration::from_millis(PHASE_INTERVAL_MS),
        }
    }
}

type TaskSlot = StdMutex<Option<JoinHandle<()>>>;

pub struct Session {
    dashboard: Arc<Mutex<Dashboard>>,
    intervals: SessionIntervals,
    clock_task: TaskSlot,
    countdown_task: TaskSlot,
    breathing_task: TaskSlot,
}

impl Session {
    /// Spawn a session with production intervals. Must be called inside a
    /// tokio runtime.
    pub fn new(dashboard: Dashboard) -> Self {
        Self::with_intervals(dashboard, SessionIntervals::default())
    }

    pub fn with_intervals(dashboard: Dashboard, intervals: SessionIntervals) -> Self {
        let session = Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            intervals,
            clock_task: StdMutex::new(None),
            countdown_task: StdMutex::new(None),
            breathing_task: StdMutex::new(None),
        };
        session.spawn_clock();
        session
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub async fn snapshot(&self) -> Snapshot {
        self.dashboard.lock().await.snapshot()
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub async fn toggle_sound(&self, id: SoundId) -> Event {
        let (event, any_active) = {
            let mut dash = self.dashboard.lock().await;
            let event = dash.toggle_sound(id);
            (event, dash.sounds().active().is_some())
        };
        // Reschedule the single countdown task on every activation change.
        if any_active {
            self.spawn_countdown();
        } else {
            abort_slot(&self.countdown_task);
        }
        event
    }

    pub async fn reset_sound(&self, id: SoundId) -> Event {
        self.dashboard.lock().await.reset_sound(id)
    }

    pub async fn toggle_breathing(&self) -> Event {
        let (event, enabled) = {
            let mut dash = self.dashboard.lock().await;
            let event = dash.toggle_breathing();
            (event, dash.breathing().enabled())
        };
        if enabled {
            self.spawn_breathing();
        } else {
            abort_slot(&self.breathing_task);
        }
        event
    }

    pub async fn select_theme(&self, key: &str) -> Event {
        self.dashboard.lock().await.select_theme(key)
    }

    pub async fn toggle_routine_item(&self, id: u32) -> Option<Event> {
        self.dashboard.lock().await.toggle_routine_item(id)
    }

    pub async fn toggle_customizer(&self) -> Event {
        self.dashboard.lock().await.toggle_customizer()
    }

    /// Tear down all tickers. Idempotent; also run by `Drop`.
    pub fn dispose(&self) {
        abort_slot(&self.clock_task);
        abort_slot(&self.countdown_task);
        abort_slot(&self.breathing_task);
    }

    // ── Tickers ──────────────────────────────────────────────────────

    fn spawn_clock(&self) {
        let dashboard = self.dashboard.clone();
        let period = self.intervals.clock;
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.tick().await; // the first tick is immediate
            loop {
                interval.tick().await;
                dashboard.lock().await.sample_clock(ClockSample::now());
            }
        });
        store_slot(&self.clock_task, handle);
    }

    fn spawn_countdown(&self) {
        let dashboard = self.dashboard.clone();
        let period = self.intervals.countdown;
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut dash = dashboard.lock().await;
                if dash.sounds().active().is_none() {
                    break;
                }
                dash.tick_sound();
            }
        });
        store_slot(&self.countdown_task, handle);
    }

    fn spawn_breathing(&self) {
        let dashboard = self.dashboard.clone();
        let period = self.intervals.breathing;
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut dash = dashboard.lock().await;
                if !dash.breathing().enabled() {
                    break;
                }
                dash.advance_breathing();
            }
        });
        store_slot(&self.breathing_task, handle);
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn store_slot(slot: &TaskSlot, handle: JoinHandle<()>) {
    let mut guard = slot.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(old) = guard.replace(handle) {
        old.abort();
    }
}

fn abort_slot(slot: &TaskSlot) {
    let mut guard = slot.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(handle) = guard.take() {
        handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breathing::BreathingPhase;

    fn fast() -> SessionIntervals {
        SessionIntervals {
            clock: Duration::from_millis(5),
            countdown: Duration::from_millis(10),
            breathing: Duration::from_millis(10),
        }
    }

    #[tokio::test]
    async fn countdown_ticks_only_while_active() {
        let session = Session::with_intervals(Dashboard::new(), fast());
        session.toggle_sound(SoundId::Rain).await;
        time::sleep(Duration::from_millis(100)).await;

        let before_stop = session.snapshot().await.channels[0].remaining_secs;
        assert!(before_stop < 600, "active channel should have ticked");

        session.toggle_sound(SoundId::Rain).await;
        let frozen = session.snapshot().await.channels[0].remaining_secs;
        time::sleep(Duration::from_millis(60)).await;
        assert_eq!(
            session.snapshot().await.channels[0].remaining_secs,
            frozen,
            "stopped channel must not tick"
        );
        session.dispose();
    }

    #[tokio::test]
    async fn switching_channels_moves_the_ticker() {
        let session = Session::with_intervals(Dashboard::new(), fast());
        session.toggle_sound(SoundId::Rain).await;
        time::sleep(Duration::from_millis(50)).await;
        session.toggle_sound(SoundId::Ocean).await;

        let rain = session.snapshot().await.channels[0].remaining_secs;
        time::sleep(Duration::from_millis(60)).await;
        let snap = session.snapshot().await;
        assert_eq!(snap.channels[0].remaining_secs, rain, "rain is frozen");
        assert!(snap.channels[1].remaining_secs < 600, "ocean is ticking");
        session.dispose();
    }

    #[tokio::test]
    async fn breathing_rotation_runs_while_enabled() {
        let session = Session::with_intervals(Dashboard::new(), fast());
        session.toggle_breathing().await;

        // Wait for the rotation to leave the initial phase.
        let mut advanced = false;
        for _ in 0..100 {
            time::sleep(Duration::from_millis(5)).await;
            if session.snapshot().await.breathing_phase != BreathingPhase::Inhale {
                advanced = true;
                break;
            }
        }
        assert!(advanced, "enabled cycle should rotate");

        session.toggle_breathing().await;
        let frozen = session.snapshot().await.breathing_phase;
        time::sleep(Duration::from_millis(60)).await;
        let snap = session.snapshot().await;
        assert!(!snap.breathing_enabled);
        assert_eq!(snap.breathing_phase, frozen, "disabled cycle is frozen");
        session.dispose();
    }

    #[tokio::test]
    async fn dispose_stops_everything() {
        let session = Session::with_intervals(Dashboard::new(), fast());
        session.toggle_sound(SoundId::Forest).await;
        session.toggle_breathing().await;
        time::sleep(Duration::from_millis(50)).await;
        session.dispose();

        let snap = session.snapshot().await;
        time::sleep(Duration::from_millis(60)).await;
        let later = session.snapshot().await;
        assert_eq!(snap.channels[2].remaining_secs, later.channels[2].remaining_secs);
        assert_eq!(snap.breathing_phase, later.breathing_phase);
    }
}
