pub mod routine;
pub mod run;
pub mod status;
pub mod theme;
pub mod tips;

use chrono::{Local, TimeZone};
use restwell_core::{ClockSample, Config, Dashboard};

/// Build a dashboard seeded from the user config, optionally pinned to a
/// simulated hour and/or a theme override from the command line.
pub fn build_dashboard(
    hour: Option<u32>,
    theme: Option<&str>,
) -> Result<Dashboard, Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let clock = match hour {
        Some(h) if h < 24 => {
            let today = Local::now().date_naive();
            let at = Local
                .from_local_datetime(&today.and_hms_opt(h, 0, 0).expect("valid hour"))
                .earliest()
                .unwrap_or_else(Local::now);
            ClockSample::new(at)
        }
        Some(h) => return Err(format!("--hour must be 0..=23, got {h}").into()),
        None => ClockSample::now(),
    };

    let mut dash = Dashboard::with_clock(clock);
    dash.set_clock_24h(config.ui.clock_24h);
    if let Some(key) = theme.or(config.ui.theme.as_deref()) {
        dash.select_theme(key);
    }
    Ok(dash)
}
