use std::time::Duration;

use clap::Args;
use restwell_core::{Session, SoundId};

use super::build_dashboard;

#[derive(Args)]
pub struct RunArgs {
    /// How long to run the live session before disposing it
    #[arg(long, default_value = "10")]
    pub seconds: u64,
    /// Start a sound countdown (rain, ocean, forest)
    #[arg(long)]
    pub sound: Option<String>,
    /// Enable the breathing rotation
    #[arg(long)]
    pub breathing: bool,
    /// Simulate this hour of day (0-23) instead of the wall clock
    #[arg(long)]
    pub hour: Option<u32>,
    /// Theme override key
    #[arg(long)]
    pub theme: Option<String>,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let sound = match args.sound.as_deref() {
        Some(key) => Some(
            SoundId::parse(key).ok_or_else(|| format!("unknown sound channel: {key}"))?,
        ),
        None => None,
    };

    let dash = build_dashboard(args.hour, args.theme.as_deref())?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let session = Session::new(dash);
        if let Some(id) = sound {
            session.toggle_sound(id).await;
        }
        if args.breathing {
            session.toggle_breathing().await;
        }

        for _ in 0..args.seconds {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let snapshot = session.snapshot().await;
            println!("{}", serde_json::to_string(&snapshot)?);
        }

        session.dispose();
        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    Ok(())
}
