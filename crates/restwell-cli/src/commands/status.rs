use clap::Args;

use super::build_dashboard;

#[derive(Args)]
pub struct StatusArgs {
    /// Simulate this hour of day (0-23) instead of the wall clock
    #[arg(long)]
    pub hour: Option<u32>,
    /// Preview a theme override key
    #[arg(long)]
    pub theme: Option<String>,
}

pub fn run(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dash = build_dashboard(args.hour, args.theme.as_deref())?;
    let snapshot = dash.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
