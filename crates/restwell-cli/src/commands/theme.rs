use clap::Subcommand;
use restwell_core::{select_theme, themes, TimeOfDay};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the full theme table
    List,
    /// Preview which theme a given hour/override resolves to
    Show {
        /// Hour of day (0-23)
        #[arg(long, default_value = "21")]
        hour: u32,
        /// Theme override key
        #[arg(long = "override")]
        override_key: Option<String>,
    },
}

pub fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ThemeAction::List => {
            for theme in themes() {
                println!("{:<10} {:<16} {}", theme.id.key(), theme.name, theme.gradient);
            }
        }
        ThemeAction::Show { hour, override_key } => {
            if hour >= 24 {
                return Err(format!("--hour must be 0..=23, got {hour}").into());
            }
            let theme = select_theme(TimeOfDay::from_hour(hour), override_key.as_deref());
            println!("{}", serde_json::to_string_pretty(theme)?);
        }
    }
    Ok(())
}
