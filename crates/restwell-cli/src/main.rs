use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "restwell-cli", version, about = "Restwell CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a dashboard snapshot as JSON
    Status(commands::status::StatusArgs),
    /// Run a live dashboard session
    Run(commands::run::RunArgs),
    /// Theme table and selection preview
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Print the sleep tips
    Tips,
    /// Night-routine checklist
    Routine {
        #[command(subcommand)]
        action: commands::routine::RoutineAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status(args) => commands::status::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Tips => commands::tips::run(),
        Commands::Routine { action } => commands::routine::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
