use clap::Subcommand;
use restwell_core::RoutineChecklist;

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Print the checklist items of a fresh session
    List,
}

pub fn run(action: RoutineAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RoutineAction::List => {
            let list = RoutineChecklist::new();
            for item in list.items() {
                println!("{}. [ ] {}", item.id, item.label);
            }
            println!(
                "Progress: {}/{}",
                list.completed_count(),
                list.items().len()
            );
        }
    }
    Ok(())
}
