//! Activity CLI commands

use clap::Subcommand;

use crate::display::format_activity_log;
use crate::error::BillifyResult;
use crate::services::ActivityService;
use crate::state::AppState;

/// Activity subcommands
#[derive(Subcommand)]
pub enum ActivityCommands {
    /// List activity entries, newest first
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an activity command
pub fn handle_activity_command(state: &AppState, cmd: ActivityCommands) -> BillifyResult<()> {
    let service = ActivityService::new(state);

    match cmd {
        ActivityCommands::List { limit } => {
            let activities = service.recent(limit)?;
            print!("{}", format_activity_log(&activities));
        }
    }

    Ok(())
}
