use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use billify::cli::{
    handle_activity_command, handle_analytics, handle_bill_command, handle_dashboard,
    handle_subscription_command, ActivityCommands, BillCommands, SubscriptionCommands,
};
use billify::config::Settings;
use billify::session::Session;
use billify::state::AppState;

#[derive(Parser)]
#[command(
    name = "billify",
    version,
    about = "Terminal-based bill management dashboard",
    long_about = "billify is a terminal bill management dashboard. It tracks bills, \
                  an activity log, a wallet balance, and a subscription plan for an \
                  in-memory demo session; every run starts from the demo seed unless \
                  --fresh is given."
)]
struct Cli {
    /// Start from an empty session instead of the demo seed
    #[arg(long, global = true)]
    fresh: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard overview
    #[command(alias = "dash")]
    Dashboard,

    /// Show bill analytics
    Analytics {
        /// Emit CSV instead of the table view
        #[arg(long)]
        csv: bool,
        /// Write the CSV to a file instead of stdout (requires --csv)
        #[arg(long, value_name = "FILE", requires = "csv")]
        out: Option<PathBuf>,
    },

    /// Bill management commands
    #[command(subcommand)]
    Bill(BillCommands),

    /// Activity log commands
    #[command(subcommand)]
    Activity(ActivityCommands),

    /// Subscription plan commands
    #[command(subcommand, alias = "sub")]
    Subscription(SubscriptionCommands),

    /// Show the logged-in user
    Whoami,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let session = Session::demo();
    let settings = Settings::default();
    let state = if cli.fresh {
        AppState::new()
    } else {
        AppState::demo()
    };

    match cli.command {
        Some(Commands::Dashboard) => {
            handle_dashboard(&state, &session, &settings)?;
        }
        Some(Commands::Analytics { csv, out }) => {
            handle_analytics(&state, csv, out)?;
        }
        Some(Commands::Bill(cmd)) => {
            handle_bill_command(&state, &settings, cmd)?;
        }
        Some(Commands::Activity(cmd)) => {
            handle_activity_command(&state, cmd)?;
        }
        Some(Commands::Subscription(cmd)) => {
            handle_subscription_command(&state, cmd)?;
        }
        Some(Commands::Whoami) => {
            let profile = session.profile();
            println!("{} <{}>", profile.name, profile.email);
        }
        None => {
            println!("billify - Terminal-based bill management dashboard");
            println!();
            println!("Run 'billify --help' for usage information.");
            println!("Run 'billify dashboard' for the session overview.");
        }
    }

    Ok(())
}
