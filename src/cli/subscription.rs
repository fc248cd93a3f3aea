//! Subscription CLI commands

use clap::Subcommand;

use crate::display::format_plan_list;
use crate::error::{BillifyError, BillifyResult};
use crate::models::SubscriptionTier;
use crate::services::SubscriptionService;
use crate::state::AppState;

/// Subscription subcommands
#[derive(Subcommand)]
pub enum SubscriptionCommands {
    /// Show the current plan
    Show,
    /// List all available plans
    Plans,
    /// Switch to a plan (free, basic, premium)
    Select {
        /// Plan to switch to
        tier: String,
    },
}

/// Handle a subscription command
pub fn handle_subscription_command(
    state: &AppState,
    cmd: SubscriptionCommands,
) -> BillifyResult<()> {
    let service = SubscriptionService::new(state);

    match cmd {
        SubscriptionCommands::Show => {
            let current = service.current()?;
            println!(
                "Current plan: {} ({}/month, {})",
                current,
                current.price(),
                current.bill_quota()
            );
        }

        SubscriptionCommands::Plans => {
            print!("{}", format_plan_list(service.current()?));
        }

        SubscriptionCommands::Select { tier } => {
            let tier = SubscriptionTier::parse(&tier).ok_or_else(|| {
                BillifyError::Validation(format!(
                    "Invalid plan: '{}'. Valid plans: free, basic, premium",
                    tier
                ))
            })?;

            let previous = service.select(tier)?;
            if previous == tier {
                println!("Already on the {} plan.", tier);
            } else {
                println!("Switched from {} to {} plan.", previous, tier);
            }
        }
    }

    Ok(())
}
