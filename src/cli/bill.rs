//! Bill CLI commands
//!
//! Implements CLI commands for bill management.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_bill_details, format_bill_list};
use crate::error::{BillifyError, BillifyResult};
use crate::models::{BillStatus, Money};
use crate::services::BillService;
use crate::state::AppState;

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Add a new bill
    Add {
        /// Bill name
        name: String,
        /// Amount (e.g., "89.50")
        amount: String,
        /// Due date (YYYY-MM-DD)
        due: String,
        /// Category (defaults to "Other")
        #[arg(short, long)]
        category: Option<String>,
        /// Provider (defaults to "Unknown")
        #[arg(short, long)]
        provider: Option<String>,
    },
    /// List all bills, sorted by due date
    List {
        /// Only show bills with this status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show bill details
    Show {
        /// Bill name or ID
        bill: String,
    },
    /// Pay a bill
    Pay {
        /// Bill name or ID
        bill: String,
    },
    /// Set a bill's status directly
    Status {
        /// Bill name or ID
        bill: String,
        /// New status (paid, pending, insufficient, not_received)
        status: String,
    },
    /// Toggle auto-pay for a bill
    Autopay {
        /// Bill name or ID
        bill: String,
    },
    /// Remove a bill
    Remove {
        /// Bill name or ID
        bill: String,
    },
    /// Simulate importing bills from email (demo)
    ImportMail,
}

/// Handle a bill command
pub fn handle_bill_command(
    state: &AppState,
    settings: &Settings,
    cmd: BillCommands,
) -> BillifyResult<()> {
    let service = BillService::new(state);

    match cmd {
        BillCommands::Add {
            name,
            amount,
            due,
            category,
            provider,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                BillifyError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '89.50'. Error: {}",
                    amount, e
                ))
            })?;

            let due_date = NaiveDate::parse_from_str(&due, "%Y-%m-%d").map_err(|_| {
                BillifyError::Validation(format!(
                    "Invalid due date: '{}'. Use format YYYY-MM-DD.",
                    due
                ))
            })?;

            let bill = service.add(
                &name,
                amount,
                due_date,
                category.as_deref(),
                provider.as_deref(),
            )?;

            println!("Added bill: {}", bill.name);
            println!("  Amount:   {}", bill.amount);
            println!("  Due:      {}", bill.due_date.format(&settings.date_format));
            println!("  Category: {}", bill.category);
            println!("  Provider: {}", bill.provider);
            println!("  ID:       {}", bill.id);
        }

        BillCommands::List { status } => {
            let mut bills = service.list(true)?;

            if let Some(status_str) = status {
                let status = BillStatus::parse(&status_str).ok_or_else(|| {
                    BillifyError::Validation(format!(
                        "Invalid status: '{}'. Valid statuses: paid, pending, insufficient, not_received",
                        status_str
                    ))
                })?;
                bills.retain(|b| b.status == status);
            }

            print!("{}", format_bill_list(&bills));
        }

        BillCommands::Show { bill } => {
            let found = service
                .find(&bill)?
                .ok_or_else(|| BillifyError::bill_not_found(&bill))?;

            print!("{}", format_bill_details(&found, &settings.date_format));
        }

        BillCommands::Pay { bill } => {
            let found = service
                .find(&bill)?
                .ok_or_else(|| BillifyError::bill_not_found(&bill))?;

            // The id cannot be absent, we just looked it up
            if let Some(paid) = service.pay(found.id)? {
                println!("Payment processed: {} paid for {}", paid.amount, paid.name);
            }
        }

        BillCommands::Status { bill, status } => {
            let new_status = BillStatus::parse(&status).ok_or_else(|| {
                BillifyError::Validation(format!(
                    "Invalid status: '{}'. Valid statuses: paid, pending, insufficient, not_received",
                    status
                ))
            })?;

            let found = service
                .find(&bill)?
                .ok_or_else(|| BillifyError::bill_not_found(&bill))?;

            service.set_status(found.id, new_status)?;
            println!("Updated {}: status set to {}", found.name, new_status);
        }

        BillCommands::Autopay { bill } => {
            let found = service
                .find(&bill)?
                .ok_or_else(|| BillifyError::bill_not_found(&bill))?;

            if let Some(enabled) = service.toggle_autopay(found.id)? {
                println!(
                    "Auto-pay {} for {}",
                    if enabled { "enabled" } else { "disabled" },
                    found.name
                );
            }
        }

        BillCommands::Remove { bill } => {
            let found = service
                .find(&bill)?
                .ok_or_else(|| BillifyError::bill_not_found(&bill))?;

            if let Some(removed) = service.remove(found.id)? {
                println!("Removed bill: {}", removed.name);
            }
        }

        BillCommands::ImportMail => {
            let imported = service.import_from_mail()?;
            println!("Mail import (demo): {} bills imported.", imported);
            println!("In a real deployment this would import bills from your inbox.");
        }
    }

    Ok(())
}
