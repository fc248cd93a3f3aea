//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod activity;
pub mod bill;
pub mod report;
pub mod subscription;

pub use activity::{handle_activity_command, ActivityCommands};
pub use bill::{handle_bill_command, BillCommands};
pub use report::{handle_analytics, handle_dashboard};
pub use subscription::{handle_subscription_command, SubscriptionCommands};
