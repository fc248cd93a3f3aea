//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and status indicators.

pub mod activity;
pub mod bill;
pub mod subscription;

pub use activity::format_activity_log;
pub use bill::{format_bill_details, format_bill_list};
pub use subscription::format_plan_list;
