//! Core data models for billify
//!
//! This module contains all the data structures that represent the bill
//! management domain: bills, activity log entries, and subscription tiers.

pub mod activity;
pub mod bill;
pub mod ids;
pub mod money;
pub mod subscription;

pub use activity::Activity;
pub use bill::{Bill, BillStatus, BillValidationError};
pub use ids::{ActivityId, BillId};
pub use money::Money;
pub use subscription::SubscriptionTier;
