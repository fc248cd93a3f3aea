//! Reports module for billify
//!
//! Derived views computed from the session state on every read: the
//! dashboard overview and the category/status analytics.

pub mod analytics;
pub mod dashboard;

pub use analytics::{AnalyticsReport, CategoryBreakdown, StatusBreakdown};
pub use dashboard::DashboardReport;
