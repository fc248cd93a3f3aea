//! billify - Terminal-based bill management dashboard
//!
//! This library provides the core functionality for the billify application:
//! an in-memory, per-session bill manager with an activity log, a wallet
//! balance, subscription plans, and derived dashboard/analytics views.
//! Nothing is persisted and nothing leaves the process; every session starts
//! from a demo seed (or empty with `--fresh`).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Display settings
//! - `error`: Custom error types
//! - `models`: Core data models (bills, activities, subscription tiers)
//! - `state`: In-memory session state (the bill ledger and friends)
//! - `services`: Business logic layer
//! - `reports`: Derived views (dashboard, analytics)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `session`: Read-only user identity

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod state;

pub use error::{BillifyError, BillifyResult};
pub use state::AppState;
