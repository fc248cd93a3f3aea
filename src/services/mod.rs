//! Service layer for billify
//!
//! The service layer provides business logic on top of the session state,
//! handling validation, activity recording, and cross-entity operations.

pub mod activity;
pub mod bill;
pub mod subscription;

pub use activity::ActivityService;
pub use bill::BillService;
pub use subscription::SubscriptionService;
