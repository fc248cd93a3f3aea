//! Session state for billify
//!
//! Holds the entire application state in memory for one session: the bill
//! ledger, the activity log, the wallet balance, and the subscription tier.
//! Nothing is persisted; every session starts from a seed.
//!
//! All mutation happens through the repositories below on a single logical
//! thread, preserving at-most-one-writer-at-a-time semantics.

pub mod activities;
pub mod bills;
pub mod demo;
pub mod subscription;

pub use activities::ActivityLog;
pub use bills::BillLedger;
pub use subscription::SubscriptionState;

use crate::error::BillifyResult;
use crate::models::Money;

/// Root of the in-memory session state
///
/// Consumers receive a reference to an `AppState` instance; there is no
/// ambient singleton.
pub struct AppState {
    /// The bill collection
    pub bills: BillLedger,
    /// The activity log (newest first)
    pub activities: ActivityLog,
    /// The subscription tier
    pub subscription: SubscriptionState,
    /// Wallet balance; read-only, no operation mutates it
    wallet_balance: Money,
}

impl AppState {
    /// Create an empty session state
    pub fn new() -> Self {
        Self {
            bills: BillLedger::new(),
            activities: ActivityLog::new(),
            subscription: SubscriptionState::default(),
            wallet_balance: Money::zero(),
        }
    }

    /// Create a session state seeded with the demo data
    pub fn demo() -> Self {
        Self {
            bills: BillLedger::with_bills(demo::demo_bills()),
            activities: ActivityLog::with_entries(demo::demo_activities()),
            subscription: SubscriptionState::default(),
            wallet_balance: demo::demo_wallet_balance(),
        }
    }

    /// The wallet balance for this session
    pub fn wallet_balance(&self) -> Money {
        self.wallet_balance
    }

    /// Total amount across all bills
    pub fn total_bill_amount(&self) -> BillifyResult<Money> {
        Ok(self.bills.get_all()?.iter().map(|b| b.amount).sum())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
