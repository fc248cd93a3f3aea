//! Activity model
//!
//! Audit-log entries describing state-changing actions and their optional
//! monetary delta. Entries are immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ActivityId;
use super::money::Money;

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier
    pub id: ActivityId,

    /// Short action label (e.g., "Bill Payment")
    pub action: String,

    /// Human-readable description of what happened
    pub description: String,

    /// When the activity occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Optional signed monetary delta (negative = outflow, positive = inflow)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

impl Activity {
    /// Create a new activity entry timestamped now
    pub fn new(
        action: impl Into<String>,
        description: impl Into<String>,
        amount: Option<Money>,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            action: action.into(),
            description: description.into(),
            timestamp: Utc::now(),
            amount,
        }
    }

    /// Whether this entry records a monetary outflow
    pub fn is_outflow(&self) -> bool {
        self.amount.is_some_and(|a| a.is_negative())
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount {
            Some(amount) => write!(
                f,
                "{}: {} ({})",
                self.action,
                self.description,
                amount.format_signed()
            ),
            None => write!(f, "{}: {}", self.action, self.description),
        }
    }
}
