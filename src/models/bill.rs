//! Bill model
//!
//! Represents a recurring payable obligation tracked by the application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BillId;
use super::money::Money;

/// Status of a bill
///
/// The status set is deliberately unconstrained: any status is reachable
/// from any other via an explicit update, there is no transition machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    /// Bill has been paid
    Paid,
    /// Bill is awaiting payment
    Pending,
    /// Wallet balance could not cover the bill
    Insufficient,
    /// Bill has not arrived from the provider yet
    NotReceived,
}

impl BillStatus {
    /// All statuses, in display order
    pub const ALL: [BillStatus; 4] = [
        Self::Paid,
        Self::Pending,
        Self::Insufficient,
        Self::NotReceived,
    ];

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "paid" => Some(Self::Paid),
            "pending" => Some(Self::Pending),
            "insufficient" => Some(Self::Insufficient),
            "not_received" | "not-received" | "notreceived" => Some(Self::NotReceived),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Insufficient => "insufficient",
            Self::NotReceived => "not received",
        }
    }

    /// Single-character terminal indicator for list views
    pub fn symbol(&self) -> char {
        match self {
            Self::Paid => '✓',
            Self::Pending => '○',
            Self::Insufficient => '✗',
            Self::NotReceived => '?',
        }
    }

    /// Whether this status means the bill still needs the user's attention
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Pending | Self::Insufficient)
    }
}

impl Default for BillStatus {
    fn default() -> Self {
        Self::NotReceived
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recurring payable obligation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier
    pub id: BillId,

    /// Bill name (e.g., "Electricity Bill")
    pub name: String,

    /// Bill amount; always non-negative
    pub amount: Money,

    /// Calendar due date
    pub due_date: NaiveDate,

    /// Current status
    #[serde(default)]
    pub status: BillStatus,

    /// Free-form category label (e.g., "Utilities")
    pub category: String,

    /// Free-form provider label (e.g., "Latvenergo")
    pub provider: String,

    /// Whether auto-pay is toggled on for this bill (display-only)
    #[serde(default)]
    pub autopay: bool,
}

impl Bill {
    /// Create a new bill with a fresh identifier
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
        category: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            amount,
            due_date,
            status: BillStatus::default(),
            category: category.into(),
            provider: provider.into(),
            autopay: false,
        }
    }

    /// Validate the bill
    pub fn validate(&self) -> Result<(), BillValidationError> {
        if self.name.trim().is_empty() {
            return Err(BillValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(BillValidationError::NameTooLong(self.name.len()));
        }

        if self.amount.is_negative() {
            return Err(BillValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.amount, self.status)
    }
}

/// Validation errors for bills
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAmount(Money),
}

impl fmt::Display for BillValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bill name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Bill name too long ({} chars, max 100)", len)
            }
            Self::NegativeAmount(amount) => {
                write!(f, "Bill amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for BillValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn due(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_bill() {
        let bill = Bill::new(
            "Electricity Bill",
            Money::from_cents(8950),
            due(2024, 10, 1),
            "Utilities",
            "Latvenergo",
        );
        assert_eq!(bill.name, "Electricity Bill");
        assert_eq!(bill.amount.cents(), 8950);
        assert_eq!(bill.status, BillStatus::NotReceived);
        assert!(!bill.autopay);
    }

    #[test]
    fn test_validation() {
        let mut bill = Bill::new(
            "Internet Bill",
            Money::from_cents(2499),
            due(2024, 10, 5),
            "Telecommunications",
            "Bite",
        );
        assert!(bill.validate().is_ok());

        bill.name = String::new();
        assert_eq!(bill.validate(), Err(BillValidationError::EmptyName));

        bill.name = "a".repeat(101);
        assert!(matches!(
            bill.validate(),
            Err(BillValidationError::NameTooLong(_))
        ));

        bill.name = "Internet Bill".into();
        bill.amount = Money::from_cents(-100);
        assert!(matches!(
            bill.validate(),
            Err(BillValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(BillStatus::parse("paid"), Some(BillStatus::Paid));
        assert_eq!(BillStatus::parse("PENDING"), Some(BillStatus::Pending));
        assert_eq!(
            BillStatus::parse("not_received"),
            Some(BillStatus::NotReceived)
        );
        assert_eq!(
            BillStatus::parse("not-received"),
            Some(BillStatus::NotReceived)
        );
        assert_eq!(BillStatus::parse("invalid"), None);
    }

    #[test]
    fn test_needs_attention() {
        assert!(BillStatus::Pending.needs_attention());
        assert!(BillStatus::Insufficient.needs_attention());
        assert!(!BillStatus::Paid.needs_attention());
        assert!(!BillStatus::NotReceived.needs_attention());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(BillStatus::NotReceived.label(), "not received");
        assert_eq!(BillStatus::Paid.to_string(), "paid");
    }

    #[test]
    fn test_serialization() {
        let bill = Bill::new(
            "Water Bill",
            Money::from_cents(15630),
            due(2024, 10, 8),
            "Utilities",
            "Rigas Udens",
        );
        let json = serde_json::to_string(&bill).unwrap();
        assert!(json.contains("\"not_received\""));

        let deserialized: Bill = serde_json::from_str(&json).unwrap();
        assert_eq!(bill.id, deserialized.id);
        assert_eq!(bill.amount, deserialized.amount);
    }

    #[test]
    fn test_display() {
        let bill = Bill::new(
            "Mobile Bill",
            Money::from_cents(1590),
            due(2024, 10, 15),
            "Telecommunications",
            "Tele2",
        );
        assert_eq!(
            format!("{}", bill),
            "Mobile Bill (€15.90, not received)"
        );
    }
}
