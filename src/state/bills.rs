//! Bill ledger
//!
//! In-memory, insertion-ordered collection of bills for the current session.

use std::sync::RwLock;

use crate::error::{BillifyError, BillifyResult};
use crate::models::{Bill, BillId, BillStatus};

/// Insertion-ordered ledger of bills
pub struct BillLedger {
    data: RwLock<Vec<Bill>>,
}

impl BillLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Vec::new()),
        }
    }

    /// Create a ledger seeded with the given bills
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            data: RwLock::new(bills),
        }
    }

    /// Append a bill to the ledger
    ///
    /// Rejects a bill whose id is already present; identifiers are unique.
    pub fn insert(&self, bill: Bill) -> BillifyResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BillifyError::State(format!("Failed to acquire write lock: {}", e)))?;

        if data.iter().any(|b| b.id == bill.id) {
            return Err(BillifyError::Duplicate {
                entity_type: "Bill",
                identifier: bill.id.to_string(),
            });
        }

        data.push(bill);
        Ok(())
    }

    /// Remove a bill by id
    ///
    /// Returns the removed bill, or `None` when the id is absent (a no-op).
    pub fn remove(&self, id: BillId) -> BillifyResult<Option<Bill>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BillifyError::State(format!("Failed to acquire write lock: {}", e)))?;

        let position = data.iter().position(|b| b.id == id);
        Ok(position.map(|i| data.remove(i)))
    }

    /// Replace the status of a bill, leaving every other field untouched
    ///
    /// Returns `false` when the id is absent (a no-op). Any status is
    /// reachable from any other.
    pub fn set_status(&self, id: BillId, status: BillStatus) -> BillifyResult<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BillifyError::State(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|b| b.id == id) {
            Some(bill) => {
                bill.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Set the auto-pay flag of a bill
    pub fn set_autopay(&self, id: BillId, autopay: bool) -> BillifyResult<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BillifyError::State(format!("Failed to acquire write lock: {}", e)))?;

        match data.iter_mut().find(|b| b.id == id) {
            Some(bill) => {
                bill.autopay = autopay;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Get a bill by id
    pub fn get(&self, id: BillId) -> BillifyResult<Option<Bill>> {
        let data = self
            .data
            .read()
            .map_err(|e| BillifyError::State(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|b| b.id == id).cloned())
    }

    /// Get a bill by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> BillifyResult<Option<Bill>> {
        let data = self
            .data
            .read()
            .map_err(|e| BillifyError::State(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .iter()
            .find(|b| b.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Get all bills in insertion order
    pub fn get_all(&self) -> BillifyResult<Vec<Bill>> {
        let data = self
            .data
            .read()
            .map_err(|e| BillifyError::State(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get all bills sorted by due date, earliest first
    pub fn get_by_due_date(&self) -> BillifyResult<Vec<Bill>> {
        let mut bills = self.get_all()?;
        bills.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(bills)
    }

    /// Get the bills still needing attention (pending or insufficient)
    pub fn needing_attention(&self) -> BillifyResult<Vec<Bill>> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|b| b.status.needs_attention())
            .collect())
    }

    /// Number of bills in the ledger
    pub fn len(&self) -> BillifyResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| BillifyError::State(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> BillifyResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for BillLedger {
    fn default() -> Self {
        Self::new()
    }
}
