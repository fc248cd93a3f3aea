//! Bill service
//!
//! Provides business logic for bill management: adding, removing, paying,
//! and status changes, with validation and activity recording.

use chrono::NaiveDate;

use crate::error::{BillifyError, BillifyResult};
use crate::models::{Activity, Bill, BillId, BillStatus, Money};
use crate::state::AppState;

/// Service for bill management
pub struct BillService<'a> {
    state: &'a AppState,
}

impl<'a> BillService<'a> {
    /// Create a new bill service
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Add a new bill
    ///
    /// Validation failures leave the state unchanged. Category defaults to
    /// "Other" and provider to "Unknown"; new bills start as not received.
    pub fn add(
        &self,
        name: &str,
        amount: Money,
        due_date: NaiveDate,
        category: Option<&str>,
        provider: Option<&str>,
    ) -> BillifyResult<Bill> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BillifyError::Validation("Bill name cannot be empty".into()));
        }

        let category = category.filter(|c| !c.trim().is_empty()).unwrap_or("Other");
        let provider = provider
            .filter(|p| !p.trim().is_empty())
            .unwrap_or("Unknown");

        let bill = Bill::new(name, amount, due_date, category, provider);

        bill.validate()
            .map_err(|e| BillifyError::Validation(e.to_string()))?;

        self.state.bills.insert(bill.clone())?;

        self.state.activities.record(Activity::new(
            "Bill Added",
            format!("Added new bill: {}", bill.name),
            None,
        ))?;

        Ok(bill)
    }

    /// Remove a bill by id
    ///
    /// An absent id is silently ignored and yields `None`; the collection is
    /// left unchanged and no activity is recorded.
    pub fn remove(&self, id: BillId) -> BillifyResult<Option<Bill>> {
        let removed = self.state.bills.remove(id)?;

        if let Some(bill) = &removed {
            self.state.activities.record(Activity::new(
                "Bill Removed",
                format!("Removed bill: {}", bill.name),
                None,
            ))?;
        }

        Ok(removed)
    }

    /// Replace the status of a bill
    ///
    /// No transition-legality checks; returns `false` for an absent id.
    pub fn set_status(&self, id: BillId, status: BillStatus) -> BillifyResult<bool> {
        self.state.bills.set_status(id, status)
    }

    /// Pay a bill: mark it paid and record the outflow
    ///
    /// Yields `None` for an absent id, leaving the state unchanged.
    pub fn pay(&self, id: BillId) -> BillifyResult<Option<Bill>> {
        let Some(bill) = self.state.bills.get(id)? else {
            return Ok(None);
        };

        self.state.bills.set_status(id, BillStatus::Paid)?;

        self.state.activities.record(Activity::new(
            "Bill Payment",
            format!("Paid {}", bill.name),
            Some(-bill.amount),
        ))?;

        self.state.bills.get(id)
    }

    /// Toggle auto-pay for a bill (demo feature; display-only semantics)
    ///
    /// Returns the new flag value, or `None` for an absent id.
    pub fn toggle_autopay(&self, id: BillId) -> BillifyResult<Option<bool>> {
        let Some(bill) = self.state.bills.get(id)? else {
            return Ok(None);
        };

        let new_value = !bill.autopay;
        self.state.bills.set_autopay(id, new_value)?;

        self.state.activities.record(Activity::new(
            "Auto-pay Toggle",
            format!("Toggled auto-pay for {}", bill.name),
            None,
        ))?;

        Ok(Some(new_value))
    }

    /// Simulated mail import (demo feature)
    ///
    /// Real email import is out of scope; this only records the attempt and
    /// returns the number of bills imported, which is always zero.
    pub fn import_from_mail(&self) -> BillifyResult<usize> {
        self.state.activities.record(Activity::new(
            "Mail Import",
            "Simulated mail import for demo",
            None,
        ))?;

        Ok(0)
    }

    /// Find a bill by id string or case-insensitive name
    pub fn find(&self, identifier: &str) -> BillifyResult<Option<Bill>> {
        // Try by name first
        if let Some(bill) = self.state.bills.get_by_name(identifier)? {
            return Ok(Some(bill));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<BillId>() {
            return self.state.bills.get(id);
        }

        Ok(None)
    }

    /// List all bills, optionally sorted by due date
    pub fn list(&self, by_due_date: bool) -> BillifyResult<Vec<Bill>> {
        if by_due_date {
            self.state.bills.get_by_due_date()
        } else {
            self.state.bills.get_all()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_bill() {
        let state = AppState::new();
        let service = BillService::new(&state);

        let bill = service
            .add(
                "Electricity Bill",
                Money::from_cents(8950),
                due(2024, 10, 1),
                Some("Utilities"),
                Some("Latvenergo"),
            )
            .unwrap();

        assert_eq!(bill.name, "Electricity Bill");
        assert_eq!(bill.status, BillStatus::NotReceived);
        assert_eq!(state.bills.len().unwrap(), 1);

        // Activity recorded at index 0
        let activities = state.activities.get_all().unwrap();
        assert_eq!(activities[0].action, "Bill Added");
    }

    #[test]
    fn test_add_defaults() {
        let state = AppState::new();
        let service = BillService::new(&state);

        let bill = service
            .add("Gym", Money::from_cents(3000), due(2024, 10, 10), None, None)
            .unwrap();

        assert_eq!(bill.category, "Other");
        assert_eq!(bill.provider, "Unknown");
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let state = AppState::new();
        let service = BillService::new(&state);

        let result = service.add("   ", Money::from_cents(100), due(2024, 10, 1), None, None);
        assert!(matches!(result, Err(BillifyError::Validation(_))));
        assert!(state.bills.is_empty().unwrap());
        assert!(state.activities.is_empty().unwrap());
    }

    #[test]
    fn test_add_negative_amount_rejected() {
        let state = AppState::new();
        let service = BillService::new(&state);

        let result = service.add(
            "Refund",
            Money::from_cents(-100),
            due(2024, 10, 1),
            None,
            None,
        );
        assert!(matches!(result, Err(BillifyError::Validation(_))));
        assert!(state.bills.is_empty().unwrap());
    }

    #[test]
    fn test_remove_unknown_id_silently_ignored() {
        let state = AppState::demo();
        let service = BillService::new(&state);
        let before = state.bills.get_all().unwrap();

        let removed = service.remove(BillId::new()).unwrap();
        assert!(removed.is_none());

        let after = state.bills.get_all().unwrap();
        assert_eq!(after.len(), before.len());
        for (a, b) in after.iter().zip(before.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.name, b.name);
        }
        // No "Bill Removed" activity
        assert_eq!(state.activities.len().unwrap(), 2);
    }

    #[test]
    fn test_remove_existing() {
        let state = AppState::demo();
        let service = BillService::new(&state);

        let target = state.bills.get_by_name("Internet Bill").unwrap().unwrap();
        let removed = service.remove(target.id).unwrap().unwrap();
        assert_eq!(removed.name, "Internet Bill");
        assert_eq!(state.bills.len().unwrap(), 3);

        let activities = state.activities.get_all().unwrap();
        assert_eq!(activities[0].action, "Bill Removed");
    }

    #[test]
    fn test_pay_bill_records_outflow() {
        let state = AppState::demo();
        let service = BillService::new(&state);

        let target = state.bills.get_by_name("Internet Bill").unwrap().unwrap();
        let paid = service.pay(target.id).unwrap().unwrap();

        assert_eq!(paid.status, BillStatus::Paid);

        let activities = state.activities.get_all().unwrap();
        assert_eq!(activities[0].action, "Bill Payment");
        assert_eq!(activities[0].amount.unwrap().cents(), -2499);
    }

    #[test]
    fn test_pay_unknown_id() {
        let state = AppState::demo();
        let service = BillService::new(&state);

        assert!(service.pay(BillId::new()).unwrap().is_none());
        assert_eq!(state.activities.len().unwrap(), 2);
    }

    #[test]
    fn test_set_status_any_transition() {
        let state = AppState::demo();
        let service = BillService::new(&state);

        // Paid back to pending: no legality checks
        let target = state.bills.get_by_name("Electricity Bill").unwrap().unwrap();
        assert_eq!(target.status, BillStatus::Paid);

        assert!(service.set_status(target.id, BillStatus::Pending).unwrap());
        let after = state.bills.get(target.id).unwrap().unwrap();
        assert_eq!(after.status, BillStatus::Pending);
    }

    #[test]
    fn test_toggle_autopay() {
        let state = AppState::demo();
        let service = BillService::new(&state);

        let target = state.bills.get_by_name("Mobile Bill").unwrap().unwrap();
        assert!(!target.autopay);

        assert_eq!(service.toggle_autopay(target.id).unwrap(), Some(true));
        assert_eq!(service.toggle_autopay(target.id).unwrap(), Some(false));

        let activities = state.activities.get_all().unwrap();
        assert_eq!(activities[0].action, "Auto-pay Toggle");
    }

    #[test]
    fn test_import_from_mail_is_a_stub() {
        let state = AppState::demo();
        let service = BillService::new(&state);

        assert_eq!(service.import_from_mail().unwrap(), 0);
        assert_eq!(state.bills.len().unwrap(), 4);

        let activities = state.activities.get_all().unwrap();
        assert_eq!(activities[0].action, "Mail Import");
    }

    #[test]
    fn test_find_by_name_and_id() {
        let state = AppState::demo();
        let service = BillService::new(&state);

        let by_name = service.find("water bill").unwrap().unwrap();
        assert_eq!(by_name.name, "Water Bill");

        let by_id = service
            .find(&by_name.id.as_uuid().to_string())
            .unwrap()
            .unwrap();
        assert_eq!(by_id.id, by_name.id);

        assert!(service.find("no such bill").unwrap().is_none());
    }

    #[test]
    fn test_list_by_due_date() {
        let state = AppState::demo();
        let service = BillService::new(&state);

        let sorted = service.list(true).unwrap();
        assert_eq!(sorted.first().unwrap().name, "Electricity Bill");
        assert_eq!(sorted.last().unwrap().name, "Mobile Bill");
    }
}
