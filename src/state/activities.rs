//! Activity log
//!
//! Append-only, newest-first log of state-changing actions for the session.

use std::sync::RwLock;

use crate::error::{BillifyError, BillifyResult};
use crate::models::Activity;

/// Newest-first log of activities
pub struct ActivityLog {
    data: RwLock<Vec<Activity>>,
}

impl ActivityLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Vec::new()),
        }
    }

    /// Create a log seeded with existing entries (newest first)
    pub fn with_entries(entries: Vec<Activity>) -> Self {
        Self {
            data: RwLock::new(entries),
        }
    }

    /// Prepend a new entry; the most recent entry is always at index 0
    pub fn record(&self, activity: Activity) -> BillifyResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BillifyError::State(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(0, activity);
        Ok(())
    }

    /// Get the most recent entries, up to `limit`
    pub fn recent(&self, limit: usize) -> BillifyResult<Vec<Activity>> {
        let data = self
            .data
            .read()
            .map_err(|e| BillifyError::State(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().take(limit).cloned().collect())
    }

    /// Get all entries, newest first
    pub fn get_all(&self) -> BillifyResult<Vec<Activity>> {
        let data = self
            .data
            .read()
            .map_err(|e| BillifyError::State(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Number of entries in the log
    pub fn len(&self) -> BillifyResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| BillifyError::State(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> BillifyResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_record_prepends() {
        let log = ActivityLog::new();
        log.record(Activity::new("First", "first entry", None))
            .unwrap();
        log.record(Activity::new("Second", "second entry", None))
            .unwrap();

        let all = log.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].action, "Second");
        assert_eq!(all[1].action, "First");
    }

    #[test]
    fn test_prior_entries_retained() {
        let seed = vec![Activity::new(
            "Wallet Top-up",
            "Added funds via Swedbank",
            Some(Money::from_cents(50000)),
        )];
        let log = ActivityLog::with_entries(seed);

        for i in 0..3 {
            log.record(Activity::new("Bill Added", format!("bill {}", i), None))
                .unwrap();
        }

        // 3 new entries plus the seeded one
        assert_eq!(log.len().unwrap(), 4);
        assert_eq!(log.get_all().unwrap()[0].description, "bill 2");
    }

    #[test]
    fn test_recent_limit() {
        let log = ActivityLog::new();
        for i in 0..10 {
            log.record(Activity::new("Action", format!("entry {}", i), None))
                .unwrap();
        }

        let recent = log.recent(8).unwrap();
        assert_eq!(recent.len(), 8);
        assert_eq!(recent[0].description, "entry 9");
    }

    #[test]
    fn test_recent_on_short_log() {
        let log = ActivityLog::new();
        log.record(Activity::new("Action", "only entry", None))
            .unwrap();

        assert_eq!(log.recent(8).unwrap().len(), 1);
    }
}
