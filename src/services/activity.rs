//! Activity service
//!
//! Thin business layer over the activity log: recording new entries and
//! reading them back newest first.

use crate::error::BillifyResult;
use crate::models::{Activity, Money};
use crate::state::AppState;

/// Service for the activity log
pub struct ActivityService<'a> {
    state: &'a AppState,
}

impl<'a> ActivityService<'a> {
    /// Create a new activity service
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Record a new activity, timestamped now and placed at index 0
    pub fn record(
        &self,
        action: &str,
        description: &str,
        amount: Option<Money>,
    ) -> BillifyResult<Activity> {
        let activity = Activity::new(action, description, amount);
        self.state.activities.record(activity.clone())?;
        Ok(activity)
    }

    /// Get the most recent entries, up to `limit`
    pub fn recent(&self, limit: usize) -> BillifyResult<Vec<Activity>> {
        self.state.activities.recent(limit)
    }

    /// Get all entries, newest first
    pub fn list(&self) -> BillifyResult<Vec<Activity>> {
        self.state.activities.get_all()
    }
}
