//! Subscription service
//!
//! Tier selection for the session. Selection is unconditional; any tier may
//! replace any other, and the change is recorded in the activity log.

use crate::error::BillifyResult;
use crate::models::{Activity, SubscriptionTier};
use crate::state::AppState;

/// Service for subscription management
pub struct SubscriptionService<'a> {
    state: &'a AppState,
}

impl<'a> SubscriptionService<'a> {
    /// Create a new subscription service
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Get the current tier
    pub fn current(&self) -> BillifyResult<SubscriptionTier> {
        self.state.subscription.current()
    }

    /// Select a tier, replacing the current one unconditionally
    ///
    /// Returns the previously selected tier.
    pub fn select(&self, tier: SubscriptionTier) -> BillifyResult<SubscriptionTier> {
        let previous = self.state.subscription.set(tier)?;

        self.state.activities.record(Activity::new(
            "Subscription Changed",
            format!("Switched to {} plan", tier),
            None,
        ))?;

        Ok(previous)
    }
}
