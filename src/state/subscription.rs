//! Subscription state
//!
//! Holds the currently selected subscription tier for the session.

use std::sync::RwLock;

use crate::error::{BillifyError, BillifyResult};
use crate::models::SubscriptionTier;

/// Currently selected subscription tier
pub struct SubscriptionState {
    tier: RwLock<SubscriptionTier>,
}

impl SubscriptionState {
    /// Create state on the given tier
    pub fn new(tier: SubscriptionTier) -> Self {
        Self {
            tier: RwLock::new(tier),
        }
    }

    /// Get the current tier
    pub fn current(&self) -> BillifyResult<SubscriptionTier> {
        let tier = self
            .tier
            .read()
            .map_err(|e| BillifyError::State(format!("Failed to acquire read lock: {}", e)))?;

        Ok(*tier)
    }

    /// Replace the tier unconditionally, returning the previous one
    pub fn set(&self, new_tier: SubscriptionTier) -> BillifyResult<SubscriptionTier> {
        let mut tier = self
            .tier
            .write()
            .map_err(|e| BillifyError::State(format!("Failed to acquire write lock: {}", e)))?;

        let previous = *tier;
        *tier = new_tier;
        Ok(previous)
    }
}

impl Default for SubscriptionState {
    fn default() -> Self {
        Self::new(SubscriptionTier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_free() {
        let state = SubscriptionState::default();
        assert_eq!(state.current().unwrap(), SubscriptionTier::Free);
    }

    #[test]
    fn test_set_returns_previous() {
        let state = SubscriptionState::default();
        let previous = state.set(SubscriptionTier::Premium).unwrap();
        assert_eq!(previous, SubscriptionTier::Free);
        assert_eq!(state.current().unwrap(), SubscriptionTier::Premium);
    }

    #[test]
    fn test_set_same_tier_is_allowed() {
        let state = SubscriptionState::new(SubscriptionTier::Basic);
        let previous = state.set(SubscriptionTier::Basic).unwrap();
        assert_eq!(previous, SubscriptionTier::Basic);
        assert_eq!(state.current().unwrap(), SubscriptionTier::Basic);
    }
}
