//! Subscription tiers
//!
//! The three subscription plans offered by the application. Quotas are
//! informational only; no bill-count enforcement is tied to a tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Free plan (default)
    #[default]
    Free,
    /// Basic plan
    Basic,
    /// Premium plan
    Premium,
}

impl SubscriptionTier {
    /// All tiers, in upgrade order
    pub const ALL: [SubscriptionTier; 3] = [Self::Free, Self::Basic, Self::Premium];

    /// Parse a tier from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "free" => Some(Self::Free),
            "basic" => Some(Self::Basic),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    /// Monthly price of the plan
    pub fn price(&self) -> Money {
        match self {
            Self::Free => Money::zero(),
            Self::Basic => Money::from_euros_cents(5, 0),
            Self::Premium => Money::from_euros_cents(11, 0),
        }
    }

    /// Advertised bill quota for the plan
    pub fn bill_quota(&self) -> &'static str {
        match self {
            Self::Free => "5 bills/month",
            Self::Basic => "10 bills/month",
            Self::Premium => "Unlimited bills",
        }
    }

    /// Feature list shown on the plans overview
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Self::Free => &["Basic bill tracking", "Email notifications", "Standard support"],
            Self::Basic => &[
                "All free features",
                "Priority support",
                "Advanced analytics",
                "Auto-pay scheduling",
            ],
            Self::Premium => &[
                "All basic features",
                "24/7 premium support",
                "Custom categories",
                "Export reports",
                "White-label",
            ],
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "Free"),
            Self::Basic => write!(f, "Basic"),
            Self::Premium => write!(f, "Premium"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tier() {
        assert_eq!(SubscriptionTier::default(), SubscriptionTier::Free);
    }

    #[test]
    fn test_parse() {
        assert_eq!(SubscriptionTier::parse("free"), Some(SubscriptionTier::Free));
        assert_eq!(
            SubscriptionTier::parse("PREMIUM"),
            Some(SubscriptionTier::Premium)
        );
        assert_eq!(SubscriptionTier::parse("gold"), None);
    }

    #[test]
    fn test_prices() {
        assert_eq!(SubscriptionTier::Free.price(), Money::zero());
        assert_eq!(SubscriptionTier::Basic.price().cents(), 500);
        assert_eq!(SubscriptionTier::Premium.price().cents(), 1100);
    }

    #[test]
    fn test_features_nonempty() {
        for tier in SubscriptionTier::ALL {
            assert!(!tier.features().is_empty());
            assert!(!tier.bill_quota().is_empty());
        }
    }

    #[test]
    fn test_serde_rename() {
        let json = serde_json::to_string(&SubscriptionTier::Premium).unwrap();
        assert_eq!(json, "\"premium\"");
    }
}
