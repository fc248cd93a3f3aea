//! Subscription plan display formatting

use crate::models::SubscriptionTier;

/// Format the three plans with prices, quotas, and features, marking the
/// currently selected one
pub fn format_plan_list(current: SubscriptionTier) -> String {
    let mut output = String::new();

    for tier in SubscriptionTier::ALL {
        let marker = if tier == current { " (current plan)" } else { "" };
        output.push_str(&format!(
            "{}{} - {}/month, {}\n",
            tier,
            marker,
            tier.price(),
            tier.bill_quota()
        ));

        for feature in tier.features() {
            output.push_str(&format!("    - {}\n", feature));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plan_list() {
        let output = format_plan_list(SubscriptionTier::Free);

        assert!(output.contains("Free (current plan) - €0.00/month, 5 bills/month"));
        assert!(output.contains("Basic - €5.00/month, 10 bills/month"));
        assert!(output.contains("Premium - €11.00/month, Unlimited bills"));
        assert!(output.contains("24/7 premium support"));
    }

    #[test]
    fn test_current_marker_moves() {
        let output = format_plan_list(SubscriptionTier::Premium);
        assert!(output.contains("Premium (current plan)"));
        assert!(!output.contains("Free (current plan)"));
    }
}
