//! Activity log display formatting

use crate::models::Activity;

/// Format the activity log, newest first
pub fn format_activity_log(activities: &[Activity]) -> String {
    if activities.is_empty() {
        return "No activity yet.\n".to_string();
    }

    let mut output = String::new();
    for activity in activities {
        let delta = activity
            .amount
            .map(|a| format!("  {}", a.format_signed()))
            .unwrap_or_default();

        output.push_str(&format!(
            "{}  {}{}\n",
            activity.timestamp.format("%Y-%m-%d %H:%M"),
            activity.action,
            delta
        ));
        output.push_str(&format!("    {}\n", activity.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_activity_log() {
        let activities = vec![
            Activity::new(
                "Bill Payment",
                "Paid Water Bill",
                Some(Money::from_cents(-15630)),
            ),
            Activity::new("Bill Added", "Added new bill: Gym", None),
        ];

        let output = format_activity_log(&activities);
        assert!(output.contains("Bill Payment  -€156.30"));
        assert!(output.contains("Paid Water Bill"));
        assert!(output.contains("Bill Added\n"));
    }

    #[test]
    fn test_format_empty_log() {
        let output = format_activity_log(&[]);
        assert!(output.contains("No activity yet"));
    }
}
