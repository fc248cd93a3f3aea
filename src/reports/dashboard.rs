//! Dashboard report
//!
//! The at-a-glance session overview: wallet balance, bill counts, the bill
//! collection sorted by due date, and the most recent activity entries.

use crate::error::BillifyResult;
use crate::models::{Activity, Bill, Money};
use crate::session::Session;
use crate::state::AppState;

/// Dashboard overview of the current session
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Display name of the logged-in user
    pub user_name: String,
    /// Wallet balance
    pub wallet_balance: Money,
    /// Number of bills tracked
    pub bill_count: usize,
    /// Bills needing attention (pending or insufficient)
    pub attention_count: usize,
    /// Bills sorted by due date, earliest first
    pub bills: Vec<Bill>,
    /// Most recent activity entries
    pub recent_activities: Vec<Activity>,
}

impl DashboardReport {
    /// Generate the dashboard from the current state
    pub fn generate(
        state: &AppState,
        session: &Session,
        activity_limit: usize,
    ) -> BillifyResult<Self> {
        let bills = state.bills.get_by_due_date()?;
        let attention_count = state.bills.needing_attention()?.len();
        let recent_activities = state.activities.recent(activity_limit)?;

        Ok(Self {
            user_name: session.profile().name.clone(),
            wallet_balance: state.wallet_balance(),
            bill_count: bills.len(),
            attention_count,
            bills,
            recent_activities,
        })
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Welcome back, {}!\n", self.user_name));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Wallet Balance: {}\n", self.wallet_balance));
        output.push_str(&format!("Total Bills:    {}\n", self.bill_count));
        output.push_str(&format!("Due Soon:       {} need attention\n\n", self.attention_count));

        output.push_str("Bills Overview (by due date)\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        if self.bills.is_empty() {
            output.push_str("No bills found.\n");
        } else {
            for bill in &self.bills {
                output.push_str(&format!(
                    "{} {:<22} {:<14} {:>10}  {}\n",
                    bill.status.symbol(),
                    bill.name,
                    bill.provider,
                    bill.amount.to_string(),
                    bill.due_date.format("%b %d"),
                ));
            }
        }

        output.push_str("\nActivity Log\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        if self.recent_activities.is_empty() {
            output.push_str("No activity yet.\n");
        } else {
            for activity in &self.recent_activities {
                let delta = activity
                    .amount
                    .map(|a| format!(" {}", a.format_signed()))
                    .unwrap_or_default();
                output.push_str(&format!(
                    "{}  {}{}\n    {}\n",
                    activity.timestamp.format("%b %d, %H:%M"),
                    activity.action,
                    delta,
                    activity.description,
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_demo_dashboard() {
        let state = AppState::demo();
        let session = Session::demo();
        let report = DashboardReport::generate(&state, &session, 8).unwrap();

        assert_eq!(report.user_name, "Demo User");
        assert_eq!(report.wallet_balance.cents(), 28764);
        assert_eq!(report.bill_count, 4);
        // Internet (pending) and Water (insufficient)
        assert_eq!(report.attention_count, 2);
        assert_eq!(report.recent_activities.len(), 2);

        // Sorted by due date
        assert_eq!(report.bills[0].name, "Electricity Bill");
        assert_eq!(report.bills[3].name, "Mobile Bill");
    }

    #[test]
    fn test_activity_limit_applied() {
        let state = AppState::demo();
        let session = Session::demo();
        let report = DashboardReport::generate(&state, &session, 1).unwrap();

        assert_eq!(report.recent_activities.len(), 1);
        assert_eq!(report.recent_activities[0].action, "Bill Payment");
    }

    #[test]
    fn test_empty_state_dashboard() {
        let state = AppState::new();
        let session = Session::demo();
        let report = DashboardReport::generate(&state, &session, 8).unwrap();

        assert_eq!(report.bill_count, 0);
        assert_eq!(report.attention_count, 0);

        let output = report.format_terminal();
        assert!(output.contains("No bills found."));
        assert!(output.contains("No activity yet."));
    }

    #[test]
    fn test_format_terminal() {
        let state = AppState::demo();
        let session = Session::demo();
        let report = DashboardReport::generate(&state, &session, 8).unwrap();
        let output = report.format_terminal();

        assert!(output.contains("Welcome back, Demo User!"));
        assert!(output.contains("Wallet Balance: €287.64"));
        assert!(output.contains("Due Soon:       2 need attention"));
        assert!(output.contains("Electricity Bill"));
        assert!(output.contains("+€500.00"));
    }
}
