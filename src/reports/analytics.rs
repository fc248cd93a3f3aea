//! Analytics report
//!
//! Aggregates the bill collection by category and by status, with percentage
//! shares and an average bill amount. Everything is computed on read; the
//! collection is small enough that caching would buy nothing.

use std::collections::HashMap;
use std::io::Write;

use crate::error::BillifyResult;
use crate::models::{BillStatus, Money};
use crate::state::AppState;

/// Aggregate row for one category
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// Category label
    pub category: String,
    /// Total amount across bills in this category
    pub total: Money,
    /// Number of bills in this category
    pub count: usize,
    /// Percentage share of the grand total (0.0 when the total is zero)
    pub percentage: f64,
}

/// Aggregate row for one status
#[derive(Debug, Clone)]
pub struct StatusBreakdown {
    /// Bill status
    pub status: BillStatus,
    /// Total amount across bills with this status
    pub total: Money,
    /// Number of bills with this status
    pub count: usize,
}

/// Analytics report over the current bill collection
#[derive(Debug, Clone)]
pub struct AnalyticsReport {
    /// Per-category rows, sorted by amount descending
    pub categories: Vec<CategoryBreakdown>,
    /// Per-status rows, in status display order; absent statuses are omitted
    pub statuses: Vec<StatusBreakdown>,
    /// Grand total across all bills
    pub total_amount: Money,
    /// Number of bills
    pub bill_count: usize,
    /// Average bill amount (zero for an empty collection)
    pub average_amount: Money,
}

impl AnalyticsReport {
    /// Generate the report from the current state
    pub fn generate(state: &AppState) -> BillifyResult<Self> {
        let bills = state.bills.get_all()?;

        let total_amount: Money = bills.iter().map(|b| b.amount).sum();
        let bill_count = bills.len();
        let average_amount = if bill_count == 0 {
            Money::zero()
        } else {
            Money::from_cents(total_amount.cents() / bill_count as i64)
        };

        // Aggregate by category
        let mut category_totals: HashMap<String, (Money, usize)> = HashMap::new();
        for bill in &bills {
            let entry = category_totals
                .entry(bill.category.clone())
                .or_insert((Money::zero(), 0));
            entry.0 += bill.amount;
            entry.1 += 1;
        }

        let mut categories: Vec<CategoryBreakdown> = category_totals
            .into_iter()
            .map(|(category, (total, count))| {
                let percentage = if total_amount.is_zero() {
                    0.0
                } else {
                    (total.cents() as f64 / total_amount.cents() as f64) * 100.0
                };
                CategoryBreakdown {
                    category,
                    total,
                    count,
                    percentage,
                }
            })
            .collect();

        // Largest categories first; tie-break on name for stable output
        categories.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        // Aggregate by status
        let mut status_totals: HashMap<BillStatus, (Money, usize)> = HashMap::new();
        for bill in &bills {
            let entry = status_totals
                .entry(bill.status)
                .or_insert((Money::zero(), 0));
            entry.0 += bill.amount;
            entry.1 += 1;
        }

        let statuses: Vec<StatusBreakdown> = BillStatus::ALL
            .iter()
            .filter_map(|status| {
                status_totals.get(status).map(|(total, count)| StatusBreakdown {
                    status: *status,
                    total: *total,
                    count: *count,
                })
            })
            .collect();

        Ok(Self {
            categories,
            statuses,
            total_amount,
            bill_count,
            average_amount,
        })
    }

    /// Number of distinct categories
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Analytics\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Total Bills:  {}\n", self.total_amount));
        output.push_str(&format!("Categories:   {}\n", self.category_count()));
        output.push_str(&format!("Average Bill: {}\n\n", self.average_amount));

        output.push_str("Bills by Category\n");
        output.push_str(&format!(
            "{:<25} {:>12} {:>7} {:>8}\n",
            "Category", "Amount", "Bills", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<25} {:>12} {:>7} {:>7.1}%\n",
                row.category,
                row.total.to_string(),
                row.count,
                row.percentage
            ));
        }

        output.push_str("\nBills by Status\n");
        output.push_str(&format!(
            "{:<25} {:>12} {:>7}\n",
            "Status", "Amount", "Bills"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.statuses {
            output.push_str(&format!(
                "{:<25} {:>12} {:>7}\n",
                row.status.label(),
                row.total.to_string(),
                row.count
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> BillifyResult<()> {
        writeln!(writer, "Section,Label,Amount,Count,Percentage")
            .map_err(|e| crate::error::BillifyError::Export(e.to_string()))?;

        for row in &self.categories {
            writeln!(
                writer,
                "category,{},{:.2},{},{:.2}",
                row.category,
                row.total.cents() as f64 / 100.0,
                row.count,
                row.percentage
            )
            .map_err(|e| crate::error::BillifyError::Export(e.to_string()))?;
        }

        for row in &self.statuses {
            writeln!(
                writer,
                "status,{},{:.2},{},",
                row.status,
                row.total.cents() as f64 / 100.0,
                row.count
            )
            .map_err(|e| crate::error::BillifyError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "total,,{:.2},{},100.00",
            self.total_amount.cents() as f64 / 100.0,
            self.bill_count
        )
        .map_err(|e| crate::error::BillifyError::Export(e.to_string()))?;

        Ok(())
    }
}
