//! Bill display formatting
//!
//! Formats bills for terminal output in table and detail views.

use crate::models::{Bill, Money};

/// Format a list of bills as a table
pub fn format_bill_list(bills: &[Bill]) -> String {
    if bills.is_empty() {
        return "No bills found.\n".to_string();
    }

    // Calculate column widths
    let name_width = bills.iter().map(|b| b.name.len()).max().unwrap_or(4).max(4);

    let provider_width = bills
        .iter()
        .map(|b| b.provider.len())
        .max()
        .unwrap_or(8)
        .max(8);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "  {:<name_width$}  {:<provider_width$}  {:>10}  {:<10}  {:<12}  {}\n",
        "Name",
        "Provider",
        "Amount",
        "Due",
        "Status",
        "Auto-pay",
        name_width = name_width,
        provider_width = provider_width,
    ));

    // Separator line
    output.push_str(&format!(
        "  {:-<name_width$}  {:-<provider_width$}  {:->10}  {:-<10}  {:-<12}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        provider_width = provider_width,
    ));

    // Bill rows
    for bill in bills {
        output.push_str(&format!(
            "{} {:<name_width$}  {:<provider_width$}  {:>10}  {:<10}  {:<12}  {}\n",
            bill.status.symbol(),
            bill.name,
            bill.provider,
            bill.amount.to_string(),
            bill.due_date.format("%Y-%m-%d"),
            bill.status.label(),
            if bill.autopay { "on" } else { "off" },
            name_width = name_width,
            provider_width = provider_width,
        ));
    }

    // Total row
    let total: Money = bills.iter().map(|b| b.amount).sum();
    output.push_str(&format!(
        "  {:-<name_width$}  {:-<provider_width$}  {:->10}\n",
        "",
        "",
        "",
        name_width = name_width,
        provider_width = provider_width,
    ));
    output.push_str(&format!(
        "  {:<name_width$}  {:<provider_width$}  {:>10}\n",
        "TOTAL",
        "",
        total.to_string(),
        name_width = name_width,
        provider_width = provider_width,
    ));

    output
}

/// Format a single bill's details
pub fn format_bill_details(bill: &Bill, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Bill: {}\n", bill.name));
    output.push_str(&format!("  ID:        {}\n", bill.id));
    output.push_str(&format!("  Amount:    {}\n", bill.amount));
    output.push_str(&format!(
        "  Due Date:  {}\n",
        bill.due_date.format(date_format)
    ));
    output.push_str(&format!(
        "  Status:    {} {}\n",
        bill.status.symbol(),
        bill.status.label()
    ));
    output.push_str(&format!("  Category:  {}\n", bill.category));
    output.push_str(&format!("  Provider:  {}\n", bill.provider));
    output.push_str(&format!(
        "  Auto-pay:  {}\n",
        if bill.autopay { "on" } else { "off" }
    ));

    output
}
