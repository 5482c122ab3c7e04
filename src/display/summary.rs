//! Summary display formatting

use crate::models::{Budget, Summary};

/// Format a spending summary
///
/// Categories are listed largest first with their share of the total.
pub fn format_summary(summary: &Summary, currency: &str) -> String {
    if summary.is_empty() {
        return "No expenses recorded in this period.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("📊 Summary for last {} days:\n\n", summary.days));
    output.push_str(&format!("Total: {}{:.2}\n", currency, summary.total));
    output.push_str(&format!("Transactions: {}\n", summary.count));
    output.push_str(&format!(
        "Daily average: {}{:.2}\n\n",
        currency, summary.average_per_day
    ));
    output.push_str("By category:\n");

    for (category, amount) in summary.categories_by_amount() {
        output.push_str(&format!(
            "  • {}: {}{:.2} ({:.1}%)\n",
            category,
            currency,
            amount,
            summary.share_of(category)
        ));
    }

    output
}

/// Format a user's budget ceiling
pub fn format_budget(budget: Option<&Budget>, currency: &str) -> String {
    match budget {
        Some(budget) => format!("Budget: {}{:.2}", currency, budget.limit),
        None => "No budget set.".to_string(),
    }
}
