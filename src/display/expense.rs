//! Expense display formatting
//!
//! Formats single expenses and expense histories for chat replies and
//! terminal output.

use crate::models::Expense;

/// Format a single expense as a short multi-line card
pub fn format_expense(expense: &Expense, currency: &str) -> String {
    let description = if expense.has_description() {
        expense.description.as_str()
    } else {
        "No description"
    };

    format!(
        "💰 {}{:.2} - {}\n📝 {}\n📅 {}",
        currency,
        expense.amount,
        expense.category,
        description,
        expense.date.format("%Y-%m-%d %H:%M")
    )
}

fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "{:>4}  {}  {:>10}  {:14} {}",
        expense.id,
        expense.date.format("%Y-%m-%d %H:%M"),
        format!("{}{:.2}", currency, expense.amount),
        truncate(&expense.category, 14),
        expense.description
    )
    .trim_end()
    .to_string()
}

/// Format a list of expenses as a history table
pub fn format_history(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:16}  {:>10}  {:14} {}\n",
        "ID", "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
