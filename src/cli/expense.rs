//! Expense CLI commands
//!
//! Implements the terminal front end for logging expenses and reading them
//! back: add, history, summary and categories.

use crate::bot::command::parse_amount;
use crate::config::Settings;
use crate::display::{format_expense, format_history, format_summary};
use crate::error::TrackerResult;
use crate::models::{is_suggested, SUGGESTED_CATEGORIES};
use crate::services::SummaryService;
use crate::storage::Storage;

/// Log a new expense and print it
pub fn handle_add(
    storage: &mut Storage,
    settings: &Settings,
    user_id: i64,
    amount: &str,
    category: &str,
    description: &[String],
) -> TrackerResult<()> {
    let amount = parse_amount(amount)?;
    let expense = storage
        .ledger
        .add(user_id, amount, category, description.join(" "));

    println!("Expense added:");
    println!("{}", format_expense(&expense, &settings.currency_symbol));

    if !is_suggested(&expense.category) {
        println!();
        println!(
            "Note: '{}' is not one of the suggested categories.",
            expense.category
        );
    }

    Ok(())
}

/// Print a user's recent expenses
pub fn handle_history(
    storage: &Storage,
    settings: &Settings,
    user_id: i64,
    days: Option<i64>,
    limit: Option<usize>,
) -> TrackerResult<()> {
    let limit = limit.unwrap_or(settings.history_limit);
    let expenses = SummaryService::new(&storage.ledger).recent(user_id, days, limit);

    print!("{}", format_history(&expenses, &settings.currency_symbol));
    Ok(())
}

/// Print a user's spending summary
pub fn handle_summary(
    storage: &Storage,
    settings: &Settings,
    user_id: i64,
    days: Option<i64>,
    json: bool,
) -> TrackerResult<()> {
    let days = days.unwrap_or(settings.default_summary_days);
    let summary = SummaryService::new(&storage.ledger).get_summary(user_id, days);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", format_summary(&summary, &settings.currency_symbol));
    }
    Ok(())
}

/// Print the suggested categories
pub fn handle_categories() {
    println!("Suggested categories:");
    for category in SUGGESTED_CATEGORIES {
        println!("  {}", category);
    }
    println!();
    println!("Any other category name is accepted as well.");
}
