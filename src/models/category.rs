//! Expense categories
//!
//! Categories are plain strings. The suggested list below is offered to chat
//! users as a hint only; anything else is stored as given.

/// Categories suggested to users when they log an expense
pub const SUGGESTED_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Healthcare",
    "Other",
];

/// Check whether a category matches one of the suggestions (case-insensitive)
pub fn is_suggested(category: &str) -> bool {
    suggestion_for(category).is_some()
}

/// Find the suggested spelling of a category, if it is one of the suggestions
pub fn suggestion_for(category: &str) -> Option<&'static str> {
    let category = category.trim();
    SUGGESTED_CATEGORIES
        .iter()
        .copied()
        .find(|s| s.eq_ignore_ascii_case(category))
}
