//! Display formatting for chat replies and terminal output

pub mod expense;
pub mod summary;

pub use expense::{format_expense, format_history};
pub use summary::{format_budget, format_summary};
