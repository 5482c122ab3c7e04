//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add, handle_categories, handle_history, handle_summary};
