//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: logged
//! expenses, spending summaries, category suggestions and budgets.

pub mod budget;
pub mod category;
pub mod expense;
pub mod summary;

pub use budget::{Budget, BudgetValidationError};
pub use category::{is_suggested, SUGGESTED_CATEGORIES};
pub use expense::Expense;
pub use summary::Summary;
