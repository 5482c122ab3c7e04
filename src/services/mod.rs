//! Service layer for the expense tracker
//!
//! The service layer provides queries and validated operations on top of
//! the storage layer.

pub mod budget;
pub mod summary;

pub use budget::BudgetService;
pub use summary::{SummaryService, DEFAULT_SUMMARY_DAYS};
