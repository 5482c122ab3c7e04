//! Budget service
//!
//! Sets and clears per-user spending ceilings. Unlike the ledger, which
//! accepts any amount, ceilings are validated before they are stored.

use crate::error::{TrackerError, TrackerResult};
use crate::models::Budget;
use crate::storage::BudgetBook;

/// Service for budget management
pub struct BudgetService<'a> {
    book: &'a mut BudgetBook,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(book: &'a mut BudgetBook) -> Self {
        Self { book }
    }

    /// Set a user's ceiling and persist it
    pub fn set(&mut self, user_id: i64, limit: f64) -> TrackerResult<Budget> {
        let budget = Budget::new(user_id, limit);
        budget
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.book.set(budget.clone());
        self.book.save()?;

        Ok(budget)
    }

    /// Get a user's ceiling
    pub fn get(&self, user_id: i64) -> Option<Budget> {
        self.book.get(user_id).cloned()
    }

    /// Remove a user's ceiling and persist the change
    ///
    /// Returns whether a ceiling existed.
    pub fn clear(&mut self, user_id: i64) -> TrackerResult<bool> {
        let removed = self.book.clear(user_id).is_some();
        if removed {
            self.book.save()?;
        }
        Ok(removed)
    }
}
