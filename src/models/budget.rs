//! Per-user spending ceiling
//!
//! Budgets are stored next to the ledger but are never consulted by it or by
//! the summary queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's spending ceiling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Chat user the ceiling belongs to
    pub user_id: i64,

    /// Ceiling amount
    pub limit: f64,

    /// When the ceiling was last set
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a budget stamped with the current time
    pub fn new(user_id: i64, limit: f64) -> Self {
        Self {
            user_id,
            limit,
            updated_at: Utc::now(),
        }
    }

    /// Validate the ceiling
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.limit.is_finite() {
            return Err(BudgetValidationError::NotFinite);
        }
        if self.limit <= 0.0 {
            return Err(BudgetValidationError::NotPositive(self.limit));
        }
        Ok(())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetValidationError {
    NotFinite,
    NotPositive(f64),
}

impl std::fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite => write!(f, "Budget must be a finite number"),
            Self::NotPositive(limit) => write!(f, "Budget must be positive, got {}", limit),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_budget() {
        assert!(Budget::new(1, 500.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            Budget::new(1, 0.0).validate(),
            Err(BudgetValidationError::NotPositive(0.0))
        );
        assert!(Budget::new(1, -10.0).validate().is_err());
    }

    #[test]
    fn test_rejects_nan() {
        assert_eq!(
            Budget::new(1, f64::NAN).validate(),
            Err(BudgetValidationError::NotFinite)
        );
    }
}
