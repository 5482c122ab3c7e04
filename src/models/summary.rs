//! Spending summary model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated spending over a rolling window
///
/// `average_per_day` is always present: `total / days` when `days > 0`,
/// otherwise `0.0`. An empty summary has `total == 0.0`, `count == 0`
/// and no categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of all amounts in the window
    pub total: f64,

    /// Number of expenses in the window
    pub count: usize,

    /// Sum of amounts per category; unordered
    pub by_category: HashMap<String, f64>,

    /// Window length in days
    pub days: i64,

    /// Daily average over the window
    pub average_per_day: f64,
}

impl Summary {
    /// A summary with no expenses
    pub fn empty(days: i64) -> Self {
        Self {
            total: 0.0,
            count: 0,
            by_category: HashMap::new(),
            days,
            average_per_day: 0.0,
        }
    }

    /// Whether the window contained no expenses
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Categories sorted by amount, largest first
    pub fn categories_by_amount(&self) -> Vec<(&str, f64)> {
        let mut categories: Vec<_> = self
            .by_category
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        categories.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        categories
    }

    /// Percentage of the total spent in a category
    pub fn share_of(&self, category: &str) -> f64 {
        match self.by_category.get(category) {
            Some(amount) if self.total != 0.0 => amount / self.total * 100.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Summary {
        let mut by_category = HashMap::new();
        by_category.insert("Food".to_string(), 15.5);
        by_category.insert("Transport".to_string(), 20.0);
        Summary {
            total: 35.5,
            count: 3,
            by_category,
            days: 30,
            average_per_day: 35.5 / 30.0,
        }
    }

    #[test]
    fn test_empty() {
        let summary = Summary::empty(7);
        assert!(summary.is_empty());
        assert_eq!(summary.days, 7);
        assert_eq!(summary.average_per_day, 0.0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_categories_by_amount() {
        let summary = sample();
        let ordered = summary.categories_by_amount();
        assert_eq!(ordered[0].0, "Transport");
        assert_eq!(ordered[1].0, "Food");
    }

    #[test]
    fn test_share_of() {
        let summary = sample();
        assert!((summary.share_of("Transport") - 56.338).abs() < 0.001);
        assert_eq!(summary.share_of("Bills"), 0.0);
        assert_eq!(Summary::empty(30).share_of("Food"), 0.0);
    }
}
