//! Summary service
//!
//! Read-only queries over the ledger's current contents: per-user filtering,
//! rolling time windows and per-category totals.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone};

use crate::models::{Expense, Summary};
use crate::storage::ExpenseLedger;

/// Window used by summaries when the caller gives none
pub const DEFAULT_SUMMARY_DAYS: i64 = 30;

/// Which records a rolling window admits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Window {
    /// Every record
    Unbounded,
    /// Records strictly after the cutoff
    After(NaiveDateTime),
    /// Nothing
    Empty,
}

impl Window {
    /// A window of `days` ending at `now`
    ///
    /// No window and a zero-day window both admit everything. A negative
    /// window puts the cutoff in the future.
    fn ending_at(now: NaiveDateTime, days: Option<i64>) -> Self {
        match days {
            None | Some(0) => Window::Unbounded,
            Some(days) => {
                let cutoff = Duration::try_days(days).and_then(|span| now.checked_sub_signed(span));
                match cutoff {
                    Some(cutoff) => Window::After(cutoff),
                    None if days > 0 => Window::Unbounded,
                    None => Window::Empty,
                }
            }
        }
    }

    fn admits(&self, expense: &Expense) -> bool {
        match self {
            Window::Unbounded => true,
            Window::After(cutoff) => expense.date > *cutoff,
            Window::Empty => false,
        }
    }
}

/// Service for spending queries
pub struct SummaryService<'a> {
    ledger: &'a ExpenseLedger,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(ledger: &'a ExpenseLedger) -> Self {
        Self { ledger }
    }

    /// A user's expenses, most recent first
    ///
    /// With `days`, only expenses dated strictly after `now - days` are
    /// returned; one dated exactly at that instant is excluded.
    pub fn get_user_expenses(&self, user_id: i64, days: Option<i64>) -> Vec<Expense> {
        self.get_user_expenses_at(user_id, days, Local::now())
    }

    /// Same as [`get_user_expenses`](Self::get_user_expenses) with an explicit `now`
    pub fn get_user_expenses_at<Tz: TimeZone>(
        &self,
        user_id: i64,
        days: Option<i64>,
        now: DateTime<Tz>,
    ) -> Vec<Expense> {
        let window = Window::ending_at(now.with_timezone(&Local).naive_local(), days);

        let mut expenses: Vec<Expense> = self
            .ledger
            .expenses()
            .iter()
            .filter(|e| e.user_id == user_id && window.admits(e))
            .cloned()
            .collect();

        // Stable: equal timestamps keep insertion order.
        expenses.sort_by(|a, b| b.timestamp.total_cmp(&a.timestamp));
        expenses
    }

    /// The `limit` most recent expenses of a user within an optional window
    pub fn recent(&self, user_id: i64, days: Option<i64>, limit: usize) -> Vec<Expense> {
        let mut expenses = self.get_user_expenses(user_id, days);
        expenses.truncate(limit);
        expenses
    }

    /// Spending summary for a user over the last `days` days
    pub fn get_summary(&self, user_id: i64, days: i64) -> Summary {
        self.get_summary_at(user_id, days, Local::now())
    }

    /// Same as [`get_summary`](Self::get_summary) with an explicit `now`
    pub fn get_summary_at<Tz: TimeZone>(
        &self,
        user_id: i64,
        days: i64,
        now: DateTime<Tz>,
    ) -> Summary {
        let expenses = self.get_user_expenses_at(user_id, Some(days), now);

        if expenses.is_empty() {
            return Summary::empty(days);
        }

        let total: f64 = expenses.iter().map(|e| e.amount).sum();

        let mut by_category: HashMap<String, f64> = HashMap::new();
        for expense in &expenses {
            *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }

        let average_per_day = if days > 0 { total / days as f64 } else { 0.0 };

        Summary {
            total,
            count: expenses.len(),
            by_category,
            days,
            average_per_day,
        }
    }
}
