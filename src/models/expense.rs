//! Expense model
//!
//! A single logged expense. The `date` and `timestamp` fields describe the
//! same instant and are always derived from one captured clock reading.

use chrono::{DateTime, Local, NaiveDateTime, SubsecRound, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Position-based identifier (`records before insert + 1`)
    pub id: u64,

    /// Chat user who submitted the expense
    pub user_id: i64,

    /// Amount spent; not validated
    pub amount: f64,

    /// Free-form category name
    pub category: String,

    /// Optional free-form description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Local wall-clock time of insertion, ISO-8601
    pub date: NaiveDateTime,

    /// Seconds since the Unix epoch for the same instant as `date`
    pub timestamp: f64,
}

impl Expense {
    /// Create an expense stamped with the current local time
    pub fn new(
        id: u64,
        user_id: i64,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::recorded_at(id, user_id, amount, category, description, Local::now())
    }

    /// Create an expense stamped with an explicit instant
    pub fn recorded_at<Tz: TimeZone>(
        id: u64,
        user_id: i64,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        at: DateTime<Tz>,
    ) -> Self {
        // Microsecond precision so `date` round-trips exactly through JSON
        // and agrees with `timestamp`.
        let at = at.with_timezone(&Local).trunc_subsecs(6);
        Self {
            id,
            user_id,
            amount,
            category: category.into(),
            description: description.into(),
            date: at.naive_local(),
            timestamp: epoch_seconds(&at),
        }
    }

    /// Whether a description was supplied
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {:.2} {}", self.id, self.amount, self.category)?;
        if self.has_description() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

fn epoch_seconds<Tz: TimeZone>(at: &DateTime<Tz>) -> f64 {
    at.timestamp() as f64 + f64::from(at.timestamp_subsec_micros()) / 1_000_000.0
}
