//! Expense ledger backed by a single JSON document
//!
//! The whole ledger lives in memory as an ordered list and is mirrored to
//! `expenses.json` as a pretty-printed array. Records are only ever
//! appended, and every append rewrites the full document. That rewrite is
//! O(n) in the total number of expenses across all users, which is fine at
//! household scale and nowhere else.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use serde::de::DeserializeOwned;

use crate::error::{TrackerError, TrackerResult};
use crate::events::{EventSink, LedgerEvent, LoadFailure};
use crate::models::Expense;

use super::file_io::{read_json_optional, write_json_atomic};

/// Result of reading a JSON document at startup
///
/// Every variant other than `Loaded` leaves the owner empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The document was read; holds the number of records
    Loaded(usize),
    /// No document exists yet
    NotFound,
    /// The document exists but does not have the expected shape
    ParseError(String),
    /// The document exists but could not be read
    ReadError(String),
}

impl LoadOutcome {
    /// Whether an existing document had to be discarded
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::ReadError(_))
    }
}

/// Read a document without failing
///
/// Reports what happened to `events` and returns the parsed value only when
/// the document existed and was valid. `count` sizes the `Loaded` event.
pub(super) fn read_document<T, F>(
    path: &Path,
    events: &dyn EventSink,
    count: F,
) -> (Option<T>, LoadOutcome)
where
    T: DeserializeOwned,
    F: Fn(&T) -> usize,
{
    let shown = path.display().to_string();

    match read_json_optional::<T, _>(path) {
        Ok(Some(value)) => {
            let count = count(&value);
            events.record(&LedgerEvent::Loaded { path: shown, count });
            (Some(value), LoadOutcome::Loaded(count))
        }
        Ok(None) => {
            events.record(&LedgerEvent::StoreMissing { path: shown });
            (None, LoadOutcome::NotFound)
        }
        Err(err) => {
            let reason = err.to_string();
            let (failure, outcome) = match err {
                TrackerError::Json(_) => {
                    (LoadFailure::Parse, LoadOutcome::ParseError(reason.clone()))
                }
                _ => (LoadFailure::Read, LoadOutcome::ReadError(reason.clone())),
            };
            events.record(&LedgerEvent::LoadFailed {
                path: shown,
                failure,
                reason,
            });
            (None, outcome)
        }
    }
}

/// Append-only store of all expenses across all users
pub struct ExpenseLedger {
    path: PathBuf,
    expenses: Vec<Expense>,
    events: Box<dyn EventSink>,
    last_load: Option<LoadOutcome>,
}

impl ExpenseLedger {
    /// Create an empty ledger bound to a document, without reading it
    pub fn new(path: impl Into<PathBuf>, events: impl EventSink + 'static) -> Self {
        Self {
            path: path.into(),
            expenses: Vec::new(),
            events: Box::new(events),
            last_load: None,
        }
    }

    /// Create a ledger and immediately load its document
    pub fn open(path: impl Into<PathBuf>, events: impl EventSink + 'static) -> Self {
        let mut ledger = Self::new(path, events);
        ledger.load();
        ledger
    }

    /// Replace the in-memory list with the document's contents
    ///
    /// Never fails: a missing, unreadable or malformed document leaves the
    /// ledger empty. The outcome says which case happened. A corrupt
    /// document is not repaired or backed up and will be overwritten by the
    /// next save.
    pub fn load(&mut self) -> LoadOutcome {
        let (expenses, outcome) =
            read_document::<Vec<Expense>, _>(&self.path, self.events.as_ref(), Vec::len);
        self.expenses = expenses.unwrap_or_default();
        self.last_load = Some(outcome.clone());
        outcome
    }

    /// Overwrite the document with the full in-memory list
    ///
    /// Failures are reported to the event sink as well as returned.
    pub fn save(&self) -> TrackerResult<()> {
        let path = self.path.display().to_string();

        match write_json_atomic(&self.path, &self.expenses) {
            Ok(()) => {
                self.events.record(&LedgerEvent::Saved {
                    path,
                    count: self.expenses.len(),
                });
                Ok(())
            }
            Err(err) => {
                self.events.record(&LedgerEvent::SaveFailed {
                    path,
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Record a new expense stamped with the current local time
    ///
    /// The expense is kept in memory even if saving fails; the failure only
    /// reaches the event sink. Callers must not assume it was persisted.
    pub fn add(
        &mut self,
        user_id: i64,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Expense {
        self.add_at(user_id, amount, category, description, Local::now())
    }

    /// Record a new expense stamped with an explicit instant
    pub fn add_at<Tz: TimeZone>(
        &mut self,
        user_id: i64,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        at: DateTime<Tz>,
    ) -> Expense {
        let id = self.expenses.len() as u64 + 1;
        let expense = Expense::recorded_at(id, user_id, amount, category, description, at);

        self.expenses.push(expense.clone());
        // Already reported to the sink; the append stands either way.
        let _ = self.save();

        self.events.record(&LedgerEvent::ExpenseAdded {
            id: expense.id,
            user_id: expense.user_id,
            amount: expense.amount,
            category: expense.category.clone(),
        });

        expense
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses across all users
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the ledger has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Outcome of the most recent load, if one happened
    pub fn last_load(&self) -> Option<&LoadOutcome> {
        self.last_load.as_ref()
    }
}
