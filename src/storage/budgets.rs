//! Budget book for JSON storage
//!
//! Manages loading and saving per-user spending ceilings to budgets.json.
//! The ledger and summary queries never read from here.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::TrackerResult;
use crate::events::{EventSink, LedgerEvent};
use crate::models::Budget;

use super::file_io::write_json_atomic;
use super::ledger::{read_document, LoadOutcome};

/// Serializable budget data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: Vec<Budget>,
}

/// Per-user spending ceilings
pub struct BudgetBook {
    path: PathBuf,
    budgets: BTreeMap<i64, Budget>,
    events: Box<dyn EventSink>,
    last_load: Option<LoadOutcome>,
}

impl BudgetBook {
    /// Create an empty budget book bound to a file
    pub fn new(path: impl Into<PathBuf>, events: impl EventSink + 'static) -> Self {
        Self {
            path: path.into(),
            budgets: BTreeMap::new(),
            events: Box::new(events),
            last_load: None,
        }
    }

    /// Create a budget book and immediately load its file
    pub fn open(path: impl Into<PathBuf>, events: impl EventSink + 'static) -> Self {
        let mut book = Self::new(path, events);
        book.load();
        book
    }

    /// Load budgets from disk
    ///
    /// A missing or damaged file leaves the book empty and is only
    /// reported, so it never blocks the ledger.
    pub fn load(&mut self) -> LoadOutcome {
        let (file_data, outcome) = read_document::<BudgetData, _>(
            &self.path,
            self.events.as_ref(),
            |data| data.budgets.len(),
        );

        self.budgets = file_data
            .unwrap_or_default()
            .budgets
            .into_iter()
            .map(|b| (b.user_id, b))
            .collect();
        self.last_load = Some(outcome.clone());

        outcome
    }

    /// Save budgets to disk
    pub fn save(&self) -> TrackerResult<()> {
        let file_data = BudgetData {
            budgets: self.budgets.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a user's budget
    pub fn get(&self, user_id: i64) -> Option<&Budget> {
        self.budgets.get(&user_id)
    }

    /// Insert or replace a user's budget
    pub fn set(&mut self, budget: Budget) {
        self.events.record(&LedgerEvent::BudgetSet {
            user_id: budget.user_id,
            limit: budget.limit,
        });
        self.budgets.insert(budget.user_id, budget);
    }

    /// Remove a user's budget, returning it if there was one
    pub fn clear(&mut self, user_id: i64) -> Option<Budget> {
        let removed = self.budgets.remove(&user_id);
        if removed.is_some() {
            self.events.record(&LedgerEvent::BudgetCleared { user_id });
        }
        removed
    }

    /// Number of users with a budget
    pub fn count(&self) -> usize {
        self.budgets.len()
    }

    /// Outcome of the most recent load, if one happened
    pub fn last_load(&self) -> Option<&LoadOutcome> {
        self.last_load.as_ref()
    }
}
