//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation: one document for the expense ledger and one for budgets.

pub mod budgets;
pub mod file_io;
pub mod ledger;

pub use budgets::BudgetBook;
pub use file_io::json_file_valid;
pub use ledger::{ExpenseLedger, LoadOutcome};

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerError;
use crate::events::{EventJournal, FanoutSink, LogSink};

/// Main storage coordinator that owns the ledger and the budget book
pub struct Storage {
    paths: TrackerPaths,
    pub ledger: ExpenseLedger,
    pub budgets: BudgetBook,
}

impl Storage {
    /// Open storage under the given paths
    ///
    /// Events go to the `log` facade, and also to the event journal when
    /// the settings enable it. Both documents are loaded straight away; a
    /// corrupt ledger or budget file is reported and does not make this fail.
    pub fn open(paths: TrackerPaths, settings: &Settings) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        let ledger = ExpenseLedger::open(paths.expenses_file(), event_sink(&paths, settings));
        let budgets = BudgetBook::open(paths.budgets_file(), event_sink(&paths, settings));

        Ok(Self {
            paths,
            ledger,
            budgets,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }
}

fn event_sink(paths: &TrackerPaths, settings: &Settings) -> FanoutSink {
    let sink = FanoutSink::new().with(LogSink);
    if settings.event_log_enabled {
        sink.with(EventJournal::new(paths.event_log()))
    } else {
        sink
    }
}
