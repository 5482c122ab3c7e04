//! Ledger event data structures
//!
//! Defines what the ledger reports to its event sink, and the timestamped
//! record written to the event journal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a load produced an empty ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFailure {
    /// The document exists but could not be read
    Read,
    /// The document could not be parsed as an expense list
    Parse,
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadFailure::Read => write!(f, "read"),
            LoadFailure::Parse => write!(f, "parse"),
        }
    }
}

/// Something that happened to the ledger or budget book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// Records were read from a document
    Loaded { path: String, count: usize },
    /// No document existed; starting empty
    StoreMissing { path: String },
    /// The document was unusable; starting empty
    LoadFailed {
        path: String,
        failure: LoadFailure,
        reason: String,
    },
    /// A full document was written
    Saved { path: String, count: usize },
    /// Writing a document failed; memory is ahead of disk
    SaveFailed { path: String, reason: String },
    /// A new expense was appended
    ExpenseAdded {
        id: u64,
        user_id: i64,
        amount: f64,
        category: String,
    },
    /// A user's budget ceiling was set
    BudgetSet { user_id: i64, limit: f64 },
    /// A user's budget ceiling was removed
    BudgetCleared { user_id: i64 },
}

impl LedgerEvent {
    /// Log level this event is reported at
    pub fn level(&self) -> log::Level {
        match self {
            LedgerEvent::LoadFailed { .. } | LedgerEvent::SaveFailed { .. } => log::Level::Error,
            LedgerEvent::StoreMissing { .. } => log::Level::Warn,
            _ => log::Level::Info,
        }
    }

    /// Whether the event reports a storage failure
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            LedgerEvent::LoadFailed { .. } | LedgerEvent::SaveFailed { .. }
        )
    }
}

impl std::fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerEvent::Loaded { path, count } => {
                write!(f, "Loaded {} records from {}", count, path)
            }
            LedgerEvent::StoreMissing { path } => {
                write!(f, "No file at {}, starting empty", path)
            }
            LedgerEvent::LoadFailed {
                path,
                failure,
                reason,
            } => write!(f, "Error loading {} ({}): {}", path, failure, reason),
            LedgerEvent::Saved { path, count } => {
                write!(f, "Saved {} records to {}", count, path)
            }
            LedgerEvent::SaveFailed { path, reason } => {
                write!(f, "Error saving {}: {}", path, reason)
            }
            LedgerEvent::ExpenseAdded {
                id,
                user_id,
                amount,
                category,
            } => write!(
                f,
                "Added expense #{}: {} in {} for user {}",
                id, amount, category, user_id
            ),
            LedgerEvent::BudgetSet { user_id, limit } => {
                write!(f, "Budget for user {} set to {}", user_id, limit)
            }
            LedgerEvent::BudgetCleared { user_id } => {
                write!(f, "Budget for user {} cleared", user_id)
            }
        }
    }
}

/// A journaled event with the time it was recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// When the event was recorded (UTC)
    pub recorded_at: DateTime<Utc>,

    /// The event itself
    #[serde(flatten)]
    pub event: LedgerEvent,
}

impl EventRecord {
    /// Stamp an event with the current time
    pub fn now(event: LedgerEvent) -> Self {
        Self {
            recorded_at: Utc::now(),
            event,
        }
    }

    /// Format the record for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {:<5} {}",
            self.recorded_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event.level(),
            self.event
        )
    }
}
