//! Ledger event reporting
//!
//! The ledger and budget book report what they do through an injected
//! [`EventSink`] instead of a process-wide logger.
//!
//! # Architecture
//!
//! - `LedgerEvent`: one load, save, append or budget change.
//! - `LogSink`: forwards events to the `log` facade.
//! - `MemorySink`: collects events for inspection.
//! - `EventJournal`: appends events to a line-delimited JSON file.
//! - `FanoutSink`: sends each event to several sinks.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::events::{FanoutSink, LogSink, EventJournal};
//!
//! let sink = FanoutSink::new()
//!     .with(LogSink)
//!     .with(EventJournal::new(paths.event_log()));
//! let ledger = ExpenseLedger::open(paths.expenses_file(), sink);
//! ```

mod event;
mod journal;
mod sink;

pub use event::{EventRecord, LedgerEvent, LoadFailure};
pub use journal::EventJournal;
pub use sink::{EventSink, FanoutSink, LogSink, MemorySink};
