//! Expense Tracker - chat-driven personal expense ledger
//!
//! This library records expenses submitted by chat users, keeps them in a
//! single JSON document and produces rolling spending summaries grouped by
//! category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and bot credentials
//! - `error`: Custom error types
//! - `models`: Expenses, summaries, categories and budgets
//! - `storage`: Append-only JSON ledger and budget book
//! - `services`: Summary queries and budget management
//! - `events`: Injected event sinks for ledger activity
//! - `display`: Text formatting for replies and terminal output
//! - `bot`: Chat command parsing and dispatch
//! - `cli`: Terminal command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::events::LogSink;
//! use expense_tracker::services::SummaryService;
//! use expense_tracker::storage::ExpenseLedger;
//!
//! let mut ledger = ExpenseLedger::open("expenses.json", LogSink);
//! ledger.add(1, 10.0, "Food", "lunch");
//! let summary = SummaryService::new(&ledger).get_summary(1, 30);
//! ```

pub mod bot;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
