//! Append-only event journal
//!
//! Each ledger event is written as a single JSON line and flushed
//! immediately, so the journal survives crashes between writes.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::event::{EventRecord, LedgerEvent};
use super::sink::EventSink;

/// Writes ledger events to a JSONL file
pub struct EventJournal {
    log_path: PathBuf,
}

impl EventJournal {
    /// Create a journal that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one record
    pub fn append(&self, record: &EventRecord) -> TrackerResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open event log: {}", e)))?;

        let json = serde_json::to_string(record)
            .map_err(|e| TrackerError::Json(format!("Failed to serialize event: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| TrackerError::Io(format!("Failed to write event: {}", e)))?;

        file.flush()
            .map_err(|e| TrackerError::Io(format!("Failed to flush event log: {}", e)))?;

        Ok(())
    }

    /// Read all records, oldest first
    pub fn read_all(&self) -> TrackerResult<Vec<EventRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Failed to open event log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                TrackerError::Io(format!("Failed to read event log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let record: EventRecord = serde_json::from_str(&line).map_err(|e| {
                TrackerError::Json(format!(
                    "Failed to parse event at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            records.push(record);
        }

        Ok(records)
    }

}

impl EventSink for EventJournal {
    fn record(&self, event: &LedgerEvent) {
        if let Err(e) = self.append(&EventRecord::now(event.clone())) {
            log::error!("Event journal {} unavailable: {}", self.log_path.display(), e);
        }
    }
}
