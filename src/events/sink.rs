//! Event sinks
//!
//! The ledger never talks to the global logger directly. It is handed an
//! [`EventSink`] and reports every load, save and append to it.

use std::sync::{Arc, Mutex};

use super::event::LedgerEvent;

/// Receives ledger events
pub trait EventSink {
    /// Record a single event. Sinks must not fail the caller.
    fn record(&self, event: &LedgerEvent);
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &LedgerEvent) {
        log::log!(target: "expense_tracker::ledger", event.level(), "{}", event);
    }
}

/// Keeps events in memory
///
/// Clones share the same buffer, so a test can hand one clone to the ledger
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<LedgerEvent>>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<LedgerEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any recorded event reports a failure
    pub fn has_failures(&self) -> bool {
        self.events().iter().any(LedgerEvent::is_failure)
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &LedgerEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

/// Sends each event to several sinks in order
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl FanoutSink {
    /// Create a fanout with no targets
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target sink
    pub fn with(mut self, sink: impl EventSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Number of target sinks
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether there are no target sinks
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl EventSink for FanoutSink {
    fn record(&self, event: &LedgerEvent) {
        for sink in &self.sinks {
            sink.record(event);
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn record(&self, event: &LedgerEvent) {
        (**self).record(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(id: u64) -> LedgerEvent {
        LedgerEvent::ExpenseAdded {
            id,
            user_id: 1,
            amount: 1.0,
            category: "Food".into(),
        }
    }

    #[test]
    fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        sink.record(&added(1));
        sink.record(&added(2));

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.events()[1], added(2));
        assert!(!handle.has_failures());
    }

    #[test]
    fn test_has_failures() {
        let sink = MemorySink::new();
        sink.record(&LedgerEvent::SaveFailed {
            path: "x".into(),
            reason: "denied".into(),
        });
        assert!(sink.has_failures());
    }

    #[test]
    fn test_fanout_reaches_every_sink() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let fanout = FanoutSink::new()
            .with(first.clone())
            .with(second.clone())
            .with(LogSink);

        fanout.record(&added(1));

        assert_eq!(fanout.len(), 3);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_log_sink_does_not_panic_without_logger() {
        LogSink.record(&added(1));
    }
}
