//! Structured event sinks handed to the board and the service.
//!
//! Components never reach for a global logger; they receive an
//! [`EventSink`] at construction. [`LogSink`] forwards to the `log` facade,
//! [`MemorySink`] keeps events around for assertions.

use std::sync::{Arc, Mutex, PoisonError};

use log::Level;

/// Receiver of informational and warning events.
pub trait EventSink: Send + Sync {
    fn info(&self, component: &'static str, message: &str);
    fn warn(&self, component: &'static str, message: &str);
}

/// Shared handle to an event sink.
pub type Events = Arc<dyn EventSink>;

/// Forwards events to the `log` facade, using the component as target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    pub fn shared() -> Events {
        Arc::new(LogSink)
    }
}

impl EventSink for LogSink {
    fn info(&self, component: &'static str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    fn warn(&self, component: &'static str, message: &str) {
        log::warn!(target: component, "{}", message);
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NullSink {
    pub fn shared() -> Events {
        Arc::new(NullSink)
    }
}

impl EventSink for NullSink {
    fn info(&self, _component: &'static str, _message: &str) {}
    fn warn(&self, _component: &'static str, _message: &str) {}
}

/// A recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub level: Level,
    pub component: &'static str,
    pub message: String,
}

/// Records events in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// Number of events at `level` whose message contains `needle`.
    pub fn count(&self, level: Level, needle: &str) -> usize {
        self.lock()
            .iter()
            .filter(|e| e.level == level && e.message.contains(needle))
            .count()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn record(&self, level: Level, component: &'static str, message: &str) {
        self.lock().push(Event {
            level,
            component,
            message: message.to_string(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for MemorySink {
    fn info(&self, component: &'static str, message: &str) {
        self.record(Level::Info, component, message);
    }

    fn warn(&self, component: &'static str, message: &str) {
        self.record(Level::Warn, component, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_levels() {
        let sink = MemorySink::new();
        sink.info("board", "Ship added");
        sink.warn("service", "Board not found");
        sink.warn("service", "Board not found again");

        assert_eq!(sink.events().len(), 3);
        assert_eq!(sink.count(Level::Info, "Ship"), 1);
        assert_eq!(sink.count(Level::Warn, "not found"), 2);
        assert_eq!(sink.events()[1].component, "service");

        sink.clear();
        assert!(sink.events().is_empty());
    }
}
