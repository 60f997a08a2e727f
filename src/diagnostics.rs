//! Parse diagnostics as an injected strategy
//!
//! The parser reports what it is doing through a [`ParseObserver`] passed
//! in by the caller, not through process-global debug flags. Callers that
//! want no diagnostics pass nothing; tests attach an [`EventLog`] and
//! assert on the recorded events.

/// A diagnostic event emitted while scanning FASTA input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    /// A header line opened a new record
    RecordStarted {
        /// Identifier taken from the header
        id: String,
    },
    /// A data line was appended to the open record
    DataLine {
        /// Length of the appended line after trimming
        bytes: usize,
    },
    /// An open record was finalized and yielded
    RecordFinalized {
        /// Record identifier
        id: String,
        /// Final sequence length
        length: usize,
    },
    /// A data line appeared before any header and was dropped
    OrphanLine {
        /// 1-based line number in the input
        line: usize,
    },
}

/// Receives parse events in scan order
///
/// Implementations must not assume events balance: input that ends without
/// a header produces `OrphanLine` events and nothing else.
pub trait ParseObserver {
    /// Called once per event
    fn on_event(&mut self, event: ParseEvent);
}

/// Observer that records every event, for tests and tooling
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<ParseEvent>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in scan order
    pub fn events(&self) -> &[ParseEvent] {
        &self.events
    }
}

impl ParseObserver for EventLog {
    fn on_event(&mut self, event: ParseEvent) {
        self.events.push(event);
    }
}
