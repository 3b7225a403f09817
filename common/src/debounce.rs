//! Debounced commit of typed search queries.
//!
//! The debouncer is a timing policy without a timer of its own: every
//! keystroke is [`QueryDebouncer::push`]ed and yields a ticket, the driver
//! waits [`QueryDebouncer::delay`] and then tries to [`QueryDebouncer::commit`]
//! that ticket. Only the newest ticket of a burst commits, and only once.

use std::time::Duration;

use crate::search_const::DEBOUNCE_MILLIS;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryDebouncer {
    delay: Duration,
    generation: u64,
    pending: Option<String>,
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::with_delay(Duration::from_millis(DEBOUNCE_MILLIS))
    }
}

impl QueryDebouncer {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay, generation: 0, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records a keystroke, superseding any ticket handed out before.
    pub fn push(&mut self, raw: &str) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(raw.trim().to_string());
        DebounceTicket { generation: self.generation }
    }

    /// Returns the trimmed value if `ticket` is still the newest one.
    pub fn commit(&mut self, ticket: DebounceTicket) -> Option<String> {
        if ticket.generation != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drops the pending value; outstanding tickets will never commit.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}
