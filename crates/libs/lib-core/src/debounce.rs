//! # Debouncing
//!
//! Suggestions are requested only after typing pauses. Each keystroke takes a ticket from
//! the [`Debouncer`]; a ticket stays current until the next keystroke. The UI waits out the
//! delay, queries only with a current ticket, and drops results whose ticket went stale
//! while the request was in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::delay::Delay;

#[derive(Debug, Clone)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
    delay: Duration,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            delay,
        }
    }

    /// Start a new burst position, invalidating every earlier ticket.
    pub fn schedule(&self) -> DebounceTicket {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        DebounceTicket {
            id,
            generation: Arc::clone(&self.generation),
        }
    }

    /// Invalidate outstanding tickets without issuing a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Wait out the quiet period; `true` if no newer keystroke arrived meanwhile.
    pub async fn settle<D: Delay>(&self, ticket: &DebounceTicket, delay: &D) -> bool {
        delay.sleep(self.delay).await;
        ticket.is_current()
    }
}

#[derive(Debug, Clone)]
pub struct DebounceTicket {
    id: u64,
    generation: Arc<AtomicU64>,
}

impl DebounceTicket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }
}
