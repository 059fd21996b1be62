//! # Load Guards
//!
//! A screen that reloads (the user switches course, say) may still have the
//! previous load in flight. Requests are not cancelled; instead every load
//! takes a [`LoadTicket`] and its result is applied only while the ticket is
//! still current.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generation counter shared by one screen's loads.
#[derive(Debug, Clone, Default)]
pub struct LoadGuard {
    generation: Arc<AtomicU64>,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding every earlier ticket.
    pub fn begin(&self) -> LoadTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            generation,
            guard: Arc::clone(&self.generation),
        }
    }

    /// Supersede outstanding loads without starting a new one (screen closed).
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Handle held by one in-flight load.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    guard: Arc<AtomicU64>,
}

impl LoadTicket {
    pub fn is_current(&self) -> bool {
        self.guard.load(Ordering::SeqCst) == self.generation
    }

    /// `Some(value)` while current, otherwise the value is dropped.
    pub fn apply<T>(&self, value: T) -> Option<T> {
        if self.is_current() {
            Some(value)
        } else {
            tracing::debug!(generation = self.generation, "Discarding superseded load");
            None
        }
    }
}
