//! Latest-wins sequencing for dependent fetches.
//!
//! A view that refetches when its page or filter changes must not apply a
//! response that arrives after a newer request was issued. Each fetch takes
//! a [`Ticket`]; only the holder of the newest ticket may apply its result.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handed out by [`RequestSequencer::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Result of [`RequestSequencer::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequenced<T> {
    Current(T),
    /// A newer request started while this one was in flight.
    Superseded,
}

impl<T> Sequenced<T> {
    pub fn into_current(self) -> Option<T> {
        match self {
            Sequenced::Current(value) => Some(value),
            Sequenced::Superseded => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Supersedes all outstanding tickets without starting a request.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }

    /// Runs `fut` under a fresh ticket and reports whether its output is
    /// still the latest once it completes.
    pub async fn run<F, T>(&self, fut: F) -> Sequenced<T>
    where
        F: Future<Output = T>,
    {
        let ticket = self.begin();
        let output = fut.await;
        if self.is_current(ticket) {
            Sequenced::Current(output)
        } else {
            tracing::debug!(ticket = ticket.id(), "dropping superseded response");
            Sequenced::Superseded
        }
    }
}
