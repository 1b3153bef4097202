//! Handles shared between a running search and its caller.
//!
//! A search reports through a channel instead of callbacks: matches arrive
//! as [`SearchEvent::Hit`] as soon as a worker finds them, and
//! [`SearchEvent::Progress`] once per finished chunk of
//! [`SearchConfig::chunk_size`](super::SearchConfig::chunk_size) candidates.
//! Workers send concurrently and in no particular order. A dropped receiver
//! is ignored.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::RngState;

/// Something a running search wants the caller to know.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// A candidate state reproduced the observed draws.
    Hit(RngState),
    /// `completed` of `total` candidates have been replayed.
    Progress { completed: u64, total: u64 },
}

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchStatus {
    /// Every candidate in range was replayed.
    Completed,
    /// Cancellation stopped the scan early; results are partial.
    Cancelled,
}

/// Cooperative stop flag.
///
/// Clones share the flag. Workers read it once per candidate with relaxed
/// ordering, so a few candidates may still run after [`Self::cancel`].
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Shared count of replayed candidates, for polling from another thread.
///
/// Workers add to it once per finished chunk, not once per candidate.
#[derive(Clone, Debug, Default)]
pub struct SearchProgress(Arc<AtomicU64>);

impl SearchProgress {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn completed(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Add `n` finished candidates and return the new total.
    pub(crate) fn record(&self, n: u64) -> u64 {
        self.0.fetch_add(n, Ordering::Relaxed) + n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());

        handle.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_progress_accumulates_across_threads() {
        let progress = SearchProgress::new();
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let progress = progress.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        progress.record(10);
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(progress.completed(), 4_000);
    }
}
