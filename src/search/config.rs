//! Seed search configuration.

use serde::{Deserialize, Serialize};

use crate::core::RngState;
use crate::deck::DeckSort;
use crate::error::{ManipError, Result};

/// Steps scanned when no range is given.
pub const DEFAULT_SEARCH_SPACE: u64 = 5_000_000;

/// Candidates handed to one worker at a time.
pub const DEFAULT_CHUNK_SIZE: u64 = 4096;

/// Seed search configuration.
///
/// Built with consuming `with_*` methods; the range setters validate and
/// return a `Result`, so a constructed config always has `start <= end`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// State the scan range is measured from (default: boot seed).
    pub initial_seed: RngState,

    /// First step offset scanned, inclusive.
    space_start: u64,

    /// Last step offset scanned, exclusive.
    space_end: u64,

    /// Order chosen on the Build Deck screen before the duel.
    pub sort: DeckSort,

    /// Candidates per unit of parallel work.
    /// Also the granularity of progress events.
    pub chunk_size: u64,

    /// Size of a dedicated worker pool (`None` = rayon's global pool).
    pub threads: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_seed: RngState::boot(),
            space_start: 0,
            space_end: DEFAULT_SEARCH_SPACE,
            sort: DeckSort::CardId,
            chunk_size: DEFAULT_CHUNK_SIZE,
            threads: None,
        }
    }
}

impl SearchConfig {
    /// Set the pre-duel sort.
    pub fn with_sort(mut self, sort: DeckSort) -> Self {
        self.sort = sort;
        self
    }

    /// Set the state offsets are counted from.
    pub fn with_initial_seed(mut self, seed: RngState) -> Self {
        self.initial_seed = seed;
        self
    }

    /// Scan offsets `start..end`.
    ///
    /// A reversed range is almost always a caller bug, so it is rejected
    /// rather than swapped.
    pub fn with_space(mut self, start: u64, end: u64) -> Result<Self> {
        if start > end {
            return Err(ManipError::InvalidRange { start, end });
        }
        self.space_start = start;
        self.space_end = end;
        Ok(self)
    }

    /// Scan offsets `0..end`.
    pub fn with_space_end(self, end: u64) -> Result<Self> {
        self.with_space(0, end)
    }

    /// Set the parallel work granularity. Zero is treated as one.
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Run on a dedicated pool of `threads` workers.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    #[must_use]
    pub fn space_start(&self) -> u64 {
        self.space_start
    }

    #[must_use]
    pub fn space_end(&self) -> u64 {
        self.space_end
    }

    /// Number of candidates the scan covers.
    #[must_use]
    pub fn space_len(&self) -> u64 {
        self.space_end.saturating_sub(self.space_start)
    }

    /// Re-check invariants, e.g. after deserializing.
    pub fn validate(&self) -> Result<()> {
        if self.space_start > self.space_end {
            return Err(ManipError::InvalidRange {
                start: self.space_start,
                end: self.space_end,
            });
        }
        Ok(())
    }
}
