//! Drop pools: weighted card tables sampled with one `rand()` draw.
//!
//! A pool maps cards to weights out of [`POOL_TOTAL`]. A draw takes
//! `rand() % 2048` and walks the entries in ascending card-id order,
//! subtracting each weight until the running value goes negative.
//!
//! If the weights sum to less than 2048 a draw can run off the end of the
//! table. That is a defined miss (`None`): the game skips the draw. Vanilla
//! data never does this, but modded pools can, and the weights are never
//! normalized to hide it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::RngState;
use crate::deck::{DECK_SIZE, MAX_COPIES};
use crate::error::{ManipError, Result};

/// Sum of weights in a complete pool.
pub const POOL_TOTAL: u32 = 2048;

/// Which table of a duelist is being sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolType {
    /// Sampled to build the AI's deck.
    Deck,
    /// Drops after an S/A-POW rank win.
    SaPow,
    /// Drops after a B/C/D rank win.
    Bcd,
    /// Drops after an S/A-TEC rank win.
    SaTec,
}

impl PoolType {
    pub const ALL: [PoolType; 4] = [
        PoolType::Deck,
        PoolType::SaPow,
        PoolType::Bcd,
        PoolType::SaTec,
    ];

    /// The three post-duel drop tables.
    pub const DROPS: [PoolType; 3] = [PoolType::SaPow, PoolType::Bcd, PoolType::SaTec];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PoolType::Deck => "Deck",
            PoolType::SaPow => "SAPow",
            PoolType::Bcd => "BCD",
            PoolType::SaTec => "SATec",
        }
    }
}

impl std::fmt::Display for PoolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card and its weight out of 2048.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolEntry {
    card: Arc<Card>,
    probability: u32,
}

impl PoolEntry {
    #[must_use]
    pub fn new(card: Arc<Card>, probability: u32) -> Self {
        Self { card, probability }
    }

    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Weight out of [`POOL_TOTAL`].
    #[must_use]
    pub fn probability(&self) -> u32 {
        self.probability
    }
}

/// Weighted card table, kept in ascending card-id order.
#[derive(Clone, Debug, Default)]
pub struct Pool {
    entries: Vec<PoolEntry>,
}

impl Pool {
    /// Build a pool from entries in any order.
    ///
    /// Fails if a card appears twice.
    pub fn new(entries: impl IntoIterator<Item = PoolEntry>) -> Result<Self> {
        let mut entries: Vec<PoolEntry> = entries.into_iter().collect();
        entries.sort_by_key(|e| e.card.id);

        if let Some(dup) = entries.windows(2).find(|w| w[0].card.id == w[1].card.id) {
            return Err(ManipError::DuplicatePoolEntry {
                card: dup[0].card.id.raw(),
            });
        }

        Ok(Self { entries })
    }

    /// The card selected by a raw `rand()` value (before the modulo).
    ///
    /// Returns `None` when the draw runs past the cumulative weights.
    #[must_use]
    pub fn sample(&self, raw: u32) -> Option<&Card> {
        let mut remaining = (raw % POOL_TOTAL) as i64;
        for entry in &self.entries {
            remaining -= i64::from(entry.probability);
            if remaining < 0 {
                return Some(&entry.card);
            }
        }
        tracing::trace!(raw, total = self.total_weight(), "draw ran past the end of the pool");
        None
    }

    /// Draw one value from `rng` and sample with it.
    pub fn sample_rng(&self, rng: &mut RngState) -> Option<&Card> {
        self.sample(rng.rand())
    }

    /// Entry for a card id.
    #[must_use]
    pub fn entry(&self, id: CardId) -> Option<&PoolEntry> {
        self.entries
            .binary_search_by_key(&id, |e| e.card.id)
            .ok()
            .map(|i| &self.entries[i])
    }

    /// All entries in ascending card-id order.
    #[must_use]
    pub fn entries(&self) -> &[PoolEntry] {
        &self.entries
    }

    /// Entries matching a predicate.
    pub fn entries_where<F>(&self, predicate: F) -> impl Iterator<Item = &PoolEntry>
    where
        F: Fn(&PoolEntry) -> bool,
    {
        self.entries.iter().filter(move |e| predicate(e))
    }

    /// Sum of all weights. Equal to [`POOL_TOTAL`] for vanilla data.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|e| e.probability).sum()
    }

    /// Number of entries some draw in `0..2048` can actually select.
    #[must_use]
    pub fn reachable_entries(&self) -> usize {
        let mut start = 0u32;
        let mut reachable = 0;
        for entry in &self.entries {
            if entry.probability > 0 && start < POOL_TOTAL {
                reachable += 1;
            }
            start = start.saturating_add(entry.probability);
        }
        reachable
    }

    /// Fails unless reachable entries, three copies each, can fill a deck.
    ///
    /// Deck generation never terminates on a pool that fails this check.
    pub fn check_can_fill_deck(&self) -> Result<()> {
        let reachable = self.reachable_entries() * MAX_COPIES;
        if reachable < DECK_SIZE {
            return Err(ManipError::PoolCannotFillDeck {
                reachable,
                needed: DECK_SIZE,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
