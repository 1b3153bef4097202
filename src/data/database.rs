//! Read-only game data shared by reference.
//!
//! `GameData` is built once from already-parsed records and then handed to
//! every consumer as `&GameData`. Nothing mutates it afterwards, so it can be
//! shared freely across search threads.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::duelist::{Duelist, DuelistName};
use super::pool::{Pool, PoolEntry, PoolType};
use crate::cards::{Card, CardId, CardRegistry};
use crate::error::{ManipError, Result};

/// One row of a drop-pool table: `duelist`'s `pool_type` pool gives
/// `card_id` a weight of `probability` out of 2048.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRow {
    pub duelist: u32,
    pub pool_type: PoolType,
    pub card_id: u32,
    pub probability: u32,
}

impl PoolRow {
    #[must_use]
    pub const fn new(duelist: u32, pool_type: PoolType, card_id: u32, probability: u32) -> Self {
        Self {
            duelist,
            pool_type,
            card_id,
            probability,
        }
    }
}

/// Cards and duelists.
#[derive(Clone, Debug, Default)]
pub struct GameData {
    cards: CardRegistry,
    duelists: FxHashMap<u32, Duelist>,
}

impl GameData {
    /// Build from card records and pool rows.
    ///
    /// Rows are grouped per (duelist, pool type). Every row must name a known
    /// card and no card may appear twice in one pool.
    pub fn new(
        cards: impl IntoIterator<Item = Card>,
        rows: impl IntoIterator<Item = PoolRow>,
    ) -> Result<Self> {
        let mut registry = CardRegistry::new();
        for card in cards {
            registry.register(card)?;
        }

        let mut grouped: FxHashMap<(u32, PoolType), Vec<PoolEntry>> = FxHashMap::default();
        for row in rows {
            let card = registry
                .get_shared(CardId::new(row.card_id))
                .ok_or(ManipError::UnknownCard(row.card_id))?;
            grouped
                .entry((row.duelist, row.pool_type))
                .or_default()
                .push(PoolEntry::new(card.clone(), row.probability));
        }

        let mut duelists: FxHashMap<u32, Duelist> = FxHashMap::default();
        for ((duelist_id, pool_type), entries) in grouped {
            let pool = Pool::new(entries)?;
            let duelist = duelists
                .remove(&duelist_id)
                .unwrap_or_else(|| Duelist::new(duelist_id));
            duelists.insert(duelist_id, duelist.with_pool(pool_type, pool));
        }

        tracing::debug!(
            cards = registry.len(),
            duelists = duelists.len(),
            "game data loaded"
        );

        Ok(Self {
            cards: registry,
            duelists,
        })
    }

    /// Add a fully built duelist (builder pattern).
    #[must_use]
    pub fn with_duelist(mut self, duelist: Duelist) -> Self {
        self.duelists.insert(duelist.id(), duelist);
        self
    }

    /// Card by raw id.
    #[must_use]
    pub fn card(&self, id: u32) -> Option<&Card> {
        self.cards.get(CardId::new(id))
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    /// Resolve raw ids in order. Duplicates are allowed.
    pub fn cards_by_ids(&self, ids: &[u32]) -> Result<Vec<&Card>> {
        self.cards.resolve(ids)
    }

    #[must_use]
    pub fn duelist(&self, id: u32) -> Option<&Duelist> {
        self.duelists.get(&id)
    }

    #[must_use]
    pub fn duelist_by_name(&self, name: DuelistName) -> Option<&Duelist> {
        self.duelist(name.id())
    }

    /// Like [`Self::duelist`] but a missing duelist is an error.
    pub fn require_duelist(&self, id: u32) -> Result<&Duelist> {
        self.duelist(id).ok_or(ManipError::UnknownDuelist(id))
    }

    /// All duelists in no particular order.
    pub fn duelists(&self) -> impl Iterator<Item = &Duelist> {
        self.duelists.values()
    }

    /// Duelists whose `pool_types` pools contain `card`, in id order.
    #[must_use]
    pub fn duelists_dropping(&self, card: CardId, pool_types: &[PoolType]) -> Vec<&Duelist> {
        let mut found: Vec<&Duelist> = self
            .duelists
            .values()
            .filter(|d| {
                pool_types
                    .iter()
                    .filter_map(|&t| d.pool(t))
                    .any(|pool| pool.entry(card).is_some())
            })
            .collect();
        found.sort_by_key(|d| d.id());
        found
    }
}
