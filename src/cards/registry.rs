//! Card registry for id lookup.
//!
//! The `CardRegistry` owns every card record behind an `Arc` so that drop
//! pools can share the same records without copying them.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId};
use crate::error::{ManipError, Result};

/// Registry of card records keyed by id.
///
/// ## Example
///
/// ```
/// use fm_manip::cards::{Card, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new(CardId::new(1), "Blue-eyes White Dragon")).unwrap();
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Blue-eyes White Dragon");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<Card>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Fails if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) -> Result<()> {
        if self.cards.contains_key(&card.id) {
            return Err(ManipError::DuplicateCard(card.id.raw()));
        }
        self.cards.insert(card.id, Arc::new(card));
        Ok(())
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id).map(Arc::as_ref)
    }

    /// Get the shared handle for a card by ID.
    #[must_use]
    pub fn get_shared(&self, id: CardId) -> Option<&Arc<Card>> {
        self.cards.get(&id)
    }

    /// Resolve a list of raw ids in order, failing on the first unknown one.
    pub fn resolve(&self, ids: &[u32]) -> Result<Vec<&Card>> {
        ids.iter()
            .map(|&id| self.get(CardId::new(id)).ok_or(ManipError::UnknownCard(id)))
            .collect()
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values().map(Arc::as_ref)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }
}
