//! The 40-slot deck and the game's shuffle.
//!
//! ## Shuffle
//!
//! The game shuffles with exactly 160 rounds of two draws each:
//!
//! ```text
//! x = rand() % 40
//! y = rand() % 40
//! swap(x, y)
//! ```
//!
//! A round with `x == y` still consumes both draws. Player decks are first
//! sorted with the order chosen on the Build Deck screen; AI decks are
//! shuffled as generated.

use serde::Serialize;

use super::sort::DeckSort;
use crate::cards::Card;
use crate::core::RngState;
use crate::error::{ManipError, Result};

/// Cards in a deck.
pub const DECK_SIZE: usize = 40;

/// Copies of one card an AI deck may hold.
pub const MAX_COPIES: usize = 3;

/// Swap rounds in one shuffle.
pub const SHUFFLE_ROUNDS: usize = 160;

/// A fixed-size ordered deck of card references.
///
/// `Copy` so that each search candidate can take its own deck for the cost of
/// a 40-pointer copy. Equality is slot by slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Deck<'a> {
    #[serde(serialize_with = "serialize_ids")]
    cards: [&'a Card; DECK_SIZE],
}

fn serialize_ids<S: serde::Serializer>(
    cards: &[&Card; DECK_SIZE],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(cards.iter().map(|c| c.id.raw()))
}

impl<'a> Deck<'a> {
    /// Create a deck from exactly [`DECK_SIZE`] cards, keeping their order.
    pub fn new(composition: &[&'a Card]) -> Result<Self> {
        let cards: [&'a Card; DECK_SIZE] =
            composition.try_into().map_err(|_| ManipError::InvalidDeckSize {
                expected: DECK_SIZE,
                actual: composition.len(),
            })?;
        Ok(Self { cards })
    }

    /// Card at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a Card> {
        self.cards.get(index).copied()
    }

    /// Slots `start..end`.
    pub fn range(&self, start: usize, end: usize) -> Result<&[&'a Card]> {
        if start > end || end > DECK_SIZE {
            return Err(ManipError::IndexOutOfRange {
                start,
                end,
                size: DECK_SIZE,
            });
        }
        Ok(&self.cards[start..end])
    }

    #[must_use]
    pub fn cards(&self) -> &[&'a Card; DECK_SIZE] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Card> + '_ {
        self.cards.iter().copied()
    }

    /// Copy of the slots as a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&'a Card> {
        self.cards.to_vec()
    }

    /// How many slots hold `card`.
    #[must_use]
    pub fn count(&self, card: &Card) -> usize {
        self.cards.iter().filter(|c| c.id == card.id).count()
    }

    /// Reorder all slots with a deck sort. Equal keys keep their relative order.
    pub fn sort(&mut self, sort: DeckSort) {
        self.cards.sort_by(|a, b| sort.compare(a, b));
    }

    /// Reorder all slots with any total order over cards.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Card, &Card) -> std::cmp::Ordering,
    {
        self.cards.sort_by(|a, b| compare(a, b));
    }

    /// Shuffle from the current order. Used for AI decks.
    ///
    /// Consumes exactly `2 * SHUFFLE_ROUNDS` draws from `rng`.
    pub fn shuffle(&mut self, rng: &mut RngState) {
        for _ in 0..SHUFFLE_ROUNDS {
            let x = (rng.rand() % DECK_SIZE as u32) as usize;
            let y = (rng.rand() % DECK_SIZE as u32) as usize;
            self.cards.swap(x, y);
        }
    }

    /// Sort with the pre-duel order, then shuffle. Used for player decks.
    pub fn shuffle_sorted(&mut self, rng: &mut RngState, pre_duel: DeckSort) {
        self.sort(pre_duel);
        self.shuffle(rng);
    }

    /// Whether the deck begins with `observed`, in order.
    ///
    /// Fails if `observed` is longer than the deck.
    pub fn starts_with(&self, observed: &[&Card]) -> Result<bool> {
        if observed.len() > DECK_SIZE {
            return Err(ManipError::PrefixTooLong {
                len: observed.len(),
                max: DECK_SIZE,
            });
        }
        Ok(self.prefix_matches(observed))
    }

    /// Prefix comparison for callers that already checked the length.
    #[inline]
    pub(crate) fn prefix_matches(&self, observed: &[&Card]) -> bool {
        self.cards
            .iter()
            .zip(observed)
            .all(|(slot, seen)| slot.id == seen.id)
    }
}

impl std::fmt::Display for Deck<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[ ")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&card.name)?;
        }
        f.write_str(" ]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, SortKeys};

    fn cards() -> Vec<Card> {
        // Attack order is the reverse of id order
        (1..=DECK_SIZE as u32)
            .map(|i| {
                Card::new(CardId::new(i), format!("Card {i}"))
                    .with_sort_keys(SortKeys::new(0, 0, 100 - i, 0, 0))
            })
            .collect()
    }

    fn deck(cards: &[Card]) -> Deck<'_> {
        let refs: Vec<&Card> = cards.iter().collect();
        Deck::new(&refs).unwrap()
    }

    fn ids(deck: &Deck<'_>) -> Vec<u32> {
        deck.iter().map(|c| c.id.raw()).collect()
    }

    #[test]
    fn test_wrong_size_rejected() {
        let cards = cards();
        let refs: Vec<&Card> = cards.iter().take(39).collect();
        assert_eq!(
            Deck::new(&refs).unwrap_err(),
            ManipError::InvalidDeckSize { expected: 40, actual: 39 }
        );

        let mut refs: Vec<&Card> = cards.iter().collect();
        refs.push(&cards[0]);
        assert!(matches!(
            Deck::new(&refs),
            Err(ManipError::InvalidDeckSize { actual: 41, .. })
        ));
    }

    #[test]
    fn test_get_and_range() {
        let cards = cards();
        let deck = deck(&cards);

        assert_eq!(deck.get(0).unwrap().id, CardId::new(1));
        assert!(deck.get(40).is_none());
        assert_eq!(deck.range(38, 40).unwrap().len(), 2);
        assert_eq!(deck.range(5, 5).unwrap().len(), 0);
        assert!(deck.range(10, 5).is_err());
        assert!(deck.range(0, 41).is_err());
    }

    #[test]
    fn test_to_vec_is_a_copy() {
        let cards = cards();
        let deck = deck(&cards);
        let mut list = deck.to_vec();
        list.remove(0);
        assert_eq!(deck.to_vec().len(), DECK_SIZE);
    }

    #[test]
    fn test_sort() {
        let cards = cards();
        let mut deck = deck(&cards);

        deck.sort(DeckSort::Attack);
        assert_eq!(ids(&deck)[0], 40);

        deck.sort(DeckSort::CardId);
        assert_eq!(ids(&deck), (1..=40).collect::<Vec<_>>());

        deck.sort_by(|a, b| b.id.cmp(&a.id));
        assert_eq!(ids(&deck)[0], 40);
    }

    #[test]
    fn test_shuffle_consumes_320_draws() {
        let cards = cards();
        let mut deck = deck(&cards);
        let mut rng = RngState::boot();

        deck.shuffle(&mut rng);
        assert_eq!(rng, RngState::boot().advance(2 * SHUFFLE_ROUNDS as u64));
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let cards = cards();
        let mut a = deck(&cards);
        let mut b = deck(&cards);

        a.shuffle(&mut RngState::from_seed(0xC0C4_3D0B));
        b.shuffle(&mut RngState::from_seed(0xC0C4_3D0B));
        assert_eq!(a, b);
        assert_ne!(a, deck(&cards));

        let mut sorted: Vec<u32> = ids(&a);
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=40).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_sorted_ignores_starting_order() {
        let cards = cards();
        let mut reversed: Vec<&Card> = cards.iter().collect();
        reversed.reverse();

        let mut a = deck(&cards);
        let mut b = Deck::new(&reversed).unwrap();
        a.shuffle_sorted(&mut RngState::boot(), DeckSort::CardId);
        b.shuffle_sorted(&mut RngState::boot(), DeckSort::CardId);
        assert_eq!(a, b);
    }

    #[test]
    fn test_starts_with() {
        let cards = cards();
        let deck = deck(&cards);

        assert!(deck.starts_with(&[]).unwrap());
        assert!(deck.starts_with(&[&cards[0], &cards[1]]).unwrap());
        assert!(!deck.starts_with(&[&cards[1]]).unwrap());

        let all: Vec<&Card> = cards.iter().collect();
        assert!(deck.starts_with(&all).unwrap());

        let mut too_long = all.clone();
        too_long.push(&cards[0]);
        assert_eq!(
            deck.starts_with(&too_long).unwrap_err(),
            ManipError::PrefixTooLong { len: 41, max: 40 }
        );
    }

    #[test]
    fn test_count_and_display() {
        let cards = cards();
        let mut refs: Vec<&Card> = cards.iter().collect();
        refs[1] = &cards[0];
        refs[2] = &cards[0];
        let deck = Deck::new(&refs).unwrap();

        assert_eq!(deck.count(&cards[0]), 3);
        assert_eq!(deck.count(&cards[1]), 0);
        assert!(deck.to_string().starts_with("[ Card 1, Card 1, Card 1, Card 4"));
        assert!(deck.to_string().ends_with("Card 40 ]"));
    }

    #[test]
    fn test_serializes_as_ids() {
        let cards = cards();
        let json = serde_json::to_string(&deck(&cards)).unwrap();
        assert!(json.starts_with(r#"{"cards":[1,2,3,"#));
    }
}
