//! AI deck generation and the full pre-duel sequence.
//!
//! ## Order of events
//!
//! One RNG state drives, in order:
//!
//! 1. player deck sort (no draws) and shuffle,
//! 2. AI deck generation from the opponent's Deck pool,
//! 3. AI deck shuffle.
//!
//! [`simulate_duel`] replays exactly that sequence.

use smallvec::SmallVec;

use super::model::{Deck, DECK_SIZE, MAX_COPIES};
use super::sort::DeckSort;
use crate::cards::Card;
use crate::core::RngState;
use crate::data::{Duelist, Pool, PoolType};
use crate::error::Result;

/// Build an unshuffled AI deck by sampling `pool` one draw at a time.
///
/// A sampled card is kept only while the deck holds fewer than
/// [`MAX_COPIES`] of it; a rejected draw or a pool miss still consumes its
/// RNG step. Fails up front if the pool can never fill 40 slots.
pub fn generate_from_pool<'a>(pool: &'a Pool, rng: &mut RngState) -> Result<Deck<'a>> {
    pool.check_can_fill_deck()?;

    let mut cards: SmallVec<[&'a Card; DECK_SIZE]> = SmallVec::new();
    while cards.len() < DECK_SIZE {
        let Some(card) = pool.sample_rng(rng) else {
            continue;
        };
        if cards.iter().filter(|c| c.id == card.id).count() < MAX_COPIES {
            cards.push(card);
        }
    }

    Deck::new(&cards)
}

/// Build an unshuffled AI deck for `duelist` from its Deck pool.
pub fn generate_ai_deck<'a>(duelist: &'a Duelist, rng: &mut RngState) -> Result<Deck<'a>> {
    generate_from_pool(duelist.require_pool(PoolType::Deck)?, rng)
}

/// Both decks as they stand when the duel starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuelSetup<'a> {
    /// Player deck after sort and shuffle.
    pub player: Deck<'a>,
    /// AI deck after generation and shuffle.
    pub ai: Deck<'a>,
    /// RNG state after the AI shuffle.
    pub rng: RngState,
}

/// Replay the pre-duel order of events from `rng`.
///
/// `player` may be in any order; it is sorted with `pre_duel` first.
pub fn simulate_duel<'a>(
    player: &Deck<'a>,
    pre_duel: DeckSort,
    opponent: &'a Duelist,
    rng: RngState,
) -> Result<DuelSetup<'a>> {
    let mut rng = rng;

    let mut player = *player;
    player.shuffle_sorted(&mut rng, pre_duel);

    let mut ai = generate_ai_deck(opponent, &mut rng)?;
    ai.shuffle(&mut rng);

    Ok(DuelSetup { player, ai, rng })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::data::PoolEntry;
    use crate::error::ManipError;
    use std::sync::Arc;

    fn pool(weights: &[(u32, u32)]) -> Pool {
        Pool::new(weights.iter().map(|&(id, p)| {
            PoolEntry::new(Arc::new(Card::new(CardId::new(id), format!("Card {id}"))), p)
        }))
        .unwrap()
    }

    #[test]
    fn test_generated_deck_respects_copy_limit() {
        // One card dominates the pool so the limit is exercised constantly
        let mut weights = vec![(1, 2000)];
        weights.extend((2..=17).map(|id| (id, 3)));
        let pool = pool(&weights);

        let deck = generate_from_pool(&pool, &mut RngState::boot()).unwrap();
        for card in deck.iter() {
            assert!(deck.count(card) <= MAX_COPIES, "{} appears too often", card);
        }
        assert_eq!(deck.count(pool.entries()[0].card()), MAX_COPIES);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let weights: Vec<_> = (1..=20)
            .map(|id| (id, if id == 20 { 2048 - 19 * 100 } else { 100 }))
            .collect();
        let pool = pool(&weights);

        let mut rng_a = RngState::from_seed(1234);
        let mut rng_b = RngState::from_seed(1234);
        let a = generate_from_pool(&pool, &mut rng_a).unwrap();
        let b = generate_from_pool(&pool, &mut rng_b).unwrap();

        assert_eq!(a, b);
        assert_eq!(rng_a, rng_b);
    }

    #[test]
    fn test_rejected_draws_still_advance_rng() {
        // After three copies of card 1, almost every draw is rejected
        let mut weights = vec![(1, 2000)];
        weights.extend((2..=17).map(|id| (id, 3)));
        let pool = pool(&weights);

        let mut rng = RngState::boot();
        generate_from_pool(&pool, &mut rng).unwrap();
        assert!(rng.delta().unwrap() > 10 * DECK_SIZE as u64);
    }

    #[test]
    fn test_short_pool_skips_misses() {
        // Half of all draws miss; the deck still fills with real cards
        let weights: Vec<_> = (1..=16).map(|id| (id, 64)).collect();
        let pool = pool(&weights);
        assert_eq!(pool.total_weight(), 1024);

        let deck = generate_from_pool(&pool, &mut RngState::boot()).unwrap();
        assert!(deck.iter().all(|c| c.id.raw() <= 16));
    }

    #[test]
    fn test_pool_that_cannot_fill_is_rejected() {
        let pool = pool(&[(1, 1000), (2, 1048)]);
        assert_eq!(
            generate_from_pool(&pool, &mut RngState::boot()).unwrap_err(),
            ManipError::PoolCannotFillDeck { reachable: 6, needed: 40 }
        );
    }

    #[test]
    fn test_missing_deck_pool() {
        let duelist = Duelist::new(3);
        assert!(matches!(
            generate_ai_deck(&duelist, &mut RngState::boot()),
            Err(ManipError::MissingPool { duelist: 3, pool: PoolType::Deck })
        ));
    }
}
