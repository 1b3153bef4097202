//! Shared fixtures: a synthetic card database.
//!
//! The real game data is not shipped with the crate, so tests build a
//! database of the same shape from a seeded ChaCha stream. The same fixture
//! seed always yields the same cards, pools and player deck.

#![allow(dead_code)]

use fm_manip::{
    Card, CardId, Deck, DuelistName, GameData, GuardianStar, PoolRow, PoolType, SortKeys,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const CARD_COUNT: u32 = 722;
pub const FIXTURE_SEED: u64 = 0xF00D;

/// Duelist with a full Deck pool.
pub const OPPONENT: DuelistName = DuelistName::Heishin1;

/// Duelist whose Deck pool sums to less than 2048.
pub const SHORT_POOL_OPPONENT: DuelistName = DuelistName::Simon;

fn permutation(rng: &mut ChaCha8Rng) -> Vec<u32> {
    let mut order: Vec<u32> = (0..CARD_COUNT).collect();
    order.shuffle(rng);
    order
}

/// Weights over `ids` summing to `total`.
fn weights(rng: &mut ChaCha8Rng, ids: &[u32], total: u32) -> Vec<PoolRow> {
    let n = ids.len() as u32;
    let mut weights = vec![total / n; ids.len()];
    for _ in 0..total % n {
        let i = rng.gen_range(0..ids.len());
        weights[i] += 1;
    }
    ids.iter()
        .zip(weights)
        .map(|(&id, w)| PoolRow::new(0, PoolType::Deck, id, w))
        .collect()
}

fn pool_rows(
    rng: &mut ChaCha8Rng,
    duelist: DuelistName,
    pool_type: PoolType,
    size: usize,
    total: u32,
) -> Vec<PoolRow> {
    let all: Vec<u32> = (1..=CARD_COUNT).collect();
    let ids: Vec<u32> = all.choose_multiple(rng, size).copied().collect();
    weights(rng, &ids, total)
        .into_iter()
        .map(|row| PoolRow::new(duelist.id(), pool_type, row.card_id, row.probability))
        .collect()
}

pub fn cards(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let keys: Vec<Vec<u32>> = (0..10).map(|_| permutation(&mut rng)).collect();

    (1..=CARD_COUNT)
        .map(|id| {
            let i = (id - 1) as usize;
            let first = *GuardianStar::ALL.choose(&mut rng).unwrap_or(&GuardianStar::Sun);
            let second = *GuardianStar::ALL.choose(&mut rng).unwrap_or(&GuardianStar::Moon);
            Card::new(CardId::new(id), format!("Card #{id:03}"))
                .with_stats(
                    rng.gen_range(1..=12),
                    rng.gen_range(0..=60) * 50,
                    rng.gen_range(0..=60) * 50,
                )
                .with_guardian_stars(first, second)
                .with_sort_keys(SortKeys::new(
                    keys[0][i], keys[1][i], keys[2][i], keys[3][i], keys[4][i],
                ))
                .with_jp_sort_keys(SortKeys::new(
                    keys[5][i], keys[6][i], keys[7][i], keys[8][i], keys[9][i],
                ))
        })
        .collect()
}

pub fn game_data(seed: u64) -> GameData {
    let cards = cards(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5EED);

    let mut rows = Vec::new();
    rows.extend(pool_rows(&mut rng, OPPONENT, PoolType::Deck, 60, 2048));
    rows.extend(pool_rows(&mut rng, OPPONENT, PoolType::SaPow, 30, 2048));
    rows.extend(pool_rows(&mut rng, OPPONENT, PoolType::Bcd, 30, 2048));
    rows.extend(pool_rows(&mut rng, OPPONENT, PoolType::SaTec, 30, 2048));
    rows.extend(pool_rows(&mut rng, SHORT_POOL_OPPONENT, PoolType::Deck, 30, 1536));
    rows.extend(pool_rows(&mut rng, DuelistName::Seto3, PoolType::Deck, 45, 2048));

    GameData::new(cards, rows).unwrap()
}

/// Forty card ids, at most three copies each, in no particular order.
pub fn player_deck_ids(seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0xDEC);
    let mut ids = Vec::with_capacity(40);
    while ids.len() < 40 {
        let id = rng.gen_range(1..=CARD_COUNT);
        if ids.iter().filter(|&&c| c == id).count() < 3 {
            ids.push(id);
        }
    }
    ids
}

pub fn player_deck(data: &GameData, seed: u64) -> Deck<'_> {
    let cards = data.cards_by_ids(&player_deck_ids(seed)).unwrap();
    Deck::new(&cards).unwrap()
}
