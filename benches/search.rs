//! Hot paths of the seed search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fm_manip::deck::{generate_ai_deck, DeckSort};
use fm_manip::search::{SearchConfig, SeedSearch};
use fm_manip::RngState;

#[path = "../tests/common/mod.rs"]
mod common;

use common::{game_data, player_deck, FIXTURE_SEED, OPPONENT};

fn bench_rng(c: &mut Criterion) {
    c.bench_function("advance_5m", |b| {
        b.iter(|| black_box(RngState::boot()).advance(black_box(5_000_000)))
    });
}

fn bench_deck(c: &mut Criterion) {
    let data = game_data(FIXTURE_SEED);
    let deck = player_deck(&data, FIXTURE_SEED);
    let opponent = data.duelist_by_name(OPPONENT).unwrap();

    c.bench_function("player_shuffle", |b| {
        b.iter(|| {
            let mut d = deck;
            d.shuffle_sorted(&mut black_box(RngState::boot()), DeckSort::Type);
            d
        })
    });

    c.bench_function("ai_deck_generate_and_shuffle", |b| {
        b.iter(|| {
            let mut rng = black_box(RngState::boot());
            let mut ai = generate_ai_deck(opponent, &mut rng).unwrap();
            ai.shuffle(&mut rng);
            ai
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let data = game_data(FIXTURE_SEED);
    let deck = player_deck(&data, FIXTURE_SEED);
    let drawn: Vec<_> = deck.iter().take(14).collect();
    let config = SearchConfig::default().with_space_end(100_000).unwrap();

    let mut group = c.benchmark_group("seed_search");
    group.sample_size(10);
    group.bench_function("player_only_100k", |b| {
        b.iter(|| {
            SeedSearch::new(&deck, &drawn, config.clone())
                .unwrap()
                .run()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_rng, bench_deck, bench_search);
criterion_main!(benches);
