//! Recover the RNG state of a recorded duel and predict the AI's deck.
//!
//! Run with `cargo run --release --example seed_search`. Set `RUST_LOG` to
//! `debug` to see each hit as it is found.

use std::sync::mpsc;

use fm_manip::deck::simulate_duel;
use fm_manip::search::{SearchConfig, SearchEvent, SeedSearch};
use fm_manip::{DeckSort, RngState};
use tracing_subscriber::EnvFilter;

#[path = "../tests/common/mod.rs"]
mod common;

use common::{game_data, player_deck, FIXTURE_SEED, OPPONENT};

/// Sort chosen on the Build Deck screen. Only the last sort applied matters.
const DECK_SORT: DeckSort = DeckSort::Type;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> fm_manip::Result<()> {
    init_logging();

    let data = game_data(FIXTURE_SEED);
    let opponent = data.require_duelist(OPPONENT.id())?;
    let deck = player_deck(&data, FIXTURE_SEED);

    // Stand-in for a real console: a duel started 83,577 steps after boot
    let hidden = RngState::boot().advance(83_577);
    let recorded = simulate_duel(&deck, DECK_SORT, opponent, hidden)?;
    let drawn: Vec<_> = recorded.player.iter().take(14).collect();
    let names: Vec<&str> = drawn.iter().map(|c| c.name.as_str()).collect();
    println!("Player drew: {}", names.join(", "));

    let (tx, rx) = mpsc::channel();
    let search = SeedSearch::new(&deck, &drawn, SearchConfig::default().with_sort(DECK_SORT))?
        .with_events(tx);
    let total = search.space_len();

    let reporter = std::thread::spawn(move || {
        let mut last_percent = 0;
        for event in rx {
            match event {
                SearchEvent::Hit(seed) => println!("  hit: {seed}"),
                SearchEvent::Progress { completed, .. } => {
                    let percent = completed * 100 / total.max(1);
                    if percent >= last_percent + 10 {
                        last_percent = percent;
                        println!("  {percent}% searched");
                    }
                }
            }
        }
    });
    let outcome = search.run();
    let _ = reporter.join();

    println!(
        "Checked {} states in {:.2}s ({:.0}/s)",
        outcome.stats.candidates_checked,
        outcome.stats.elapsed_us as f64 / 1e6,
        outcome.stats.candidates_per_second()
    );

    match outcome.unique() {
        None if outcome.seeds.is_empty() => {
            println!("No possible seeds found. Check the deck and sort, or widen the range.");
        }
        None => {
            println!("{} possible seeds found. Draw more cards.", outcome.seeds.len());
        }
        Some(seed) => {
            println!("Seed found: {seed}");
            let setup = simulate_duel(&deck, DECK_SORT, opponent, seed)?;
            println!("{} will draw from: {}", opponent, setup.ai);
            println!("Matches the recording: {}", setup.ai == recorded.ai);
        }
    }

    Ok(())
}
