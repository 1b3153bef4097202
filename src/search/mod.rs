//! Seed search: recover RNG states from observed draws.
//!
//! ## Overview
//!
//! Given the player's 40 cards, the pre-duel sort and the cards drawn so
//! far, [`SeedSearch`] replays the shuffle for every candidate state in a
//! range and keeps those whose replay starts with the observed draws.
//!
//! - **Player-only mode**: only the player shuffle is replayed.
//! - **Duel mode** ([`SeedSearch::with_opponent`]): the AI deck is also
//!   generated and shuffled and must match the AI cards seen.
//! - **Events**: hits and progress stream over an `mpsc` channel.
//! - **Cancellation**: a [`CancelToken`] checked once per candidate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fm_manip::deck::DeckSort;
//! use fm_manip::search::{SearchConfig, SeedSearch};
//!
//! let config = SearchConfig::default().with_sort(DeckSort::Type);
//! let outcome = SeedSearch::new(&deck, &drawn, config)?.run();
//!
//! match outcome.unique() {
//!     Some(seed) => println!("seed found: {seed}"),
//!     None => println!("{} candidates; draw more cards", outcome.seeds.len()),
//! }
//! ```

pub mod config;
pub mod engine;
pub mod event;
pub mod stats;

pub use config::{SearchConfig, DEFAULT_CHUNK_SIZE, DEFAULT_SEARCH_SPACE};
pub use engine::{SearchOutcome, SeedSearch};
pub use event::{CancelToken, SearchEvent, SearchProgress, SearchStatus};
pub use stats::SearchStats;
