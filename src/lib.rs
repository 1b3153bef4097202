//! # fm-manip
//!
//! RNG manipulation toolkit for a PlayStation card game: model the game's
//! random stream bit for bit, replay its deck shuffles and AI deck
//! generation, and recover the stream position from cards seen on screen.
//!
//! ## Design Principles
//!
//! 1. **Bit-exact**: Every draw the game makes is made here, in the same
//!    order. Nothing is skipped or reordered for speed.
//!
//! 2. **Values, not shared state**: `RngState` and `Deck` are `Copy`.
//!    Parallel search tasks each own their copies.
//!
//! 3. **Explicit data**: `GameData` is built once by the caller and passed
//!    by reference. There is no global database.
//!
//! ## Modules
//!
//! - `core`: The game's linear congruential generator
//! - `cards`: Card records, Guardian Stars, card registry
//! - `data`: Drop pools, duelists, the read-only data provider
//! - `deck`: 40-card decks, sorts, shuffle, AI deck generation
//! - `search`: Parallel seed search over a range of RNG states
//! - `error`: Crate error type

pub mod cards;
pub mod core;
pub mod data;
pub mod deck;
pub mod error;
pub mod search;

// Re-export commonly used types
pub use crate::core::{RngState, BOOT_SEED};

pub use crate::cards::{Card, CardId, CardRegistry, GuardianStar, SortKeys};

pub use crate::data::{
    Duelist, DuelistName, GameData, Pool, PoolEntry, PoolRow, PoolType, POOL_TOTAL,
};

pub use crate::deck::{
    generate_ai_deck, simulate_duel, Deck, DeckSort, DuelSetup, DECK_SIZE, MAX_COPIES,
    SHUFFLE_ROUNDS,
};

pub use crate::error::{ManipError, Result};

pub use crate::search::{
    CancelToken, SearchConfig, SearchEvent, SearchOutcome, SearchProgress, SearchStats,
    SearchStatus, SeedSearch, DEFAULT_SEARCH_SPACE,
};
