//! Decks: the 40-slot container, the deck-sort screen, the shuffle, and AI
//! deck generation.
//!
//! Everything here is driven by one [`RngState`](crate::core::RngState)
//! passed by `&mut`, so callers can chain steps in the game's order and
//! read the state back afterwards.

pub mod generation;
pub mod model;
pub mod sort;

pub use generation::{generate_ai_deck, generate_from_pool, simulate_duel, DuelSetup};
pub use model::{Deck, DECK_SIZE, MAX_COPIES, SHUFFLE_ROUNDS};
pub use sort::DeckSort;
