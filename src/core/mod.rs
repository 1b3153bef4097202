//! Core engine types: the game's random number generator.
//!
//! Everything random in a duel setup (player shuffle, AI deck generation,
//! AI shuffle) is driven by one sequentially advancing [`RngState`].

pub mod rng;

pub use rng::{RngState, BOOT_SEED, INCREMENT, INVERSE_MULTIPLIER, MULTIPLIER};
