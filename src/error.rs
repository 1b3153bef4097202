//! Error types for deck construction, data lookup, and search configuration.
//!
//! All failures here are caller mistakes surfaced synchronously. A drop-pool
//! sampling miss is not an error; it is `None` from [`crate::data::Pool::sample`].

use thiserror::Error;

use crate::data::PoolType;

/// Errors raised by the crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManipError {
    #[error("deck must contain {expected} cards; given {actual} instead")]
    InvalidDeckSize { expected: usize, actual: usize },

    #[error("search start {start} is greater than end {end}")]
    InvalidRange { start: u64, end: u64 },

    #[error("observed card list of length {len} exceeds deck size {max}")]
    PrefixTooLong { len: usize, max: usize },

    #[error("index range {start}..{end} is invalid for a deck of {size} cards")]
    IndexOutOfRange { start: usize, end: usize, size: usize },

    #[error("no card with id {0}")]
    UnknownCard(u32),

    #[error("card {0} is already registered")]
    DuplicateCard(u32),

    #[error("no duelist with id {0}")]
    UnknownDuelist(u32),

    #[error("duelist {duelist} has no {pool} pool")]
    MissingPool { duelist: u32, pool: PoolType },

    #[error("card {card} appears more than once in a pool")]
    DuplicatePoolEntry { card: u32 },

    #[error("pool can supply at most {reachable} cards but a deck needs {needed}")]
    PoolCannotFillDeck { reachable: usize, needed: usize },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, ManipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ManipError::InvalidDeckSize { expected: 40, actual: 39 };
        assert_eq!(err.to_string(), "deck must contain 40 cards; given 39 instead");

        let err = ManipError::MissingPool { duelist: 8, pool: PoolType::Deck };
        assert_eq!(err.to_string(), "duelist 8 has no Deck pool");
    }
}
