//! Build Deck screen sorts.
//!
//! The ordering is a pure function of one sort key on each card. Display
//! names live in a separate table and play no part in comparisons.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One of the eleven deck orderings the game offers before a duel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckSort {
    /// Ascending card id.
    #[default]
    CardId,
    Alphabetical,
    Max,
    Attack,
    Defense,
    Type,
    JpAlphabetical,
    JpMax,
    JpAttack,
    JpDefense,
    JpType,
}

const SORT_LABELS: [&str; 11] = [
    "ID Sort",
    "Alphabetical Sort",
    "Max Sort",
    "Attack Sort",
    "Defense Sort",
    "Type Sort",
    "Japanese Alphabetical Sort",
    "Japanese Max Sort",
    "Japanese Attack Sort",
    "Japanese Defense Sort",
    "Japanese Type Sort",
];

impl DeckSort {
    pub const ALL: [DeckSort; 11] = [
        DeckSort::CardId,
        DeckSort::Alphabetical,
        DeckSort::Max,
        DeckSort::Attack,
        DeckSort::Defense,
        DeckSort::Type,
        DeckSort::JpAlphabetical,
        DeckSort::JpMax,
        DeckSort::JpAttack,
        DeckSort::JpDefense,
        DeckSort::JpType,
    ];

    /// The ordinal this sort compares.
    #[must_use]
    pub fn key(self, card: &Card) -> u32 {
        match self {
            DeckSort::CardId => card.id.raw(),
            DeckSort::Alphabetical => card.sort_keys.abc,
            DeckSort::Max => card.sort_keys.max,
            DeckSort::Attack => card.sort_keys.atk,
            DeckSort::Defense => card.sort_keys.def,
            DeckSort::Type => card.sort_keys.kind,
            DeckSort::JpAlphabetical => card.jp_sort_keys.abc,
            DeckSort::JpMax => card.jp_sort_keys.max,
            DeckSort::JpAttack => card.jp_sort_keys.atk,
            DeckSort::JpDefense => card.jp_sort_keys.def,
            DeckSort::JpType => card.jp_sort_keys.kind,
        }
    }

    #[must_use]
    pub fn compare(self, a: &Card, b: &Card) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        SORT_LABELS[self as usize]
    }
}

impl std::fmt::Display for DeckSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
