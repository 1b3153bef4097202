//! Card records - immutable card data.
//!
//! A `Card` is loaded once by the data provider and never changes. Decks hold
//! `&Card` references, so equality and hashing are by id only.
//!
//! Besides the printed stats, each card carries ordinal sort keys: its
//! position in the full card list under each Build Deck screen sort. These
//! keys are all the deck sorts look at.

use serde::{Deserialize, Serialize};

use super::guardian::GuardianStar;

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Ordinal positions of a card under the five locale-specific deck sorts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKeys {
    /// Alphabetical position.
    pub abc: u32,
    /// "Max" sort position.
    pub max: u32,
    /// Attack sort position.
    pub atk: u32,
    /// Defense sort position.
    pub def: u32,
    /// Type sort position.
    pub kind: u32,
}

impl SortKeys {
    /// Create sort keys in (abc, max, atk, def, type) order.
    #[must_use]
    pub const fn new(abc: u32, max: u32, atk: u32, def: u32, kind: u32) -> Self {
        Self {
            abc,
            max,
            atk,
            def,
            kind,
        }
    }
}

/// Immutable card record.
///
/// ## Example
///
/// ```
/// use fm_manip::cards::{Card, CardId, SortKeys};
///
/// let bewd = Card::new(CardId::new(1), "Blue-eyes White Dragon")
///     .with_stats(8, 3000, 2500)
///     .with_sort_keys(SortKeys::new(74, 7, 7, 11, 6));
///
/// assert_eq!(bewd.attack, 3000);
/// assert_eq!(bewd.sort_keys.abc, 74);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub starchips: u32,
    #[serde(default)]
    pub first_guardian_star: Option<GuardianStar>,
    #[serde(default)]
    pub second_guardian_star: Option<GuardianStar>,
    /// Card type, e.g. "Dragon" or "Magic".
    #[serde(default)]
    pub card_type: String,
    #[serde(default)]
    pub attribute: String,
    #[serde(default)]
    pub password: String,
    /// Positions under the English-release sorts.
    #[serde(default)]
    pub sort_keys: SortKeys,
    /// Positions under the Japanese-release sorts.
    #[serde(default)]
    pub jp_sort_keys: SortKeys,
    /// Position in the AI's internal ordering. Not a Build Deck sort.
    #[serde(default)]
    pub ai_sort: u32,
}

impl Card {
    /// Create a card with the given id and name and zeroed stats.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            level: 0,
            attack: 0,
            defense: 0,
            starchips: 0,
            first_guardian_star: None,
            second_guardian_star: None,
            card_type: String::new(),
            attribute: String::new(),
            password: String::new(),
            sort_keys: SortKeys::default(),
            jp_sort_keys: SortKeys::default(),
            ai_sort: 0,
        }
    }

    /// Set level, attack and defense.
    #[must_use]
    pub fn with_stats(mut self, level: u32, attack: u32, defense: u32) -> Self {
        self.level = level;
        self.attack = attack;
        self.defense = defense;
        self
    }

    #[must_use]
    pub fn with_starchips(mut self, starchips: u32) -> Self {
        self.starchips = starchips;
        self
    }

    #[must_use]
    pub fn with_guardian_stars(mut self, first: GuardianStar, second: GuardianStar) -> Self {
        self.first_guardian_star = Some(first);
        self.second_guardian_star = Some(second);
        self
    }

    /// Set type and attribute.
    #[must_use]
    pub fn with_kind(mut self, card_type: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self.attribute = attribute.into();
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the English-release sort positions.
    #[must_use]
    pub fn with_sort_keys(mut self, keys: SortKeys) -> Self {
        self.sort_keys = keys;
        self
    }

    /// Set the Japanese-release sort positions.
    #[must_use]
    pub fn with_jp_sort_keys(mut self, keys: SortKeys) -> Self {
        self.jp_sort_keys = keys;
        self
    }

    #[must_use]
    pub fn with_ai_sort(mut self, ai_sort: u32) -> Self {
        self.ai_sort = ai_sort;
        self
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
