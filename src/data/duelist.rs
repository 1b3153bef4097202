//! Duelists and their drop pools.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::pool::{Pool, PoolType};
use crate::error::{ManipError, Result};

/// The duelists of the base game, keyed by their data id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuelistName {
    Simon,
    Teana1,
    Jono1,
    Villager1,
    Villager2,
    Villager3,
    Seto1,
    Heishin1,
    Rex,
    Weevil,
    Mai,
    BanditKeith,
    Shadi,
    Bakura,
    Pegasus,
    Isis,
    Kaiba,
    MageSoldier,
    Jono2,
    Teana2,
    OceanMage,
    Secmeton,
    ForestMage,
    Anubisius,
    MountainMage,
    Atenza,
    DesertMage,
    Martis,
    MeadowMage,
    Kepura,
    LabyrinthMage,
    Seto2,
    Sebek,
    Neku,
    Heishin2,
    Seto3,
    DarkNite,
    Nitemare,
    DuelMasterK,
}

/// (name, id, hand size, display name, mage)
static DUELIST_TABLE: [(DuelistName, u32, u32, &str, bool); 39] = {
    use DuelistName::*;
    [
        (Simon, 1, 5, "Simon Muran", false),
        (Teana1, 2, 5, "Teana", false),
        (Jono1, 3, 5, "Jono", false),
        (Villager1, 4, 5, "Villager1", false),
        (Villager2, 5, 5, "Villager2", false),
        (Villager3, 6, 5, "Villager3", false),
        (Seto1, 7, 10, "Seto", false),
        (Heishin1, 8, 20, "Heishin", false),
        (Rex, 9, 8, "Rex Raptor", false),
        (Weevil, 10, 8, "Weevil Underwood", false),
        (Mai, 11, 10, "Mai Valentine", false),
        (BanditKeith, 12, 12, "Bandit Keith", false),
        (Shadi, 13, 12, "Shadi", false),
        (Bakura, 14, 14, "Yami Bakura", false),
        (Pegasus, 15, 16, "Pegasus", false),
        (Isis, 16, 16, "Isis", false),
        (Kaiba, 17, 16, "Kaiba", false),
        (MageSoldier, 18, 12, "Mage Soldier", false),
        (Jono2, 19, 10, "Jono 2nd", false),
        (Teana2, 20, 10, "Teana 2nd", false),
        (OceanMage, 21, 14, "Ocean Mage", true),
        (Secmeton, 22, 16, "High Mage Secmeton", false),
        (ForestMage, 23, 14, "Forest Mage", true),
        (Anubisius, 24, 16, "High Mage Anubisius", false),
        (MountainMage, 25, 14, "Mountain Mage", true),
        (Atenza, 26, 16, "High Mage Atenza", false),
        (DesertMage, 27, 14, "Desert Mage", true),
        (Martis, 28, 16, "High Mage Martis", false),
        (MeadowMage, 29, 14, "Meadow Mage", true),
        (Kepura, 30, 16, "High Mage Kepura", false),
        (LabyrinthMage, 31, 16, "Labyrinth Mage", false),
        (Seto2, 32, 18, "Seto 2nd", false),
        (Sebek, 33, 20, "Guardian Sebek", false),
        (Neku, 34, 20, "Guardian Neku", true),
        (Heishin2, 35, 20, "Heishin 2nd", false),
        (Seto3, 36, 20, "Seto 3rd", false),
        (DarkNite, 37, 20, "DarkNite", false),
        (Nitemare, 38, 20, "Nitemare", false),
        (DuelMasterK, 39, 15, "Duel Master K", false),
    ]
};

impl DuelistName {
    fn row(self) -> &'static (DuelistName, u32, u32, &'static str, bool) {
        // Table rows are in declaration order
        &DUELIST_TABLE[self as usize]
    }

    /// Every duelist in id order.
    pub fn all() -> impl Iterator<Item = DuelistName> {
        DUELIST_TABLE.iter().map(|row| row.0)
    }

    #[must_use]
    pub fn from_id(id: u32) -> Option<DuelistName> {
        DUELIST_TABLE.iter().find(|row| row.1 == id).map(|row| row.0)
    }

    #[must_use]
    pub fn id(self) -> u32 {
        self.row().1
    }

    /// Maximum cards the duelist holds in hand.
    #[must_use]
    pub fn hand_size(self) -> u32 {
        self.row().2
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.row().3
    }

    #[must_use]
    pub fn is_mage(self) -> bool {
        self.row().4
    }
}

impl std::fmt::Display for DuelistName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A duelist and one pool per [`PoolType`].
#[derive(Clone, Debug)]
pub struct Duelist {
    id: u32,
    pools: FxHashMap<PoolType, Pool>,
}

impl Duelist {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            pools: FxHashMap::default(),
        }
    }

    /// Attach a pool (builder pattern).
    #[must_use]
    pub fn with_pool(mut self, pool_type: PoolType, pool: Pool) -> Self {
        self.pools.insert(pool_type, pool);
        self
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Base-game name, if the id is one of the 39 vanilla duelists.
    #[must_use]
    pub fn name(&self) -> Option<DuelistName> {
        DuelistName::from_id(self.id)
    }

    #[must_use]
    pub fn pool(&self, pool_type: PoolType) -> Option<&Pool> {
        self.pools.get(&pool_type)
    }

    /// Like [`Self::pool`] but a missing pool is an error.
    pub fn require_pool(&self, pool_type: PoolType) -> Result<&Pool> {
        self.pool(pool_type).ok_or(ManipError::MissingPool {
            duelist: self.id,
            pool: pool_type,
        })
    }
}

impl PartialEq for Duelist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Duelist {}

impl std::fmt::Display for Duelist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Duelist({})", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_declaration_order() {
        for (i, name) in DuelistName::all().enumerate() {
            assert_eq!(name as usize, i);
            assert_eq!(name.id(), i as u32 + 1);
            assert_eq!(DuelistName::from_id(name.id()), Some(name));
        }
        assert_eq!(DuelistName::all().count(), 39);
    }

    #[test]
    fn test_duelist_facts() {
        assert_eq!(DuelistName::Heishin1.id(), 8);
        assert_eq!(DuelistName::Heishin1.hand_size(), 20);
        assert_eq!(DuelistName::Seto3.to_string(), "Seto 3rd");
        assert!(DuelistName::Neku.is_mage());
        assert!(!DuelistName::Secmeton.is_mage());
        assert_eq!(DuelistName::from_id(40), None);
    }

    #[test]
    fn test_missing_pool() {
        let duelist = Duelist::new(4).with_pool(PoolType::Bcd, Pool::default());
        assert!(duelist.pool(PoolType::Bcd).is_some());
        assert_eq!(
            duelist.require_pool(PoolType::Deck).unwrap_err(),
            ManipError::MissingPool { duelist: 4, pool: PoolType::Deck }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Duelist::new(4).to_string(), "Villager1");
        assert_eq!(Duelist::new(900).to_string(), "Duelist(900)");
    }
}
