//! Rank tables - Total orders over categorical stat values

use serde::Serialize;

/// Fixed mapping from a categorical value to its rank
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RankTable {
    pub name: &'static str,
    /// Upper-case keys paired with ranks, lowest rank first
    pub entries: &'static [(&'static str, u8)],
}

impl RankTable {
    /// Rank of `key`, or `None` when the table does not know it
    pub fn rank(&self, key: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, rank)| *rank)
    }

    /// Rank of `key`, falling back to the lowest rank for unknown keys
    pub fn rank_or_lowest(&self, key: &str) -> u8 {
        match self.rank(key) {
            Some(rank) => rank,
            None => {
                tracing::warn!(
                    table = self.name,
                    key,
                    "Unknown value, ranking it as the lowest entry"
                );
                self.lowest()
            }
        }
    }

    pub fn lowest(&self) -> u8 {
        self.entries.iter().map(|(_, rank)| *rank).min().unwrap_or(0)
    }
}

pub const RARITY_RANKS: RankTable = RankTable {
    name: "rarity",
    entries: &[
        ("COMMON", 1),
        ("UNIQUE", 2),
        ("RARE", 3),
        ("LEGENDARY", 4),
        ("SET", 5),
        ("FABLED", 6),
        ("MYTHIC", 7),
    ],
};

pub const ATTACK_SPEED_RANKS: RankTable = RankTable {
    name: "attack_speed",
    entries: &[
        ("SUPER_SLOW", 1),
        ("VERY_SLOW", 2),
        ("SLOW", 3),
        ("NORMAL", 4),
        ("FAST", 5),
        ("VERY_FAST", 6),
        ("SUPER_FAST", 7),
    ],
};
