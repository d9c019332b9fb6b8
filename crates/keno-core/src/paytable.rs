//! Prize table and odds lookup

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mode::GameMode;

/// A single payout tier within a mode's row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTier {
    /// Matches required
    pub hits: u8,
    /// Payout multiplier
    pub prize: u32,
}

/// Complete prize table
///
/// Keyed by spot count, then by hit count. Only explicit entries are winning
/// combinations; an entry may still pay nothing if configured that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeTable {
    /// spots → (hits → multiplier)
    prizes: BTreeMap<u8, BTreeMap<u8, u32>>,
    /// spots → odds of any win (1 in N)
    odds: BTreeMap<u8, f64>,
}

impl PrizeTable {
    /// Create the standard Keno prize table
    pub fn standard() -> Self {
        let mut table = Self::empty();

        table.insert_row(1, &[(1, 2)], 4.00);
        table.insert_row(4, &[(2, 1), (3, 5), (4, 75)], 3.86);
        table.insert_row(
            8,
            &[(4, 2), (5, 12), (6, 50), (7, 750), (8, 10_000)],
            9.77,
        );
        table.insert_row(
            10,
            &[
                (0, 5),
                (5, 2),
                (6, 15),
                (7, 40),
                (8, 450),
                (9, 4_250),
                (10, 100_000),
            ],
            9.05,
        );

        table
    }

    /// Table with no rows
    pub fn empty() -> Self {
        Self {
            prizes: BTreeMap::new(),
            odds: BTreeMap::new(),
        }
    }

    /// Replace one mode's row and odds
    pub fn insert_row(&mut self, spots: u8, tiers: &[(u8, u32)], odds: f64) {
        self.prizes.insert(spots, tiers.iter().copied().collect());
        self.odds.insert(spots, odds);
    }

    /// Payout multiplier for `hits` matches in a `spots` game (0 if not a tier)
    pub fn prize_for(&self, spots: u8, hits: u8) -> u32 {
        self.prizes
            .get(&spots)
            .and_then(|row| row.get(&hits))
            .copied()
            .unwrap_or(0)
    }

    /// True iff (spots, hits) is an explicit tier
    pub fn is_winning_combo(&self, spots: u8, hits: u8) -> bool {
        self.prizes
            .get(&spots)
            .is_some_and(|row| row.contains_key(&hits))
    }

    /// Odds of any win for a `spots` game (0.0 if unknown)
    pub fn odds_for(&self, spots: u8) -> f64 {
        self.odds.get(&spots).copied().unwrap_or(0.0)
    }

    /// Tiers for a spot count in ascending hit order
    pub fn tiers(&self, spots: u8) -> Vec<PrizeTier> {
        self.prizes
            .get(&spots)
            .map(|row| {
                row.iter()
                    .map(|(&hits, &prize)| PrizeTier { hits, prize })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Tiers for a game mode
    pub fn tiers_for_mode(&self, mode: GameMode) -> Vec<PrizeTier> {
        self.tiers(mode.max_spots())
    }

    /// Highest payout available in a mode
    pub fn top_prize(&self, spots: u8) -> u32 {
        self.prizes
            .get(&spots)
            .and_then(|row| row.values().max().copied())
            .unwrap_or(0)
    }

    /// Spot counts that have a row
    pub fn spot_counts(&self) -> impl Iterator<Item = u8> + '_ {
        self.prizes.keys().copied()
    }
}

impl Default for PrizeTable {
    fn default() -> Self {
        Self::standard()
    }
}
