//! Game mode (spot count) and drawings-per-game settings

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of spots the player picks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameMode {
    OneSpot,
    FourSpot,
    EightSpot,
    TenSpot,
}

impl GameMode {
    /// All modes in ascending spot order
    pub const ALL: [GameMode; 4] = [
        GameMode::OneSpot,
        GameMode::FourSpot,
        GameMode::EightSpot,
        GameMode::TenSpot,
    ];

    /// Selections required (and allowed) in this mode
    pub fn max_spots(self) -> u8 {
        match self {
            GameMode::OneSpot => 1,
            GameMode::FourSpot => 4,
            GameMode::EightSpot => 8,
            GameMode::TenSpot => 10,
        }
    }

    /// Look up a mode by spot count
    pub fn from_spots(spots: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.max_spots() == spots)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GameMode::OneSpot => "1 Spot",
            GameMode::FourSpot => "4 Spot",
            GameMode::EightSpot => "8 Spot",
            GameMode::TenSpot => "10 Spot",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Rounds drawn per game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameDrawings {
    One,
    Two,
    Three,
    Four,
}

impl GameDrawings {
    pub const ALL: [GameDrawings; 4] = [
        GameDrawings::One,
        GameDrawings::Two,
        GameDrawings::Three,
        GameDrawings::Four,
    ];

    /// Total rounds in a game with this setting
    pub fn max_drawings(self) -> u8 {
        match self {
            GameDrawings::One => 1,
            GameDrawings::Two => 2,
            GameDrawings::Three => 3,
            GameDrawings::Four => 4,
        }
    }

    pub fn from_count(count: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.max_drawings() == count)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GameDrawings::One => "1 round",
            GameDrawings::Two => "2 round",
            GameDrawings::Three => "3 round",
            GameDrawings::Four => "4 round",
        }
    }
}

impl fmt::Display for GameDrawings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
