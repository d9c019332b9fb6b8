//! Round stages: the semantic moments of a draw, with timestamps
//!
//! A front end schedules these to animate the reveal, highlight prize tiers
//! and trigger sounds. The engine never waits on them.

use serde::{Deserialize, Serialize};

/// Canonical round stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundStage {
    /// Play pressed, draw about to be revealed
    RoundStart {
        /// 1-based round within the game
        round: u8,
        total_rounds: u8,
        /// Draw was seeded with the player's picks
        cheat_mode: bool,
    },

    /// One drawn number shown on the board
    NumberRevealed {
        number: u8,
        /// Number is one of the player's picks
        hit: bool,
        /// Running match count including this number
        matches: u8,
    },

    /// Running match count landed on a prize tier
    TierReached { hits: u8, prize: u32 },

    /// Round scored
    RoundEnd {
        matches: u8,
        prize: u32,
        /// Explicit prize-table combination
        jackpot: bool,
    },

    /// Result presented to the player
    ResultShown {
        /// Last round of the game
        game_complete: bool,
    },
}

impl RoundStage {
    /// Get stage type name
    pub fn type_name(&self) -> &'static str {
        match self {
            RoundStage::RoundStart { .. } => "round_start",
            RoundStage::NumberRevealed { .. } => "number_revealed",
            RoundStage::TierReached { .. } => "tier_reached",
            RoundStage::RoundEnd { .. } => "round_end",
            RoundStage::ResultShown { .. } => "result_shown",
        }
    }
}

/// A stage occurrence with its timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageEvent {
    /// The stage
    pub stage: RoundStage,

    /// Milliseconds from round start
    pub timestamp_ms: f64,
}

impl StageEvent {
    pub fn new(stage: RoundStage, timestamp_ms: f64) -> Self {
        Self {
            stage,
            timestamp_ms,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.stage.type_name()
    }
}
