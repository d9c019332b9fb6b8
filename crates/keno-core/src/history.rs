//! Completed-game history

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

/// Summary of one completed game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Rounds drawn in the game
    pub total_rounds: u8,
    /// Matches summed over all rounds
    pub total_matches: u32,
    /// Prize summed over all rounds
    pub total_prize: u64,
}

/// Ordered list of completed games
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameHistory {
    records: Vec<RoundRecord>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn record(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    /// Records in the order they were played
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prize summed over every recorded game
    pub fn lifetime_prize(&self) -> u64 {
        self.records.iter().map(|r| r.total_prize).sum()
    }

    /// Render all records as a text table
    pub fn format_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<6} {:<14} {:<15} {}",
            "ID", "Total Rounds", "Total Matches", "Total Winnings"
        );
        let _ = writeln!(out, "{}", "-".repeat(53));
        for (i, record) in self.records.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:<6} {:<14} {:<15} ${}",
                i + 1,
                record.total_rounds,
                record.total_matches,
                record.total_prize
            );
        }
        out
    }
}

impl fmt::Display for GameHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_table())
    }
}
