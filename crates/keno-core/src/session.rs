//! Session state: phase, settings, selection and running totals

use serde::{Deserialize, Serialize};

use crate::draw::DrawResult;
use crate::mode::{GameDrawings, GameMode};
use crate::round::RoundOutcome;
use crate::selection::SelectionSet;

/// Where the session is in the round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Mode or drawings not chosen yet
    Idle,
    /// Settings chosen, selection not full
    AwaitingSelection,
    /// Selection full, play allowed
    Ready,
    /// System numbers drawn, being revealed
    Drawing,
    /// A round finished and more remain in this game
    RoundComplete,
    /// Last round finished and recorded. Settings and picks are kept, so
    /// playing again starts a new game; any edit recomputes the phase.
    GameComplete,
}

impl GamePhase {
    /// A game has started and not yet finished
    pub fn in_game(self) -> bool {
        matches!(self, GamePhase::Drawing | GamePhase::RoundComplete)
    }
}

/// All mutable state of one player session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    pub mode: Option<GameMode>,
    pub drawings: Option<GameDrawings>,
    pub selection: SelectionSet,
    pub cheat_mode: bool,
    /// Rounds started in the current game (1-based once playing)
    pub current_round: u8,
    /// Matches accumulated in the current game
    pub total_matches: u32,
    /// Prize accumulated in the current game
    pub total_winnings: u64,
    /// Draw awaiting scoring while in `Drawing`
    pub pending_draw: Option<DrawResult>,
}

impl GameSession {
    pub fn new(cheat_mode: bool) -> Self {
        Self {
            phase: GamePhase::Idle,
            mode: None,
            drawings: None,
            selection: SelectionSet::default(),
            cheat_mode,
            current_round: 0,
            total_matches: 0,
            total_winnings: 0,
            pending_draw: None,
        }
    }

    /// Rounds in the current game (0 when no drawings chosen)
    pub fn total_rounds(&self) -> u8 {
        self.drawings.map(GameDrawings::max_drawings).unwrap_or(0)
    }

    /// Selections the current mode requires (0 when no mode chosen)
    pub fn required_spots(&self) -> u8 {
        self.mode.map(GameMode::max_spots).unwrap_or(0)
    }

    /// Rounds still to draw in the current game
    pub fn rounds_remaining(&self) -> u8 {
        self.total_rounds().saturating_sub(self.current_round)
    }

    /// Recompute the phase from settings and selection.
    /// Does nothing while a game is running.
    pub fn refresh_phase(&mut self) {
        if self.phase.in_game() {
            return;
        }
        self.phase = if self.mode.is_none() || self.drawings.is_none() {
            GamePhase::Idle
        } else if self.selection.is_full() {
            GamePhase::Ready
        } else {
            GamePhase::AwaitingSelection
        };
    }

    /// Clear per-game counters and leave the game
    pub fn reset_counters(&mut self) {
        self.current_round = 0;
        self.total_matches = 0;
        self.total_winnings = 0;
        self.pending_draw = None;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Statistics across every round played in the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds_played: u64,
    pub games_completed: u64,
    pub total_matches: u64,
    pub total_winnings: u64,
    /// Rounds that hit an explicit prize-table combination
    pub jackpot_rounds: u64,
    pub best_round_prize: u32,
}

impl SessionStats {
    pub fn record_round(&mut self, outcome: &RoundOutcome) {
        self.rounds_played += 1;
        self.total_matches += u64::from(outcome.match_count);
        self.total_winnings += u64::from(outcome.prize);
        if outcome.is_jackpot {
            self.jackpot_rounds += 1;
        }
        self.best_round_prize = self.best_round_prize.max(outcome.prize);
        if outcome.is_game_complete() {
            self.games_completed += 1;
        }
    }

    /// Percentage of rounds that hit a prize-table combination
    pub fn hit_rate(&self) -> f64 {
        if self.rounds_played > 0 {
            (self.jackpot_rounds as f64 / self.rounds_played as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_from_settings() {
        let mut session = GameSession::default();
        session.refresh_phase();
        assert_eq!(session.phase, GamePhase::Idle);

        session.mode = Some(GameMode::OneSpot);
        session.selection.reset_capacity(1);
        session.refresh_phase();
        assert_eq!(session.phase, GamePhase::Idle);

        session.drawings = Some(GameDrawings::Two);
        session.refresh_phase();
        assert_eq!(session.phase, GamePhase::AwaitingSelection);

        session.selection.select(42);
        session.refresh_phase();
        assert_eq!(session.phase, GamePhase::Ready);
    }

    #[test]
    fn test_refresh_ignored_in_game() {
        let mut session = GameSession::default();
        session.phase = GamePhase::RoundComplete;

        session.refresh_phase();

        assert_eq!(session.phase, GamePhase::RoundComplete);
    }

    #[test]
    fn test_refresh_leaves_game_complete() {
        let mut session = GameSession::default();
        session.mode = Some(GameMode::OneSpot);
        session.drawings = Some(GameDrawings::One);
        session.selection.reset_capacity(1);
        session.phase = GamePhase::GameComplete;
        assert!(!session.phase.in_game());

        session.refresh_phase();

        assert_eq!(session.phase, GamePhase::AwaitingSelection);
    }

    #[test]
    fn test_rounds_remaining() {
        let mut session = GameSession::default();
        session.drawings = Some(GameDrawings::Three);
        session.current_round = 1;

        assert_eq!(session.total_rounds(), 3);
        assert_eq!(session.rounds_remaining(), 2);
    }

    #[test]
    fn test_empty_stats_hit_rate() {
        assert_eq!(SessionStats::default().hit_rate(), 0.0);
    }
}
