//! Keno Engine: round orchestration over an explicit session state

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::KenoConfig;
use crate::draw::draw_system_numbers;
use crate::error::{ConfigError, PlayRejection};
use crate::history::{GameHistory, RoundRecord};
use crate::mode::{GameDrawings, GameMode};
use crate::paytable::PrizeTable;
use crate::round::{RevealSequence, RoundOutcome};
use crate::selection::SelectionSet;
use crate::session::{GamePhase, GameSession, SessionStats};
use crate::stage::StageEvent;
use crate::timing::{RevealClock, TimingConfig, TimingProfile};

/// Keno Engine
///
/// Owns the prize table, the session state and the completed-game history.
/// Every state change goes through a method here; rejected actions return
/// `false` or a [`PlayRejection`] and leave the state untouched.
pub struct KenoEngine {
    /// Configuration (prize table, timing, seed)
    config: KenoConfig,
    /// Session state
    session: GameSession,
    /// Completed games
    history: GameHistory,
    /// Cross-game statistics
    stats: SessionStats,
    /// Random number generator
    rng: StdRng,
    /// Timestamp generator for stage events
    clock: RevealClock,
}

impl KenoEngine {
    /// Create a new engine with default config
    pub fn new() -> Self {
        Self::with_config(KenoConfig::default())
    }

    /// Create with specific config
    pub fn with_config(config: KenoConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            rng,
            clock: RevealClock::new(config.timing.clone()),
            session: GameSession::new(config.cheat_mode),
            history: GameHistory::new(),
            stats: SessionStats::default(),
            config,
        }
    }

    /// Create with a custom prize table and otherwise default config
    pub fn with_prize_table(prize_table: PrizeTable) -> Self {
        Self::with_config(KenoConfig {
            prize_table,
            ..Default::default()
        })
    }

    /// Seeded engine with instant timing
    pub fn headless(seed: u64) -> Self {
        Self::with_config(KenoConfig::headless(seed))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Choose the spot count. Clears the selection.
    /// Rejected while a game is running.
    pub fn set_mode(&mut self, mode: GameMode) -> bool {
        if self.session.phase.in_game() {
            return false;
        }
        self.session.mode = Some(mode);
        self.session.selection.reset_capacity(mode.max_spots());
        self.session.refresh_phase();
        log::info!("Mode set to {}", mode);
        true
    }

    /// Choose the rounds per game. Rejected while a game is running.
    pub fn set_drawings(&mut self, drawings: GameDrawings) -> bool {
        if self.session.phase.in_game() {
            return false;
        }
        self.session.drawings = Some(drawings);
        self.session.refresh_phase();
        log::info!("Drawings set to {}", drawings);
        true
    }

    /// Toggle cheat mode for the next game. Rejected while a game is running.
    pub fn set_cheat_mode(&mut self, enabled: bool) -> bool {
        if self.session.phase.in_game() {
            return false;
        }
        self.session.cheat_mode = enabled;
        true
    }

    /// Set timing profile
    pub fn set_timing(&mut self, profile: TimingProfile) {
        self.config.timing = TimingConfig::from_profile(profile);
        self.clock = RevealClock::new(self.config.timing.clone());
    }

    /// Seed RNG for reproducible results
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn config(&self) -> &KenoConfig {
        &self.config
    }

    pub fn prize_table(&self) -> &PrizeTable {
        &self.config.prize_table
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SELECTION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Pick a number. False if no mode is set, a game is running, the number
    /// is off the board or already picked, or the selection is full.
    pub fn select_number(&mut self, number: u32) -> bool {
        if self.session.mode.is_none() || self.session.phase.in_game() {
            return false;
        }
        let added = self.session.selection.select(number);
        if added {
            self.session.refresh_phase();
        }
        added
    }

    /// Unpick a number, returning whether it was picked
    pub fn deselect_number(&mut self, number: u32) -> bool {
        if self.session.phase.in_game() {
            return false;
        }
        let removed = self.session.selection.deselect(number);
        if removed {
            self.session.refresh_phase();
        }
        removed
    }

    /// Drop all picks
    pub fn clear_selection(&mut self) -> bool {
        if self.session.phase.in_game() {
            return false;
        }
        self.session.selection.clear();
        self.session.refresh_phase();
        true
    }

    /// Replace the picks with a uniform quick pick for the current mode
    pub fn random_select_for_user(&mut self) -> Option<Vec<u8>> {
        if self.session.mode.is_none() || self.session.phase.in_game() {
            return None;
        }
        self.session.selection.quick_pick(&mut self.rng);
        self.session.refresh_phase();
        Some(self.session.selection.to_vec())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ROUND EXECUTION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Check whether a round may start now
    pub fn check_ready(&self) -> Result<(), PlayRejection> {
        match self.session.phase {
            GamePhase::Ready | GamePhase::RoundComplete | GamePhase::GameComplete => Ok(()),
            GamePhase::Drawing => Err(PlayRejection::RoundInProgress),
            GamePhase::Idle if self.session.mode.is_none() => Err(PlayRejection::NoMode),
            GamePhase::Idle => Err(PlayRejection::NoDrawings),
            GamePhase::AwaitingSelection => Err(PlayRejection::IncompleteSelection {
                remaining: self.session.selection.remaining(),
            }),
        }
    }

    /// Draw the system numbers and enter `Drawing`.
    ///
    /// Returns the reveal order for a front end to animate; call
    /// [`finish_round`](Self::finish_round) once it has been shown.
    pub fn begin_round(&mut self) -> Result<RevealSequence, PlayRejection> {
        if let Err(rejection) = self.check_ready() {
            log::warn!("Play rejected: {}", rejection);
            return Err(rejection);
        }

        if matches!(self.session.phase, GamePhase::Ready | GamePhase::GameComplete) {
            self.session.reset_counters();
        }
        self.session.current_round += 1;

        let draw = draw_system_numbers(
            &mut self.rng,
            self.session.cheat_mode,
            &self.session.selection,
        );
        log::debug!(
            "Round {}/{} draw{}: {:?}",
            self.session.current_round,
            self.session.total_rounds(),
            if self.session.cheat_mode { " (cheat)" } else { "" },
            draw.numbers()
        );

        let reveal = RevealSequence::new(&draw, &self.session.selection);
        self.session.pending_draw = Some(draw);
        self.session.phase = GamePhase::Drawing;
        Ok(reveal)
    }

    /// Score the pending draw, accumulate totals and advance the game
    pub fn finish_round(&mut self) -> Result<RoundOutcome, PlayRejection> {
        if self.session.phase != GamePhase::Drawing {
            return Err(PlayRejection::NotDrawing);
        }
        let Some(mode) = self.session.mode else {
            return Err(PlayRejection::NoMode);
        };
        let Some(draw) = self.session.pending_draw.take() else {
            return Err(PlayRejection::NotDrawing);
        };

        let mut outcome =
            RoundOutcome::evaluate(mode, &self.session.selection, draw, &self.config.prize_table);
        outcome.round = self.session.current_round;
        outcome.total_rounds = self.session.total_rounds();
        outcome.cheat_mode = self.session.cheat_mode;

        self.session.total_matches += u32::from(outcome.match_count);
        self.session.total_winnings += u64::from(outcome.prize);
        log::debug!(
            "Round {}/{} matched {:?} ({} hits, prize {})",
            outcome.round,
            outcome.total_rounds,
            outcome.matched_numbers,
            outcome.match_count,
            outcome.prize
        );

        if self.session.rounds_remaining() == 0 {
            outcome.game_record = Some(self.complete_game());
        } else {
            self.session.phase = GamePhase::RoundComplete;
        }

        self.stats.record_round(&outcome);
        Ok(outcome)
    }

    /// Draw and score one round
    pub fn start_round(&mut self) -> Result<RoundOutcome, PlayRejection> {
        self.begin_round()?;
        self.finish_round()
    }

    /// Play every remaining round of the current game
    pub fn play_game(&mut self) -> Result<Vec<RoundOutcome>, PlayRejection> {
        let mut outcomes = Vec::with_capacity(self.session.total_rounds() as usize);
        loop {
            let outcome = self.start_round()?;
            let done = outcome.is_game_complete();
            outcomes.push(outcome);
            if done {
                return Ok(outcomes);
            }
        }
    }

    fn complete_game(&mut self) -> RoundRecord {
        let record = RoundRecord {
            total_rounds: self.session.total_rounds(),
            total_matches: self.session.total_matches,
            total_prize: self.session.total_winnings,
        };
        self.history.record(record);
        log::info!(
            "Game complete: {} round(s), {} match(es), prize {}",
            record.total_rounds,
            record.total_matches,
            record.total_prize
        );

        self.session.reset_counters();
        self.session.cheat_mode = false;
        self.session.phase = GamePhase::GameComplete;
        record
    }

    /// Forget mode, drawings, selection and counters. History is kept.
    pub fn reset_game(&mut self) {
        self.session = GameSession::new(false);
        log::info!("Game reset");
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STAGE GENERATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Generate stage events for a round outcome
    pub fn generate_stages(&mut self, outcome: &RoundOutcome) -> Vec<StageEvent> {
        self.clock.reset();
        outcome.generate_stages(&self.config.prize_table, &mut self.clock)
    }

    /// Play a round and immediately generate stages
    pub fn start_round_with_stages(
        &mut self,
    ) -> Result<(RoundOutcome, Vec<StageEvent>), PlayRejection> {
        let outcome = self.start_round()?;
        let stages = self.generate_stages(&outcome);
        Ok((outcome, stages))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STATE ACCESS
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.session.mode
    }

    pub fn drawings(&self) -> Option<GameDrawings> {
        self.session.drawings
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.session.selection
    }

    pub fn is_cheat_mode(&self) -> bool {
        self.session.cheat_mode
    }

    /// Completed games, oldest first
    pub fn history(&self) -> &[RoundRecord] {
        self.history.records()
    }

    pub fn game_history(&self) -> &GameHistory {
        &self.history
    }

    /// History as a text table
    pub fn format_history(&self) -> String {
        self.history.format_table()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SessionStats::default();
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION
    // ═══════════════════════════════════════════════════════════════════════════

    /// Export config as JSON
    pub fn export_config(&self) -> Result<String, ConfigError> {
        self.config.to_json()
    }

    /// Import config from JSON. Applies to subsequent games; the session is kept.
    /// Rejected while a game is running so every round of a game is scored
    /// against one prize table.
    pub fn import_config(&mut self, json: &str) -> Result<(), ConfigError> {
        if self.session.phase.in_game() {
            return Err(ConfigError::GameInProgress);
        }
        let config = KenoConfig::from_json(json)?;
        if let Some(seed) = config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.clock = RevealClock::new(config.timing.clone());
        self.config = config;
        Ok(())
    }
}

impl Default for KenoEngine {
    fn default() -> Self {
        Self::new()
    }
}
