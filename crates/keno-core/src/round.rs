//! Round outcome, reveal sequence and stage event generation

use serde::{Deserialize, Serialize};

use crate::draw::DrawResult;
use crate::history::RoundRecord;
use crate::mode::GameMode;
use crate::paytable::PrizeTable;
use crate::selection::SelectionSet;
use crate::stage::{RoundStage, StageEvent};
use crate::timing::RevealClock;

/// One drawn number as it is revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealStep {
    /// Position in the reveal order (0-based)
    pub index: usize,
    pub number: u8,
    /// Number is one of the player's picks
    pub hit: bool,
    /// Matches revealed so far, including this step
    pub matches_so_far: u8,
}

/// Ordered reveal of a draw against a selection
#[derive(Debug, Clone)]
pub struct RevealSequence {
    numbers: Vec<u8>,
    selection: SelectionSet,
    index: usize,
    matches: u8,
}

impl RevealSequence {
    pub fn new(draw: &DrawResult, selection: &SelectionSet) -> Self {
        Self {
            numbers: draw.numbers().to_vec(),
            selection: selection.clone(),
            index: 0,
            matches: 0,
        }
    }

    /// Matches revealed so far
    pub fn matches(&self) -> u8 {
        self.matches
    }
}

impl Iterator for RevealSequence {
    type Item = RevealStep;

    fn next(&mut self) -> Option<RevealStep> {
        let number = *self.numbers.get(self.index)?;
        let hit = self.selection.contains(number);
        if hit {
            self.matches += 1;
        }
        let step = RevealStep {
            index: self.index,
            number,
            hit,
            matches_so_far: self.matches,
        };
        self.index += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.numbers.len() - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RevealSequence {}

/// Complete result of one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// 1-based round within the game
    pub round: u8,
    /// Rounds in this game
    pub total_rounds: u8,
    pub mode: GameMode,
    /// Draw was seeded with the player's picks
    pub cheat_mode: bool,
    /// Player's picks for this round
    pub selection: SelectionSet,
    /// System draw
    pub draw: DrawResult,
    /// Picks that were drawn, ascending
    pub matched_numbers: Vec<u8>,
    pub match_count: u8,
    /// Payout multiplier from the prize table
    pub prize: u32,
    /// (spots, matches) is an explicit prize-table combination
    pub is_jackpot: bool,
    /// Set on the last round of a game
    pub game_record: Option<RoundRecord>,
}

impl RoundOutcome {
    /// Score a draw against a selection
    pub fn evaluate(
        mode: GameMode,
        selection: &SelectionSet,
        draw: DrawResult,
        table: &PrizeTable,
    ) -> Self {
        let spots = mode.max_spots();
        let matched_numbers = draw.matched_numbers(selection);
        let match_count = matched_numbers.len() as u8;

        Self {
            round: 1,
            total_rounds: 1,
            mode,
            cheat_mode: false,
            selection: selection.clone(),
            draw,
            matched_numbers,
            match_count,
            prize: table.prize_for(spots, match_count),
            is_jackpot: table.is_winning_combo(spots, match_count),
            game_record: None,
        }
    }

    /// Check if this round paid anything
    pub fn is_win(&self) -> bool {
        self.prize > 0
    }

    /// Last round of its game
    pub fn is_game_complete(&self) -> bool {
        self.game_record.is_some()
    }

    /// Reveal steps in draw order
    pub fn reveals(&self) -> RevealSequence {
        RevealSequence::new(&self.draw, &self.selection)
    }

    /// Generate all stage events for this round
    pub fn generate_stages(&self, table: &PrizeTable, clock: &mut RevealClock) -> Vec<StageEvent> {
        let spots = self.mode.max_spots();
        let mut events = Vec::with_capacity(self.draw.len() + 8);

        // 1. Round start, with the zero-hit tier lit if the mode has one
        let start = clock.current();
        events.push(StageEvent::new(
            RoundStage::RoundStart {
                round: self.round,
                total_rounds: self.total_rounds,
                cheat_mode: self.cheat_mode,
            },
            start,
        ));
        if table.is_winning_combo(spots, 0) {
            events.push(StageEvent::new(
                RoundStage::TierReached {
                    hits: 0,
                    prize: table.prize_for(spots, 0),
                },
                start,
            ));
        }

        // 2. Reveals; a hit that lands on a tier lights it
        for step in self.reveals() {
            let at = clock.reveal(step.index);
            events.push(StageEvent::new(
                RoundStage::NumberRevealed {
                    number: step.number,
                    hit: step.hit,
                    matches: step.matches_so_far,
                },
                at,
            ));
            if step.hit && table.is_winning_combo(spots, step.matches_so_far) {
                events.push(StageEvent::new(
                    RoundStage::TierReached {
                        hits: step.matches_so_far,
                        prize: table.prize_for(spots, step.matches_so_far),
                    },
                    at,
                ));
            }
        }

        // 3. Scoring
        events.push(StageEvent::new(
            RoundStage::RoundEnd {
                matches: self.match_count,
                prize: self.prize,
                jackpot: self.is_jackpot,
            },
            clock.settle(),
        ));

        // 4. Result
        events.push(StageEvent::new(
            RoundStage::ResultShown {
                game_complete: self.is_game_complete(),
            },
            clock.result(),
        ));

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::TimingConfig;

    fn four_spot_selection() -> SelectionSet {
        let mut selection = SelectionSet::with_capacity(4);
        for n in [3, 7, 12, 40] {
            selection.select(n);
        }
        selection
    }

    fn sample_draw() -> DrawResult {
        DrawResult::from_numbers([
            1, 2, 5, 7, 12, 15, 18, 21, 25, 29, 33, 37, 44, 48, 52, 57, 61, 66, 70, 79,
        ])
    }

    #[test]
    fn test_evaluate_four_spot() {
        let table = PrizeTable::standard();
        let outcome =
            RoundOutcome::evaluate(GameMode::FourSpot, &four_spot_selection(), sample_draw(), &table);

        assert_eq!(outcome.match_count, 2);
        assert_eq!(outcome.prize, 1);
        assert!(outcome.is_jackpot);
        assert_eq!(outcome.matched_numbers, vec![7, 12]);
    }

    #[test]
    fn test_reveal_sequence() {
        let outcome = RoundOutcome::evaluate(
            GameMode::FourSpot,
            &four_spot_selection(),
            sample_draw(),
            &PrizeTable::standard(),
        );

        let steps: Vec<RevealStep> = outcome.reveals().collect();
        assert_eq!(steps.len(), 20);
        assert_eq!(steps[3].number, 7);
        assert!(steps[3].hit);
        assert_eq!(steps[3].matches_so_far, 1);
        assert_eq!(steps[4].matches_so_far, 2);
        assert_eq!(steps.last().map(|s| s.matches_so_far), Some(2));
    }

    #[test]
    fn test_stage_generation() {
        let table = PrizeTable::standard();
        let outcome =
            RoundOutcome::evaluate(GameMode::FourSpot, &four_spot_selection(), sample_draw(), &table);
        let mut clock = RevealClock::new(TimingConfig::normal());

        let stages = outcome.generate_stages(&table, &mut clock);

        assert!(matches!(stages.first().unwrap().stage, RoundStage::RoundStart { .. }));
        assert!(matches!(stages.last().unwrap().stage, RoundStage::ResultShown { .. }));

        let reveals = stages
            .iter()
            .filter(|e| matches!(e.stage, RoundStage::NumberRevealed { .. }))
            .count();
        assert_eq!(reveals, 20);

        // Only the 2-hit tier is reached
        let tiers: Vec<&RoundStage> = stages
            .iter()
            .map(|e| &e.stage)
            .filter(|s| matches!(s, RoundStage::TierReached { .. }))
            .collect();
        assert_eq!(tiers, vec![&RoundStage::TierReached { hits: 2, prize: 1 }]);

        assert!(stages.windows(2).all(|w| w[0].timestamp_ms <= w[1].timestamp_ms));
        assert_eq!(stages.last().unwrap().timestamp_ms, 5300.0);
    }

    #[test]
    fn test_zero_hit_tier_lit_at_start() {
        let table = PrizeTable::standard();
        let mut selection = SelectionSet::with_capacity(10);
        for n in [3, 4, 6, 8, 9, 10, 11, 13, 14, 16] {
            selection.select(n);
        }
        let outcome = RoundOutcome::evaluate(GameMode::TenSpot, &selection, sample_draw(), &table);
        let mut clock = RevealClock::new(TimingConfig::instant());

        let stages = outcome.generate_stages(&table, &mut clock);

        assert_eq!(outcome.match_count, 0);
        assert_eq!(outcome.prize, 5);
        assert_eq!(stages[1].stage, RoundStage::TierReached { hits: 0, prize: 5 });
    }
}
