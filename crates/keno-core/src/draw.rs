//! System draw: 20 distinct numbers from the 80-ball board

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::selection::SelectionSet;
use crate::{BOARD_SIZE, DRAW_COUNT};

/// One round's drawn numbers, held in ascending (reveal) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    numbers: Vec<u8>,
}

impl DrawResult {
    /// Build from already-drawn numbers; sorts and dedups
    pub fn from_numbers(numbers: impl IntoIterator<Item = u8>) -> Self {
        let numbers: BTreeSet<u8> = numbers.into_iter().collect();
        Self {
            numbers: numbers.into_iter().collect(),
        }
    }

    /// Drawn numbers in ascending order
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Selected numbers that were drawn, ascending
    pub fn matched_numbers(&self, selection: &SelectionSet) -> Vec<u8> {
        self.numbers
            .iter()
            .copied()
            .filter(|&n| selection.contains(n))
            .collect()
    }

    /// |selection ∩ draw|
    pub fn match_count(&self, selection: &SelectionSet) -> u8 {
        self.numbers.iter().filter(|&&n| selection.contains(n)).count() as u8
    }
}

/// Draw the system numbers for a round.
///
/// With `cheat_mode` every selected number is placed in the draw first, so
/// they all match; the rest of the 20 slots are filled uniformly.
pub fn draw_system_numbers<R: Rng>(
    rng: &mut R,
    cheat_mode: bool,
    selection: &SelectionSet,
) -> DrawResult {
    let mut drawn: BTreeSet<u8> = if cheat_mode {
        selection.iter().take(DRAW_COUNT).collect()
    } else {
        BTreeSet::new()
    };

    while drawn.len() < DRAW_COUNT {
        drawn.insert(rng.random_range(1..=BOARD_SIZE));
    }

    DrawResult {
        numbers: drawn.into_iter().collect(),
    }
}
