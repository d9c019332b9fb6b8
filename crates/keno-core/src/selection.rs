//! Player number selection

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::BOARD_SIZE;

/// Check a raw number against the board range
pub fn board_number(number: u32) -> Option<u8> {
    u8::try_from(number)
        .ok()
        .filter(|&n| (1..=BOARD_SIZE).contains(&n))
}

/// The player's picks, bounded by the current mode's spot count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    numbers: BTreeSet<u8>,
    capacity: u8,
}

impl SelectionSet {
    /// Empty selection that accepts up to `capacity` numbers
    pub fn with_capacity(capacity: u8) -> Self {
        Self {
            numbers: BTreeSet::new(),
            capacity: capacity.min(BOARD_SIZE),
        }
    }

    /// Add a number. Returns false and leaves the set unchanged if the number
    /// is off the board, already picked, or the set is full.
    pub fn select(&mut self, number: u32) -> bool {
        let Some(n) = board_number(number) else {
            return false;
        };
        if self.is_full() || self.numbers.contains(&n) {
            return false;
        }
        self.numbers.insert(n)
    }

    /// Remove a number, returning whether it was present
    pub fn deselect(&mut self, number: u32) -> bool {
        board_number(number).is_some_and(|n| self.numbers.remove(&n))
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.numbers.len() >= self.capacity as usize
    }

    /// Picks still needed to fill the set
    pub fn remaining(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.numbers.len())
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    /// Change the capacity; existing picks are discarded
    pub fn reset_capacity(&mut self, capacity: u8) {
        *self = Self::with_capacity(capacity);
    }

    /// Replace the picks with `capacity` distinct uniform numbers
    pub fn quick_pick<R: Rng>(&mut self, rng: &mut R) {
        self.numbers = rand::seq::index::sample(rng, BOARD_SIZE as usize, self.capacity as usize)
            .into_iter()
            .map(|i| i as u8 + 1)
            .collect();
    }

    /// Picks in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.numbers.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_select_valid() {
        let mut set = SelectionSet::with_capacity(10);

        for n in [1, 20, 40, 60, 80] {
            assert!(set.select(n));
            assert!(set.contains(n as u8));
        }
        assert_eq!(set.len(), 5);
        assert_eq!(set.remaining(), 5);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut set = SelectionSet::with_capacity(10);

        for n in [0, 81, 100, 256, u32::MAX] {
            assert!(!set.select(n));
        }
        assert!(set.is_empty());
    }

    #[test]
    fn test_select_duplicate() {
        let mut set = SelectionSet::with_capacity(4);

        assert!(set.select(7));
        assert!(!set.select(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_select_when_full() {
        let mut set = SelectionSet::with_capacity(1);

        assert!(set.select(5));
        assert!(set.is_full());
        assert!(!set.select(6));
        assert_eq!(set.to_vec(), vec![5]);
    }

    #[test]
    fn test_deselect_once() {
        let mut set = SelectionSet::with_capacity(4);
        set.select(10);

        assert!(set.deselect(10));
        assert!(!set.deselect(10));
        assert!(!set.deselect(99));
    }

    #[test]
    fn test_quick_pick() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut set = SelectionSet::with_capacity(10);
        set.select(3);

        set.quick_pick(&mut rng);

        assert_eq!(set.len(), 10);
        assert!(set.iter().all(|n| (1..=BOARD_SIZE).contains(&n)));
    }

    #[test]
    fn test_reset_capacity_clears() {
        let mut set = SelectionSet::with_capacity(4);
        set.select(1);
        set.select(2);

        set.reset_capacity(8);

        assert!(set.is_empty());
        assert_eq!(set.capacity(), 8);
    }
}
