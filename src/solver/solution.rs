//! Matching results handed to the presentation layer.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::engine::find_set_matches;
use crate::cards::{Card, Locator};

/// One Set found on a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetMatch {
    /// Board positions, strictly ascending.
    pub positions: [usize; 3],
    /// The cards at those positions.
    pub cards: [Card; 3],
}

impl SetMatch {
    pub(crate) fn new(positions: [usize; 3], cards: [Card; 3]) -> Self {
        Self { positions, cards }
    }

    /// True if the card at `position` is part of this Set.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Descriptions of the three cards, in position order.
    #[must_use]
    pub fn descriptions(&self) -> [String; 3] {
        self.cards.map(|card| card.description())
    }

    /// Locators of the three cards, for highlighting.
    #[must_use]
    pub fn locators(&self) -> [Locator; 3] {
        self.cards.map(|card| card.locator())
    }
}

/// A board together with every Set on it.
///
/// This is what a UI keeps between the detection pass and the user picking
/// a Set from the list: it answers which cards to highlight for a selection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    board: Board,
    matches: Vec<SetMatch>,
}

impl Solution {
    /// Find every Set on `board`.
    #[must_use]
    pub fn solve(board: Board) -> Self {
        let matches = find_set_matches(&board);
        Self { board, matches }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Sets in canonical order.
    #[must_use]
    pub fn matches(&self) -> &[SetMatch] {
        &self.matches
    }

    /// Number of Sets found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True when the board holds no Set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    #[must_use]
    pub fn get(&self, set_index: usize) -> Option<&SetMatch> {
        self.matches.get(set_index)
    }

    /// Membership test: is the card at `position` part of Set `set_index`?
    ///
    /// Out-of-range indices are simply not selected.
    #[must_use]
    pub fn is_selected(&self, set_index: usize, position: usize) -> bool {
        self.get(set_index)
            .is_some_and(|found| found.contains(position))
    }

    /// Positions that take part in at least one Set.
    #[must_use]
    pub fn positions_in_any_set(&self) -> FxHashSet<usize> {
        self.matches
            .iter()
            .flat_map(|found| found.positions)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::parse_detections;

    fn solution(labels: &[&str]) -> Solution {
        let board = parse_detections(
            labels
                .iter()
                .enumerate()
                .map(|(i, label)| (*label, Locator::new(i as f32 * 0.1, 0.0, 0.1, 0.2))),
        );
        Solution::solve(board)
    }

    #[test]
    fn test_selection_membership() {
        let sol = solution(&["0000", "1111", "0001", "2222", "0002"]);
        assert_eq!(sol.len(), 2);

        assert!(sol.is_selected(0, 0));
        assert!(sol.is_selected(0, 3));
        assert!(!sol.is_selected(0, 2));
        assert!(sol.is_selected(1, 4));
        assert!(!sol.is_selected(1, 1));
        assert!(!sol.is_selected(2, 0));
    }

    #[test]
    fn test_positions_in_any_set() {
        let sol = solution(&["0000", "1111", "2222", "0120"]);
        let positions = sol.positions_in_any_set();
        assert_eq!(positions.len(), 3);
        assert!(!positions.contains(&3));
    }

    #[test]
    fn test_no_sets() {
        let sol = solution(&["0000", "0000", "1111"]);
        assert!(sol.is_empty());
        assert!(sol.positions_in_any_set().is_empty());
        assert_eq!(sol.board().len(), 3);
    }

    #[test]
    fn test_presentation_data() {
        let sol = solution(&["0000", "1111", "2222"]);
        let found = &sol.matches()[0];
        assert_eq!(
            found.descriptions(),
            [
                "1 red full oval".to_string(),
                "2 green empty diamond".to_string(),
                "3 purple striped squiggle".to_string(),
            ]
        );
        assert_eq!(found.locators()[2], Locator::new(0.2, 0.0, 0.1, 0.2));
    }

    #[test]
    fn test_serialization() {
        let sol = solution(&["0000", "1111", "2222"]);
        let json = serde_json::to_string(&sol).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(sol, back);
    }
}
