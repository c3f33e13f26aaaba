//! Exhaustive Set enumeration.
//!
//! Every combination of three board positions is checked exactly once, with
//! `i < j < k` and all indices ascending. Results come out in that order,
//! which callers rely on for stable presentation across repeated calls.
//! Boards hold at most a couple dozen cards, so the cubic scan is cheap.

use log::trace;

use super::board::Board;
use super::rule::is_set;
use super::solution::SetMatch;
use crate::cards::Card;

/// All Sets on the board, as the three cards of each.
///
/// ```
/// use set_solver::detection::parse_detections;
/// use set_solver::cards::Locator;
/// use set_solver::solver::find_sets;
///
/// let board = parse_detections([
///     ("0000", Locator::default()),
///     ("1111", Locator::default()),
///     ("2222", Locator::default()),
/// ]);
/// assert_eq!(find_sets(&board).len(), 1);
/// ```
#[must_use]
pub fn find_sets(board: &Board) -> Vec<[Card; 3]> {
    find_set_matches(board)
        .into_iter()
        .map(|found| found.cards)
        .collect()
}

/// All Sets on the board, with the positions they were found at.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(board), fields(cards = board.len()))
)]
#[must_use]
pub fn find_set_matches(board: &Board) -> Vec<SetMatch> {
    let n = board.len();
    let mut found = Vec::new();
    if n < 3 {
        return found;
    }

    let cards = board.cards();
    for i in 0..n - 2 {
        for j in i + 1..n - 1 {
            for k in j + 1..n {
                if is_set(&cards[i], &cards[j], &cards[k]) {
                    found.push(SetMatch::new([i, j, k], [cards[i], cards[j], cards[k]]));
                }
            }
        }
    }

    trace!("found {} sets among {} cards", found.len(), n);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Locator;
    use crate::detection::parse_detections;

    fn board(labels: &[&str]) -> Board {
        parse_detections(labels.iter().map(|label| (*label, Locator::default())))
    }

    #[test]
    fn test_small_boards_are_empty() {
        assert!(find_sets(&board(&[])).is_empty());
        assert!(find_sets(&board(&["0000"])).is_empty());
        assert!(find_sets(&board(&["0000", "1111"])).is_empty());
    }

    #[test]
    fn test_single_set() {
        let sets = find_set_matches(&board(&["0000", "1111", "2222"]));
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].positions, [0, 1, 2]);
    }

    #[test]
    fn test_pair_plus_odd_card() {
        assert!(find_sets(&board(&["0000", "0000", "1111"])).is_empty());
    }

    #[test]
    fn test_shape_cycle() {
        // shape codes 1, 2, 0 sum to 3; other attributes all zero
        assert_eq!(find_sets(&board(&["0001", "0002", "0000"])).len(), 1);
    }

    #[test]
    fn test_canonical_order() {
        // 0000 / 1111 / 2222 and 0000 / 0001 / 0002 share position 0
        let sets = find_set_matches(&board(&["0000", "1111", "0001", "2222", "0002"]));
        let positions: Vec<[usize; 3]> = sets.iter().map(|s| s.positions).collect();
        assert_eq!(positions, vec![[0, 1, 3], [0, 2, 4]]);
    }

    #[test]
    fn test_identical_cards_form_set() {
        let sets = find_sets(&board(&["1201", "1201", "1201"]));
        assert_eq!(sets.len(), 1);
    }

    #[test]
    fn test_cards_match_positions() {
        let b = board(&["2222", "0120", "1111", "0000"]);
        for found in find_set_matches(&b) {
            for (slot, position) in found.positions.iter().enumerate() {
                assert_eq!(found.cards[slot], b[*position]);
            }
        }
    }
}
