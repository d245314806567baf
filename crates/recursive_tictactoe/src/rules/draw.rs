//! Full-board detection.

use crate::types::Outcome;

/// Checks if no slot is still open.
///
/// A full board with no completed line is a tie.
pub fn is_full(slots: &[Outcome; 9]) -> bool {
    slots.iter().all(|slot| slot.is_decided())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&[Outcome::Undecided; 9]));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut slots = [Outcome::Won(Player::X); 9];
        slots[4] = Outcome::Undecided;
        assert!(!is_full(&slots));
    }

    #[test]
    fn test_ties_count_as_filled() {
        let mut slots = [Outcome::Won(Player::O); 9];
        slots[0] = Outcome::Tie;
        assert!(is_full(&slots));
    }
}
