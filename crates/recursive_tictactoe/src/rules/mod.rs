//! Win rule for a single 3x3 board.
//!
//! The rule is the same at every nesting level: the nine slots are the
//! outcomes of the child boards, or the cells of a leaf board seen as
//! one-cell outcomes. Rules are pure functions separated from board storage.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, completed_line};

use crate::types::Outcome;

/// Resolves nine slot outcomes into the outcome of their board.
///
/// A line of three equal decided slots decides the board with that value
/// (so a line of three ties is a tie). Otherwise a board with no open slot
/// is a tie, and anything else is still undecided.
pub fn evaluate(slots: &[Outcome; 9]) -> Outcome {
    if let Some(outcome) = completed_line(slots) {
        return outcome;
    }
    if is_full(slots) {
        return Outcome::Tie;
    }
    Outcome::Undecided
}
