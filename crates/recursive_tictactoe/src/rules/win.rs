//! Line detection.

use crate::position::Position;
use crate::types::Outcome;

/// The eight winning lines: rows, columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the shared outcome of the first line holding three equal
/// decided slots, or `None` if no line is complete.
pub fn completed_line(slots: &[Outcome; 9]) -> Option<Outcome> {
    LINES.iter().find_map(|[a, b, c]| {
        let first = slots[a.to_index()];
        (first.is_decided()
            && first == slots[b.to_index()]
            && first == slots[c.to_index()])
            .then_some(first)
    })
}
