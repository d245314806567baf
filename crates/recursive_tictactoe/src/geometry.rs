//! Screen geometry shared with renderers and input sources.
//!
//! The board is a square of `side` pixels split into a 3x3 grid at every
//! level, with integer division at each step. These helpers are pure and
//! have no say in move legality.

use crate::action::PathFault;
use crate::path::Path;
use crate::position::Position;
use tracing::instrument;

/// A pixel coordinate; `x` grows rightwards, `y` downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column in pixels.
    pub x: u32,
    /// Row in pixels.
    pub y: u32,
}

impl Point {
    /// Creates a point.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned square on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Side length.
    pub side: u32,
}

impl Rect {
    /// Checks whether a point lies inside the square.
    pub fn contains(&self, point: Point) -> bool {
        (self.x..self.x + self.side).contains(&point.x)
            && (self.y..self.y + self.side).contains(&point.y)
    }
}

/// Result of hit-testing a point down to a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Full path from the root to the cell.
    pub path: Path,
    /// Position of the cell within its leaf board.
    pub cell: Position,
}

fn cells_per_side(depth: usize) -> u32 {
    u32::try_from(depth)
        .ok()
        .and_then(|depth| 3u32.checked_pow(depth))
        .unwrap_or(u32::MAX)
}

/// Largest multiple of `3^depth` not above `target`, so every cell gets an
/// integer side. Never smaller than `3^depth`.
pub fn fit_side_length(target: u32, depth: usize) -> u32 {
    let unit = cells_per_side(depth);
    (target / unit).max(1).saturating_mul(unit)
}

/// Resolves a point on a board of `side` pixels to the cell under it.
///
/// At each of the `depth` levels the current square is split in thirds, the
/// child containing the point is chosen (row-major index), and the point is
/// made relative to that child's square.
///
/// # Errors
///
/// [`PathFault::OutsideBoard`] if the point is not on the board or the
/// board is too small to subdivide `depth` times.
#[instrument]
pub fn locate(point: Point, side: u32, depth: usize) -> Result<Hit, PathFault> {
    let outside = PathFault::OutsideBoard {
        x: point.x,
        y: point.y,
        side,
    };
    if point.x >= side || point.y >= side || depth == 0 {
        return Err(outside);
    }

    let (mut row_px, mut col_px, mut size) =
        (u64::from(point.y), u64::from(point.x), u64::from(side));
    let mut positions = Vec::with_capacity(depth);
    for _ in 0..depth {
        if size == 0 {
            return Err(outside);
        }
        let row = (row_px * 3 / size).min(2);
        let col = (col_px * 3 / size).min(2);
        row_px -= row * size / 3;
        col_px -= col * size / 3;
        size /= 3;

        let pos = Position::from_row_col(row as usize, col as usize).ok_or(outside)?;
        positions.push(pos);
    }

    let path = Path::from(positions);
    let cell = path.last().ok_or(outside)?;
    Ok(Hit { path, cell })
}

/// Square covered by the board or cell at `path` on a board of `side`
/// pixels; used to highlight the active region.
pub fn region_rect(path: &Path, side: u32) -> Rect {
    path.positions()
        .iter()
        .fold(Rect { x: 0, y: 0, side }, |rect, pos| {
            let side = rect.side / 3;
            Rect {
                x: rect.x + side * pos.col() as u32,
                y: rect.y + side * pos.row() as u32,
                side,
            }
        })
}

/// Top-left pixel of the board or cell at `path`.
pub fn cell_origin(path: &Path, side: u32) -> Point {
    let rect = region_rect(path, side);
    Point::new(rect.x, rect.y)
}
