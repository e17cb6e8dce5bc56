//! Ship kinds and placement geometry.
//!
//! Ships are not stored as objects on the board. A placement is resolved into
//! a [`Span`], the rectangle of cells it would cover, and the board marks those
//! cells in its ship plane.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::PlacementError;
use crate::config::BOARD_SIZE;

type Grid = BitBoard<u128, BOARD_SIZE>;

/// Direction a ship extends from its anchor cell.
///
/// `Invalid` is a real variant: random placement draws it like any other
/// direction and it always fails to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing row.
    Up,
    /// Toward increasing row.
    Down,
    /// Toward decreasing column.
    Left,
    /// Toward increasing column.
    Right,
    Invalid,
}

impl Direction {
    /// Every variant, `Invalid` included.
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Invalid,
    ];

    /// Row and column step, or `None` for `Invalid`.
    pub fn delta(self) -> Option<(isize, isize)> {
        match self {
            Direction::Up => Some((-1, 0)),
            Direction::Down => Some((1, 0)),
            Direction::Left => Some((0, -1)),
            Direction::Right => Some((0, 1)),
            Direction::Invalid => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Invalid => "invalid",
        };
        f.write_str(s)
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Inclusive rectangle of cells covered by one placement, always 1×len or len×1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

impl Span {
    /// Resolve a ship of `length` anchored at (`row`, `col`) and extending
    /// `length - 1` cells in `direction`.
    ///
    /// The far endpoint is computed first and the two endpoints are then
    /// normalized, so `Up` from (4, 0) and `Down` from (0, 0) cover the same
    /// cells.
    pub fn resolve(
        length: usize,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Self, PlacementError> {
        if length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        let (dr, dc) = direction.delta().ok_or(PlacementError::InvalidDirection)?;
        if length > BOARD_SIZE {
            return Err(PlacementError::OutOfBounds);
        }
        let reach = (length - 1) as isize;
        let end_row = row as isize + dr * reach;
        let end_col = col as isize + dc * reach;

        let limit = BOARD_SIZE as isize;
        let in_bounds = |v: isize| (0..limit).contains(&v);
        if !in_bounds(row as isize)
            || !in_bounds(col as isize)
            || !in_bounds(end_row)
            || !in_bounds(end_col)
        {
            return Err(PlacementError::OutOfBounds);
        }

        let (end_row, end_col) = (end_row as usize, end_col as usize);
        Ok(Span {
            top: row.min(end_row),
            left: col.min(end_col),
            bottom: row.max(end_row),
            right: col.max(end_col),
        })
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        (self.bottom - self.top + 1) * (self.right - self.left + 1)
    }

    /// Top-left and bottom-right corners.
    pub fn corners(&self) -> ((usize, usize), (usize, usize)) {
        ((self.top, self.left), (self.bottom, self.right))
    }

    /// Covered cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (top, bottom, left, right) = (self.top, self.bottom, self.left, self.right);
        (top..=bottom).flat_map(move |r| (left..=right).map(move |c| (r, c)))
    }

    /// Occupancy grid of the span.
    pub(crate) fn mask(&self) -> Grid {
        let mut grid = Grid::new();
        for (r, c) in self.cells() {
            // resolve() already bounds-checked both corners
            let _ = grid.set(r, c);
        }
        grid
    }
}
