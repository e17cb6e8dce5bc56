//! Error types shared by the board and the turn engine.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::game::Side;

/// Errors returned by [`Board`](crate::Board) queries and shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates outside the 10×10 grid.
    OutOfBounds { row: usize, col: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
        }
    }
}

/// Why a ship placement was refused. A refusal leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Part of the ship would fall off the board.
    OutOfBounds,
    /// Part of the ship would cover a cell that is not empty.
    Collision,
    /// `Direction::Invalid` was requested.
    InvalidDirection,
    ZeroLength,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            PlacementError::Collision => write!(f, "ship placement overlaps another ship"),
            PlacementError::InvalidDirection => write!(f, "ship direction is invalid"),
            PlacementError::ZeroLength => write!(f, "ship length must be at least one"),
        }
    }
}

/// Errors that stop a match.
#[derive(Debug)]
pub enum MatchError {
    /// An agent returned a board without the full fleet on it.
    IncompleteFleet { side: Side, ship_cells: usize },
    /// An agent aimed outside the board.
    InvalidTarget { side: Side, row: usize, col: usize },
    /// The opponent board has no unshot cell left to aim at.
    ExhaustedBoard { side: Side },
    /// An agent kept proposing already-shot cells.
    RepeatLimit { side: Side, attempts: usize },
    /// `step` was called after a winner was decided.
    AlreadyFinished,
    /// An agent failed to produce a board or a shot.
    Agent { side: Side, source: anyhow::Error },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::IncompleteFleet { side, ship_cells } => write!(
                f,
                "side {} returned a board with {} ship cells, expected a full fleet",
                side, ship_cells
            ),
            MatchError::InvalidTarget { side, row, col } => {
                write!(f, "side {} aimed outside the board at ({}, {})", side, row, col)
            }
            MatchError::ExhaustedBoard { side } => {
                write!(f, "side {} has no unshot cells left to target", side)
            }
            MatchError::RepeatLimit { side, attempts } => write!(
                f,
                "side {} repeated an earlier shot {} times in one turn",
                side, attempts
            ),
            MatchError::AlreadyFinished => write!(f, "match already has a winner"),
            MatchError::Agent { side, source } => write!(f, "side {} agent failed: {}", side, source),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Agent { source, .. } => Some(&**source),
            _ => None,
        }
    }
}
