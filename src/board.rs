//! One side's 10×10 board: where its ships are and where it has been shot.
//!
//! Cell state is two independent bits held in two bit grids. The ship plane
//! marks cells covered by a ship and the shot plane marks cells the opponent
//! has fired on. Together they give the four [`Cell`] states. Bits are only
//! ever set, never cleared, so `Empty` can only become `Miss` and `Ship` can
//! only become `HitShip`.

use core::fmt;
use log::debug;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, PlacementError};
use crate::config::{BOARD_SIZE, FLEET_CELLS};
use crate::ship::{Direction, Span};

type Grid = BitBoard<u128, BOARD_SIZE>;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No ship, not shot.
    Empty,
    /// Ship present, not shot.
    Ship,
    /// No ship, shot.
    Miss,
    /// Ship present, shot.
    HitShip,
}

impl Cell {
    /// Combine the ship and shot bits.
    pub fn from_bits(ship: bool, shot: bool) -> Self {
        match (ship, shot) {
            (false, false) => Cell::Empty,
            (true, false) => Cell::Ship,
            (false, true) => Cell::Miss,
            (true, true) => Cell::HitShip,
        }
    }

    pub fn has_ship(self) -> bool {
        matches!(self, Cell::Ship | Cell::HitShip)
    }

    pub fn is_shot(self) -> bool {
        matches!(self, Cell::Miss | Cell::HitShip)
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Ship => 'S',
            Cell::Miss => 'O',
            Cell::HitShip => 'X',
        }
    }
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    /// The cell had already been shot; nothing changed.
    pub repeat: bool,
    /// The cell holds a ship.
    pub hit: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    ships: Grid,
    shots: Grid,
}

impl Board {
    /// An all-`Empty` board.
    pub fn new() -> Self {
        Board {
            ships: Grid::new(),
            shots: Grid::new(),
        }
    }

    /// State of the cell at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let ship = self.ships.get(row, col)?;
        let shot = self.shots.get(row, col)?;
        Ok(Cell::from_bits(ship, shot))
    }

    /// Opponent-facing copy: unshot ship cells read as `Empty`, shot history
    /// is kept.
    pub fn mask(&self) -> Board {
        Board {
            ships: self.ships & self.shots,
            shots: self.shots,
        }
    }

    /// Fire at (`row`, `col`).
    ///
    /// A cell that was already shot reports `repeat: true` and is left
    /// unchanged; `hit` always reflects whether a ship is there.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<Shot, BoardError> {
        let hit = self.ships.get(row, col)?;
        if self.shots.get(row, col)? {
            return Ok(Shot { repeat: true, hit });
        }
        self.shots.set(row, col)?;
        Ok(Shot { repeat: false, hit })
    }

    /// Cells in state `Ship`. Zero means this side has lost.
    pub fn alive_count(&self) -> usize {
        (self.ships & !self.shots).count_ones()
    }

    /// Cells carrying a ship, hit or not.
    pub fn ship_cells(&self) -> usize {
        self.ships.count_ones()
    }

    /// Whether the whole fleet has been placed.
    pub fn is_fleet_complete(&self) -> bool {
        self.ship_cells() == FLEET_CELLS
    }

    pub fn unshot_count(&self) -> usize {
        (!self.shots).count_ones()
    }

    /// Cells that have not been shot yet, row-major.
    pub fn unshot_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        (!self.shots).cells()
    }

    /// Place a ship, returning `false` if it does not fit.
    pub fn place_ship(&mut self, length: usize, row: usize, col: usize, direction: Direction) -> bool {
        self.try_place_ship(length, row, col, direction).is_ok()
    }

    /// Place a ship of `length` anchored at (`row`, `col`) and extending in
    /// `direction`.
    ///
    /// Every covered cell must currently be `Empty`. The whole span is checked
    /// before any cell is written, so a refused placement leaves the board as
    /// it was.
    pub fn try_place_ship(
        &mut self,
        length: usize,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<(), PlacementError> {
        let span = Span::resolve(length, row, col, direction)?;
        let mask = span.mask();
        if !((self.ships | self.shots) & mask).is_empty() {
            return Err(PlacementError::Collision);
        }
        self.ships = self.ships | mask;
        debug!(
            "placed ship of length {} at ({}, {}) heading {}",
            length, row, col, direction
        );
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{}", r)?;
            for c in 0..BOARD_SIZE {
                let cell = self.cell(r, c).map_err(|_| fmt::Error)?;
                write!(f, " {}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
