//! Agents: whoever makes the decisions for one side.
//!
//! - `RandomAgent`: places and shoots uniformly at random from a seeded RNG
//! - `InteractiveAgent`: asks an operator over a text stream (requires `std`)

use alloc::boxed::Box;

use crate::board::Board;

/// Decision-making interface for one side of a match.
///
/// Agents never mutate the match boards. They build their own board once,
/// then pick targets from read-only views.
pub trait Agent {
    /// Produce a board with the whole fleet placed.
    fn initialize_board(&mut self) -> anyhow::Result<Board>;

    /// Pick the next target given this side's board and a masked view of the
    /// opponent's. The target need not be fresh; repeats are re-requested.
    fn choose_shot(&mut self, own: &Board, opponent: &Board) -> anyhow::Result<(usize, usize)>;

    /// Outcome of this agent's latest landing shot.
    fn report_result(&mut self, _row: usize, _col: usize, _hit: bool) {}

    /// The latest target had already been shot and did not count.
    fn report_repeat(&mut self, _row: usize, _col: usize) {}

    /// Label used when announcing the winner.
    fn name(&self) -> &str;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn initialize_board(&mut self) -> anyhow::Result<Board> {
        (**self).initialize_board()
    }

    fn choose_shot(&mut self, own: &Board, opponent: &Board) -> anyhow::Result<(usize, usize)> {
        (**self).choose_shot(own, opponent)
    }

    fn report_result(&mut self, row: usize, col: usize, hit: bool) {
        (**self).report_result(row, col, hit)
    }

    fn report_repeat(&mut self, row: usize, col: usize) {
        (**self).report_repeat(row, col)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub mod random;
pub use random::RandomAgent;

#[cfg(feature = "std")]
pub mod interactive;
#[cfg(feature = "std")]
pub use interactive::{parse_direction, parse_position, InteractiveAgent};
