use alloc::string::String;
use anyhow::anyhow;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Direction, ShipType};

use super::Agent;

/// Computer opponent making uniformly random legal moves.
///
/// All randomness comes from the generator handed in at construction, so a
/// fixed seed replays the same game.
pub struct RandomAgent {
    rng: SmallRng,
    name: String,
}

impl RandomAgent {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            name: String::from("Computer"),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Drop `ship` at a random anchor and direction until it fits.
    fn place_randomly(&mut self, board: &mut Board, ship: &ShipType) -> anyhow::Result<()> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = self.rng.random_range(0..BOARD_SIZE);
            let col = self.rng.random_range(0..BOARD_SIZE);
            let direction = random_direction(&mut self.rng);
            if board.place_ship(ship.length(), row, col, direction) {
                return Ok(());
            }
        }
        Err(anyhow!(
            "unable to place {} after {} attempts",
            ship.name(),
            MAX_PLACEMENT_ATTEMPTS
        ))
    }
}

/// Uniform over all five directions; `Invalid` comes up one time in five and
/// simply fails to place.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[rng.random_range(0..Direction::ALL.len())]
}

impl Agent for RandomAgent {
    fn initialize_board(&mut self) -> anyhow::Result<Board> {
        let mut board = Board::new();
        for ship in FLEET.iter() {
            self.place_randomly(&mut board, ship)?;
        }
        debug!("{} placed its fleet", self.name);
        Ok(board)
    }

    fn choose_shot(&mut self, _own: &Board, opponent: &Board) -> anyhow::Result<(usize, usize)> {
        let open = opponent.unshot_count();
        if open == 0 {
            return Err(anyhow!("no unshot cells left on the opponent board"));
        }
        let pick = self.rng.random_range(0..open);
        let (row, col) = opponent
            .unshot_cells()
            .nth(pick)
            .ok_or_else(|| anyhow!("unshot cell {} vanished", pick))?;
        info!("{} shot at {},{}", self.name, row, col);
        Ok((row, col))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
