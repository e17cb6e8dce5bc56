//! Turn engine: alternates shots between two agents until one fleet is gone.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use log::{debug, info, warn};

use crate::agent::Agent;
use crate::board::Board;
use crate::common::MatchError;
use crate::config::DEFAULT_MAX_REPEAT_SHOTS;

/// One of the two sides of a match. Side A always shoots first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// Where a match stands between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingSideAShot,
    AwaitingSideBShot,
    SideAWon,
    SideBWon,
}

impl TurnState {
    fn awaiting(side: Side) -> Self {
        match side {
            Side::A => TurnState::AwaitingSideAShot,
            Side::B => TurnState::AwaitingSideBShot,
        }
    }

    fn won(side: Side) -> Self {
        match side {
            Side::A => TurnState::SideAWon,
            Side::B => TurnState::SideBWon,
        }
    }

    /// The side whose shot is due, if the match is still running.
    pub fn to_move(self) -> Option<Side> {
        match self {
            TurnState::AwaitingSideAShot => Some(Side::A),
            TurnState::AwaitingSideBShot => Some(Side::B),
            TurnState::SideAWon | TurnState::SideBWon => None,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            TurnState::SideAWon => Some(Side::A),
            TurnState::SideBWon => Some(Side::B),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.winner().is_some()
    }
}

/// Runtime knobs for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Consecutive repeat shots allowed within one turn before the match is
    /// abandoned. `None` keeps asking forever.
    pub max_repeat_shots: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            max_repeat_shots: Some(DEFAULT_MAX_REPEAT_SHOTS),
        }
    }
}

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Side,
    pub winner_name: String,
    /// Landing shots taken by side A.
    pub shots_a: usize,
    /// Landing shots taken by side B.
    pub shots_b: usize,
}

/// A single game between two agents.
///
/// The match owns both boards. Agents only ever see their own board and a
/// masked copy of the opponent's.
pub struct Match {
    agents: [Box<dyn Agent>; 2],
    boards: [Board; 2],
    shots: [usize; 2],
    state: TurnState,
    config: MatchConfig,
}

impl Match {
    /// Ask both agents for their boards and get ready for side A's first shot.
    pub fn new(agent_a: Box<dyn Agent>, agent_b: Box<dyn Agent>) -> Result<Self, MatchError> {
        Self::with_config(agent_a, agent_b, MatchConfig::default())
    }

    pub fn with_config(
        mut agent_a: Box<dyn Agent>,
        mut agent_b: Box<dyn Agent>,
        config: MatchConfig,
    ) -> Result<Self, MatchError> {
        let board_a = agent_a
            .initialize_board()
            .map_err(|source| MatchError::Agent { side: Side::A, source })?;
        let board_b = agent_b
            .initialize_board()
            .map_err(|source| MatchError::Agent { side: Side::B, source })?;
        Self::from_boards(agent_a, board_a, agent_b, board_b, config)
    }

    /// Start from boards prepared elsewhere. Each must carry the full fleet.
    pub fn from_boards(
        agent_a: Box<dyn Agent>,
        board_a: Board,
        agent_b: Box<dyn Agent>,
        board_b: Board,
        config: MatchConfig,
    ) -> Result<Self, MatchError> {
        for (side, board) in [(Side::A, &board_a), (Side::B, &board_b)] {
            if !board.is_fleet_complete() {
                return Err(MatchError::IncompleteFleet {
                    side,
                    ship_cells: board.ship_cells(),
                });
            }
        }
        debug!(
            "match ready: {} (A) vs {} (B)",
            agent_a.name(),
            agent_b.name()
        );
        Ok(Match {
            agents: [agent_a, agent_b],
            boards: [board_a, board_b],
            shots: [0; 2],
            state: TurnState::AwaitingSideAShot,
            config,
        })
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Landing shots taken so far by `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    pub fn name(&self, side: Side) -> &str {
        self.agents[side.index()].name()
    }

    /// Play out one turn: the side to move lands exactly one shot, then the
    /// opponent's fleet is checked. Returns the new state.
    pub fn step(&mut self) -> Result<TurnState, MatchError> {
        let side = self.state.to_move().ok_or(MatchError::AlreadyFinished)?;
        let target = side.opponent();

        self.land_shot(side)?;

        self.state = if self.boards[target.index()].alive_count() == 0 {
            info!("{} has won!", self.name(side));
            TurnState::won(side)
        } else {
            TurnState::awaiting(target)
        };
        Ok(self.state)
    }

    /// Play until one side wins.
    pub fn run(&mut self) -> Result<Outcome, MatchError> {
        loop {
            if let Some(winner) = self.state.winner() {
                return Ok(Outcome {
                    winner,
                    winner_name: String::from(self.name(winner)),
                    shots_a: self.shots(Side::A),
                    shots_b: self.shots(Side::B),
                });
            }
            self.step()?;
        }
    }

    /// Keep asking `side` for a target until one lands on a fresh cell.
    fn land_shot(&mut self, side: Side) -> Result<(), MatchError> {
        let (me, them) = (side.index(), side.opponent().index());
        let mut repeats = 0;
        loop {
            if self.boards[them].unshot_count() == 0 {
                return Err(MatchError::ExhaustedBoard { side });
            }
            let view = self.boards[them].mask();
            let (row, col) = self.agents[me]
                .choose_shot(&self.boards[me], &view)
                .map_err(|source| MatchError::Agent { side, source })?;
            let shot = self.boards[them]
                .shoot(row, col)
                .map_err(|_| MatchError::InvalidTarget { side, row, col })?;

            if !shot.repeat {
                self.shots[me] += 1;
                debug!(
                    "side {} shot ({}, {}): {}",
                    side,
                    row,
                    col,
                    if shot.hit { "hit" } else { "miss" }
                );
                self.agents[me].report_result(row, col, shot.hit);
                return Ok(());
            }

            warn!("side {} repeated a shot at ({}, {})", side, row, col);
            self.agents[me].report_repeat(row, col);
            repeats += 1;
            if let Some(limit) = self.config.max_repeat_shots {
                if repeats > limit {
                    return Err(MatchError::RepeatLimit {
                        side,
                        attempts: repeats,
                    });
                }
            }
        }
    }
}
