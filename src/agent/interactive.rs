#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::{bail, Context};
use log::warn;

use crate::board::Board;
use crate::config::{BOARD_SIZE, FLEET};
use crate::ship::Direction;

use super::Agent;

/// Operator-driven agent reading commands from a text stream.
///
/// Positions are typed column letter then row digit, e.g. `A0` or `j9`.
/// Directions are `U`, `D`, `L` or `R`.
pub struct InteractiveAgent<R, W> {
    input: R,
    output: W,
    name: String,
}

impl InteractiveAgent<StdinLock<'static>, Stdout> {
    /// Agent bound to the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractiveAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            name: String::from("Human"),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Hand back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read operator input")?;
        if n == 0 {
            bail!("operator input closed");
        }
        Ok(line.trim().to_string())
    }

    fn prompt_position(&mut self) -> anyhow::Result<(usize, usize)> {
        loop {
            write!(self.output, "(enter ColRow, e.g. 'A1') ")?;
            let line = self.read_line()?;
            match parse_position(&line) {
                Some(pos) => return Ok(pos),
                None => writeln!(self.output, "Invalid input")?,
            }
        }
    }

    fn prompt_direction(&mut self) -> anyhow::Result<Direction> {
        loop {
            writeln!(self.output, "What orientation?")?;
            write!(self.output, "(U/D/L/R) ")?;
            let line = self.read_line()?;
            match parse_direction(&line) {
                Some(direction) => return Ok(direction),
                None => writeln!(self.output, "Invalid input")?,
            }
        }
    }
}

/// Parse `ColRow` such as `C7` into `(row, col)`. Case insensitive; anything
/// after the row digit is ignored.
pub fn parse_position(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let row_ch = chars.next()?;
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row = row_ch.to_digit(10)? as usize;
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row, col))
}

/// Parse a direction from its first letter: `U`, `D`, `L` or `R`.
pub fn parse_direction(input: &str) -> Option<Direction> {
    match input.trim().chars().next()?.to_ascii_uppercase() {
        'U' => Some(Direction::Up),
        'D' => Some(Direction::Down),
        'L' => Some(Direction::Left),
        'R' => Some(Direction::Right),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Agent for InteractiveAgent<R, W> {
    fn initialize_board(&mut self) -> anyhow::Result<Board> {
        let mut board = Board::new();
        for ship in FLEET.iter() {
            loop {
                writeln!(self.output, "{}", board)?;
                writeln!(
                    self.output,
                    "Where do you want to place your {} (length {})?",
                    ship.name(),
                    ship.length()
                )?;
                let (row, col) = self.prompt_position()?;
                let direction = self.prompt_direction()?;
                match board.try_place_ship(ship.length(), row, col, direction) {
                    Ok(()) => break,
                    Err(e) => writeln!(self.output, "Invalid placement: {}.", e)?,
                }
            }
        }
        Ok(board)
    }

    fn choose_shot(&mut self, own: &Board, opponent: &Board) -> anyhow::Result<(usize, usize)> {
        writeln!(self.output, "Opponent board:\n{}", opponent)?;
        writeln!(self.output, "Your board:\n{}", own)?;
        writeln!(self.output, "Where would you like to shoot?")?;
        self.prompt_position()
    }

    fn report_result(&mut self, _row: usize, _col: usize, hit: bool) {
        let msg = if hit { "That was a hit!" } else { "That was a miss!" };
        let _ = writeln!(self.output, "{}", msg);
        let _ = write!(self.output, "Enter to continue...");
        if let Err(e) = self.read_line() {
            warn!("{}: {:#}", self.name, e);
        }
    }

    fn report_repeat(&mut self, _row: usize, _col: usize) {
        let _ = writeln!(self.output, "Can't repeat a play!");
    }

    fn name(&self) -> &str {
        &self.name
    }
}
