//! Human player driven from a terminal
//!
//! Each prompt shows the board and asks for `row col` or `pass`. Rejected
//! input is reported and asked for again, so the engine only ever sees
//! legal placements from here.

use std::io::{self, BufRead, BufReader, Stderr, Stdin, Write};

use anyhow::{bail, Context, Result};

use reversi_core::{Position, ReadonlyReversi, Tile, Topology};

use crate::render::render;

/// What the player typed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Place(Position),
    Pass,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stderr> {
    /// Reads stdin and prompts on stderr, leaving stdout for results
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for a move for `color`; `None` means the player passes
    pub fn choose_move(
        &mut self,
        game: &dyn ReadonlyReversi,
        topology: Topology,
        color: Tile,
    ) -> Result<Option<Position>> {
        let board = game.copy_board()?;
        writeln!(self.output, "\n{}", render(&board, topology, game.side_len()))?;

        loop {
            write!(self.output, "{} to move (row col, or pass): ", color)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                bail!("Input closed while waiting for {} to move", color);
            }

            match parse_command(&line) {
                Some(Command::Pass) => return Ok(None),
                Some(Command::Place(pos)) => match game.check_move(pos.row, pos.col, color) {
                    Ok(()) => return Ok(Some(pos)),
                    Err(err) => writeln!(self.output, "Illegal move: {}", err)?,
                },
                None => writeln!(self.output, "Expected two numbers or 'pass'")?,
            }
        }
    }
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("pass") {
        return Some(Command::Pass);
    }

    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Place(Position::new(row, col)))
}
