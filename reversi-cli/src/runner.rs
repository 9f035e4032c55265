//! Game runner - plays a single game between two configured players

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use reversi_core::{
    AiPlayer, AvoidCornerNeighbors, Board, CaptureMostPieces, Geometry, GoForCorners, Position,
    ReadonlyReversi, Reversi, ReversiError, Strategy, Tile, Topology,
};

use crate::config::{GameConfig, PlayerKind};
use crate::console::Console;

/// What a player did on their turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    Move { row: usize, col: usize },
    Pass,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
    pub player: Tile,
    #[serde(flatten)]
    pub action: Action,
}

/// Outcome of a single game
#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    pub topology: Topology,
    pub side_len: usize,
    pub first_player: PlayerKind,
    pub second_player: PlayerKind,
    /// Every move and explicit pass, in order
    pub actions: Vec<ActionRecord>,
    /// Turn-change notifications, forced passes included
    pub turn_changes: usize,
    pub first_score: usize,
    pub second_score: usize,
    /// `None` for a draw or an abandoned game
    pub winner: Option<Tile>,
    /// False if the action limit stopped the game
    pub finished: bool,
    #[serde(skip)]
    pub board: Board,
}

impl GameRecord {
    pub fn is_draw(&self) -> bool {
        self.finished && self.winner.is_none()
    }
}

/// Play a game to completion (or to the action limit); human players use
/// the terminal
pub fn play_game(config: &GameConfig, rng: &mut ChaCha8Rng) -> Result<GameRecord> {
    play_game_with(config, rng, &mut Console::stdio())
}

/// [`play_game`] with human moves read through `console`
pub fn play_game_with<R: BufRead, W: Write>(
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    console: &mut Console<R, W>,
) -> Result<GameRecord> {
    match config.topology {
        Topology::Hex => play_on(Reversi::hex(config.side_len)?, config, rng, console),
        Topology::Square => play_on(Reversi::square(), config, rng, console),
    }
}

fn play_on<G: Geometry, R: BufRead, W: Write>(
    mut game: Reversi<G>,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    console: &mut Console<R, W>,
) -> Result<GameRecord> {
    let turn_changes = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&turn_changes);
    game.set_turn_listener(move |turn| {
        counter.set(counter.get() + 1);
        tracing::trace!("Turn passed to {}", turn);
    });

    game.start()?;

    let mut actions = Vec::new();
    while !game.is_game_over() && actions.len() < config.max_actions {
        let player = game.turn()?;
        let kind = config.player(player);
        let action = match choose_move(&game, config.topology, kind, player, rng, console)? {
            Some(pos) => {
                game.make_move(pos.row, pos.col)?;
                Action::Move {
                    row: pos.row,
                    col: pos.col,
                }
            }
            None => {
                game.pass()?;
                Action::Pass
            }
        };
        actions.push(ActionRecord { player, action });
    }

    let finished = game.is_game_over();
    if !finished {
        tracing::warn!("Game abandoned after {} actions", actions.len());
    }
    let winner = if finished {
        match game.winner() {
            Ok(tile) => Some(tile),
            Err(ReversiError::Draw) => None,
            Err(err) => return Err(err.into()),
        }
    } else {
        None
    };

    Ok(GameRecord {
        topology: config.topology,
        side_len: game.side_len(),
        first_player: config.first,
        second_player: config.second,
        actions,
        turn_changes: turn_changes.get(),
        first_score: game.score(Tile::First),
        second_score: game.score(Tile::Second),
        winner,
        finished,
        board: game.board().clone(),
    })
}

/// Ask the player of `color` for a move; `None` means pass
fn choose_move<R: BufRead, W: Write>(
    game: &dyn ReadonlyReversi,
    topology: Topology,
    kind: PlayerKind,
    color: Tile,
    rng: &mut ChaCha8Rng,
    console: &mut Console<R, W>,
) -> Result<Option<Position>> {
    let mv = match kind {
        PlayerKind::Ai => AiPlayer::new(color).choose_move(game),
        PlayerKind::Corners => GoForCorners.choose_move(game, color),
        PlayerKind::Avoid => AvoidCornerNeighbors.choose_move(game, color),
        PlayerKind::Capture => CaptureMostPieces.choose_move(game, color),
        PlayerKind::Random => game.legal_moves(color)?.choose(rng).copied(),
        PlayerKind::Human => console.choose_move(game, topology, color)?,
    };
    Ok(mv)
}

/// Create RNG from seed or random
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
