//! Game configuration
//!
//! A [`GameConfig`] comes from defaults, optionally a JSON file, and then
//! command-line overrides, in that order.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

use reversi_core::{Tile, Topology, MAX_HEX_SIDE_LEN, MIN_HEX_SIDE_LEN};

/// Who picks the moves for one color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Rule-based heuristic chain
    #[default]
    Ai,
    /// Corner seeking alone
    Corners,
    /// Corner-neighbor avoidance alone
    Avoid,
    /// Maximum capture alone
    Capture,
    /// Uniformly random legal move
    Random,
    /// Moves typed on stdin
    Human,
}

impl PlayerKind {
    pub fn is_human(self) -> bool {
        self == PlayerKind::Human
    }
}

/// Settings for a single game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub topology: Topology,
    /// Cells per hex edge; ignored for square boards
    pub side_len: usize,
    /// Player for the first color
    pub first: PlayerKind,
    /// Player for the second color
    pub second: PlayerKind,
    /// Moves and passes allowed before the game is abandoned
    pub max_actions: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Hex,
            side_len: 6,
            first: PlayerKind::Ai,
            second: PlayerKind::Random,
            max_actions: 1000,
        }
    }
}

impl GameConfig {
    /// Hex board with the given side length
    pub fn hex(side_len: usize) -> Self {
        Self {
            topology: Topology::Hex,
            side_len,
            ..Default::default()
        }
    }

    /// 8x8 square board
    pub fn square() -> Self {
        Self {
            topology: Topology::Square,
            side_len: reversi_core::SQUARE_SIDE_LEN,
            ..Default::default()
        }
    }

    pub fn with_players(mut self, first: PlayerKind, second: PlayerKind) -> Self {
        self.first = first;
        self.second = second;
        self
    }

    pub fn with_max_actions(mut self, max_actions: usize) -> Self {
        self.max_actions = max_actions;
        self
    }

    /// Same game with the player kinds trading colors
    pub fn swapped(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
            ..self.clone()
        }
    }

    pub fn player(&self, color: Tile) -> PlayerKind {
        match color {
            Tile::Second => self.second,
            _ => self.first,
        }
    }

    /// Load from JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let side_range = MIN_HEX_SIDE_LEN..=MAX_HEX_SIDE_LEN;
        if self.topology == Topology::Hex && !side_range.contains(&self.side_len) {
            bail!(
                "Hex side length must be between {} and {}, got {}",
                MIN_HEX_SIDE_LEN,
                MAX_HEX_SIDE_LEN,
                self.side_len
            );
        }
        if self.max_actions == 0 {
            bail!("max-actions must be positive");
        }
        Ok(())
    }
}

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

/// Game options shared by every command
#[derive(Args, Debug, Default)]
pub struct GameArgs {
    /// JSON game config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board shape: hex or square
    #[arg(long, value_parser = parse_topology)]
    pub topology: Option<Topology>,

    /// Cells per hex edge
    #[arg(long)]
    pub side_len: Option<usize>,

    /// Player for the first color
    #[arg(long, value_enum)]
    pub first: Option<PlayerKind>,

    /// Player for the second color
    #[arg(long, value_enum)]
    pub second: Option<PlayerKind>,

    /// Moves and passes allowed per game
    #[arg(long)]
    pub max_actions: Option<usize>,
}

impl GameArgs {
    /// Build the config: file (or defaults), then flag overrides
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(topology) = self.topology {
            config.topology = topology;
        }
        if let Some(side_len) = self.side_len {
            config.side_len = side_len;
        }
        if let Some(first) = self.first {
            config.first = first;
        }
        if let Some(second) = self.second {
            config.second = second;
        }
        if let Some(max_actions) = self.max_actions {
            config.max_actions = max_actions;
        }
        if config.topology == Topology::Square {
            config.side_len = reversi_core::SQUARE_SIDE_LEN;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_topology(value: &str) -> std::result::Result<Topology, String> {
    match value.to_ascii_lowercase().as_str() {
        "hex" => Ok(Topology::Hex),
        "square" => Ok(Topology::Square),
        other => Err(format!("unknown topology '{}', expected hex or square", other)),
    }
}
