//! Tile colors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Contents of a playable cell, also used as the color of a player.
///
/// `First` always moves first. The current turn is never `Empty`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    First,
    Second,
    Empty,
}

impl Tile {
    /// The opposing color. `Empty` has no opponent and maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Tile::First => Tile::Second,
            Tile::Second => Tile::First,
            Tile::Empty => Tile::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    /// Single-character symbol used by text renderings
    pub fn symbol(self) -> char {
        match self {
            Tile::First => 'X',
            Tile::Second => 'O',
            Tile::Empty => '_',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Tile::First.opposite(), Tile::Second);
        assert_eq!(Tile::Second.opposite(), Tile::First);
        assert_eq!(Tile::First.opposite().opposite(), Tile::First);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Tile::First.to_string(), "X");
        assert_eq!(Tile::Second.to_string(), "O");
        assert_eq!(Tile::Empty.to_string(), "_");
        assert!(Tile::Empty.is_empty());
        assert!(!Tile::Second.is_empty());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Tile::First).unwrap(), r#""first""#);
        assert_eq!(serde_json::from_str::<Tile>(r#""empty""#).unwrap(), Tile::Empty);
        assert!(serde_json::from_str::<Tile>(r#""X""#).is_err());
    }
}
