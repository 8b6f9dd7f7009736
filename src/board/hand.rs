//! Hands and players.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Tile;

/// Tiles held by one player. Order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Take the tile at `index` out of the hand.
    ///
    /// The last tile moves into the vacated slot. Returns `None` for an
    /// out-of-range index, leaving the hand untouched.
    pub fn remove(&mut self, index: usize) -> Option<Tile> {
        (index < self.tiles.len()).then(|| self.tiles.swap_remove(index))
    }

    /// Chat-emoji rendering: `Your hand: 0: [:d1:|:d2:], 1: ...`.
    #[must_use]
    pub fn emoji(&self) -> String {
        let parts: Vec<_> = self
            .tiles
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}: {}", i, t.emoji()))
            .collect();
        format!("Your hand: {}", parts.join(", "))
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YOUR HAND:")?;
        for (i, t) in self.tiles.iter().enumerate() {
            write!(f, " {}:{}", i, t)?;
        }
        Ok(())
    }
}

/// One player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id supplied by the caller.
    pub id: String,
    pub hand: Hand,
    /// Declared a single remaining tile.
    pub knocked: bool,
    /// Index of this player's own path on the board.
    pub path: usize,
}

impl Player {
    #[must_use]
    pub fn new(id: impl Into<String>, hand: Hand, path: usize) -> Self {
        Self {
            id: id.into(),
            hand,
            knocked: false,
            path,
        }
    }
}
