//! Client-safe snapshot of the board.
//!
//! Everything here is visible to every player: paths, the center, whose
//! turn it is and how many tiles each player holds. Hand contents and pool
//! order never leave the `Board`.

use serde::{Deserialize, Serialize};

use super::path::Path;
use super::state::Board;
use super::turn::TurnPhase;
use crate::core::{Seat, Tile};

/// Publicly visible facts about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: String,
    pub hand_size: usize,
    pub knocked: bool,
    pub path: usize,
}

/// Public board state, safe to encode for any player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicBoard {
    pub paths: Vec<Path>,
    pub center: Option<Tile>,
    /// Path whose double must be covered before any other play.
    pub dangling: Option<usize>,
    pub players: Vec<PlayerSummary>,
    pub active: Seat,
    pub phase: TurnPhase,
    pub turn_number: u32,
    pub pool_size: usize,
}

impl PublicBoard {
    #[must_use]
    pub fn active_player(&self) -> &PlayerSummary {
        &self.players[self.active.index()]
    }
}

impl Board {
    /// Snapshot the public part of the board.
    ///
    /// Paths share their element storage with the board, so this is cheap.
    #[must_use]
    pub fn view(&self) -> PublicBoard {
        PublicBoard {
            paths: self.paths().to_vec(),
            center: self.center(),
            dangling: self.dangling(),
            players: self
                .players()
                .values()
                .map(|p| PlayerSummary {
                    id: p.id.clone(),
                    hand_size: p.hand.len(),
                    knocked: p.knocked,
                    path: p.path,
                })
                .collect(),
            active: self.active(),
            phase: self.phase(),
            turn_number: self.turn_number(),
            pool_size: self.pool().len(),
        }
    }
}
