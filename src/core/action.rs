//! Player intents and the record of what was done.
//!
//! An `Action` is what a player asks for: play a tile, draw, knock or end
//! the turn. `ActionKind` is the payload-free discriminant, parseable from the
//! short names a text front-end would collect.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::seat::Seat;
use crate::error::GameError;

/// A complete player intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Pass the turn to the next player.
    EndTurn,
    /// Play the tile at `hand_index` onto the path at `path`.
    PlayDomino { path: usize, hand_index: usize },
    /// Draw one tile from the pool.
    DrawDomino,
    /// Declare a single remaining tile.
    Knock,
}

impl Action {
    /// Shorthand for a play action.
    #[must_use]
    pub const fn play(hand_index: usize, path: usize) -> Self {
        Action::PlayDomino { path, hand_index }
    }

    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Action::EndTurn => ActionKind::EndTurn,
            Action::PlayDomino { .. } => ActionKind::PlayDomino,
            Action::DrawDomino => ActionKind::DrawDomino,
            Action::Knock => ActionKind::Knock,
        }
    }
}

/// Action discriminant without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    EndTurn,
    PlayDomino,
    DrawDomino,
    Knock,
}

impl FromStr for ActionKind {
    type Err = GameError;

    /// Accepts the full snake_case name or the one-letter command.
    ///
    /// ```
    /// use mexican_train::core::ActionKind;
    ///
    /// assert_eq!("p".parse::<ActionKind>().unwrap(), ActionKind::PlayDomino);
    /// assert_eq!("Knock".parse::<ActionKind>().unwrap(), ActionKind::Knock);
    /// assert!("big".parse::<ActionKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "end" | "end_turn" | "endturn" => Ok(ActionKind::EndTurn),
            "p" | "play" | "play_domino" | "playdomino" => Ok(ActionKind::PlayDomino),
            "d" | "draw" | "draw_domino" | "drawdomino" => Ok(ActionKind::DrawDomino),
            "k" | "knock" => Ok(ActionKind::Knock),
            _ => Err(GameError::UnknownAction(s.to_string())),
        }
    }
}

/// A handled action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat of the player who acted.
    pub seat: Seat,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(seat: Seat, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            action,
            turn,
            sequence,
        }
    }
}
