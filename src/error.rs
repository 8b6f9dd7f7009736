//! Error taxonomy for the rules engine.
//!
//! Every error rejects exactly one event and leaves the board as it was.
//! Running out of tiles while drawing is reported here for the low-level
//! `Board::draw`, but the event layer turns it into a forced end of turn
//! rather than a failure.

use thiserror::Error;

/// Errors raised by setup, board operations and event handling.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    // === Validation ===
    #[error("it is not your turn")]
    NotYourTurn,

    #[error("invalid hand index")]
    InvalidHandIndex,

    #[error("invalid path index")]
    InvalidPathIndex,

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("no player with id {0} in this game")]
    UnknownPlayer(String),

    // === Rule violations ===
    #[error("domino is not playable on that path")]
    NotPlayable,

    #[error("path is not playable on by this player")]
    DontOwnPath,

    #[error("there is a dangling double that must be resolved")]
    DanglingDouble,

    // === Resources ===
    #[error("no tiles left")]
    PoolExhausted,

    // === Setup ===
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("{0} players is more than a table supports")]
    TooManyPlayers(usize),

    #[error("player id {0} appears more than once")]
    DuplicatePlayer(String),

    #[error("dealing needs {needed} tiles but the set only has {available}")]
    NotEnoughTiles { needed: usize, available: usize },
}

impl GameError {
    /// Illegal placement: the tile goes back to the hand.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            GameError::NotPlayable | GameError::DontOwnPath | GameError::DanglingDouble
        )
    }

    /// Malformed or out-of-turn request.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GameError::NotYourTurn
                | GameError::InvalidHandIndex
                | GameError::InvalidPathIndex
                | GameError::UnknownAction(_)
                | GameError::UnknownPlayer(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
