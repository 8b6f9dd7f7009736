//! # mexican-train
//!
//! A rules engine for Mexican Train dominoes.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Seats, paths and hand sizes scale with the player
//!    count. Nothing assumes two players.
//!
//! 2. **Transport-Agnostic**: The engine takes `Event`s and returns
//!    `Response`s. Chat bots, sockets and terminals all sit outside it.
//!
//! 3. **Reproducible Deals**: Shuffles use a seeded ChaCha8 RNG, so a seed
//!    and a player list replay the same game.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: The pool and path elements live in
//!   `im-rs` vectors, so snapshots for views and history are cheap.
//!
//! - **One Dangling Double**: The board stores the uncovered double as a
//!   single optional path index.
//!
//! ## Modules
//!
//! - `core`: Tiles, seats, RNG, configuration, actions
//! - `board`: Paths, hands, turn phase, the board and its public view
//! - `rules`: Events, responses and the `Game` that applies them
//! - `error`: Rejection reasons

pub mod core;
pub mod board;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Pip, Tile,
    Seat, SeatMap,
    GameRng, GameConfig,
    Action, ActionKind, ActionRecord,
};

pub use crate::board::{
    Board, BoardBuilder, Element, Hand, Path, PathKind, Player,
    PlayOption, PublicBoard, TurnPhase,
};

pub use crate::rules::{Event, Game, Outcome, Response};

pub use crate::error::{GameError, Result};
