//! Core engine types: tiles, seats, RNG, configuration, actions.
//!
//! Everything here is independent of board layout and turn rules.

pub mod tile;
pub mod seat;
pub mod rng;
pub mod config;
pub mod action;

pub use tile::{Pip, Tile};
pub use seat::{Seat, SeatMap, MAX_PLAYERS};
pub use rng::GameRng;
pub use config::{hand_size_for, max_pip_for, GameConfig};
pub use action::{Action, ActionKind, ActionRecord};
