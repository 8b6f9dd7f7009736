//! Turn rules and event handling.
//!
//! `Game` takes an `Event` (who, and what they want), applies it to the
//! `Board` and returns a `Response` with the public board and any messages.
//! Validation failures come back as `GameError` with nothing changed.

pub mod event;
pub mod game;
pub mod messages;

pub use event::{Event, Outcome, Response};
pub use game::Game;
