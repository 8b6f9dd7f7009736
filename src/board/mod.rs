//! Board layout: paths, hands, turn phase and the board itself.
//!
//! `Board` owns the tile pool, every path and every player. Players refer to
//! their own path by index and paths refer to their owner by `Seat`, so the
//! ownership graph stays acyclic.

pub mod path;
pub mod hand;
pub mod turn;
pub mod state;
pub mod view;

pub use path::{Element, OpenEnd, Path, PathKind};
pub use hand::{Hand, Player};
pub use turn::TurnPhase;
pub use state::{Board, BoardBuilder, Placement, PlayOption, PlayOptions, TurnChange, NO_KNOCK_PENALTY};
pub use view::{PlayerSummary, PublicBoard};
