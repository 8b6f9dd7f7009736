//! Per-turn progress of the active player.
//!
//! ```text
//! AwaitingAction --draw--> Drawn
//!       |                    |
//!       +--play double--+----+--play double--> DoubleToResolve { drawn }
//!       |               |                        |  draw sets drawn
//!       +--play---------+--> Played (turn ends)  +--play--> Played / DoubleToResolve
//! ```
//!
//! A turn may be passed once the player has drawn or has completed a play.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TurnPhase {
    /// Nothing drawn or played yet.
    #[default]
    AwaitingAction,
    /// Drew a tile, has not played.
    Drawn,
    /// Completed a play; the turn is over.
    Played,
    /// Laid a double that still needs a tile on top of it.
    DoubleToResolve { drawn: bool },
}

impl TurnPhase {
    /// The single draw of this turn is used up.
    #[must_use]
    pub fn has_drawn(self) -> bool {
        matches!(self, TurnPhase::Drawn | TurnPhase::DoubleToResolve { drawn: true })
    }

    /// A play finished the player's obligations for this turn.
    #[must_use]
    pub fn has_played(self) -> bool {
        self == TurnPhase::Played
    }

    /// Ending the turn is allowed (legal plays aside).
    #[must_use]
    pub fn may_end(self) -> bool {
        self.has_drawn() || self.has_played()
    }

    /// Phase after a successful draw.
    #[must_use]
    pub fn after_draw(self) -> Self {
        match self {
            TurnPhase::AwaitingAction => TurnPhase::Drawn,
            TurnPhase::DoubleToResolve { .. } => TurnPhase::DoubleToResolve { drawn: true },
            other => other,
        }
    }

    /// Phase after a successful play of a double or non-double tile.
    #[must_use]
    pub fn after_play(self, double: bool) -> Self {
        if double {
            TurnPhase::DoubleToResolve {
                drawn: self.has_drawn(),
            }
        } else {
            TurnPhase::Played
        }
    }
}
