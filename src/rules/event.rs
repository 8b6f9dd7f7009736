//! Requests into the engine and the responses it hands back.

use serde::{Deserialize, Serialize};

use crate::board::{Placement, PlayOptions, PublicBoard, TurnChange};
use crate::core::Action;

/// One player intent, stamped with the acting player's id.
///
/// The id must come from the trusted caller (session, socket, bot
/// context), never from text the user typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub player_id: String,
    #[serde(flatten)]
    pub action: Action,
}

impl Event {
    #[must_use]
    pub fn new(player_id: impl Into<String>, action: Action) -> Self {
        Self {
            player_id: player_id.into(),
            action,
        }
    }

    #[must_use]
    pub fn play(player_id: impl Into<String>, hand_index: usize, path: usize) -> Self {
        Self::new(player_id, Action::play(hand_index, path))
    }

    #[must_use]
    pub fn draw(player_id: impl Into<String>) -> Self {
        Self::new(player_id, Action::DrawDomino)
    }

    #[must_use]
    pub fn knock(player_id: impl Into<String>) -> Self {
        Self::new(player_id, Action::Knock)
    }

    #[must_use]
    pub fn end_turn(player_id: impl Into<String>) -> Self {
        Self::new(player_id, Action::EndTurn)
    }
}

/// Whether the acting player keeps the turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Same player acts again.
    #[default]
    Continue,
    /// The turn passed; `Response::turn_change` says to whom.
    EndOfTurn,
}

/// What happened when an event ran. Safe to encode for the acting player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// The requested action took effect, or the turn was forced to end
    /// because the pool ran dry.
    pub success: bool,
    pub outcome: Outcome,
    /// Board after the event.
    pub state: PublicBoard,
    /// For every player.
    pub global_message: String,
    /// For the acting player only.
    pub user_message: String,
    pub player_id: String,
    pub placement: Option<Placement>,
    /// Filled when an end of turn is refused because plays exist.
    pub possible_plays: PlayOptions,
    pub turn_change: Option<TurnChange>,
}

impl Response {
    #[must_use]
    pub fn is_end_of_turn(&self) -> bool {
        self.outcome == Outcome::EndOfTurn
    }
}

/// Append `line` to a newline-separated message.
pub(crate) fn push_line(message: &mut String, line: &str) {
    if !message.is_empty() {
        message.push('\n');
    }
    message.push_str(line);
}
