//! Event handling: one player intent in, one response out.
//!
//! `Game` wraps a `Board` and is the single entry point a front-end talks
//! to. Each call to `handle` runs to completion; callers sharing a game
//! between connections must serialize access to it themselves.
//!
//! ## Turn rules
//!
//! - A play that lays a double keeps the turn until the double is covered.
//! - Any other successful play ends the turn.
//! - Only one draw per turn; drawing from an empty pool ends the turn.
//! - A turn cannot be passed while a legal play exists, nor before the
//!   player has tried drawing. Passing without a completed play raises the
//!   player's train.
//! - Any player may knock at any time.

use im::Vector;
use uuid::Uuid;

use super::event::{push_line, Event, Outcome, Response};
use super::messages;
use crate::board::{Board, Placement, PlayOptions, TurnChange};
use crate::core::{Action, ActionRecord, GameConfig, Seat};
use crate::error::{GameError, Result};

/// A running game.
#[derive(Clone, Debug)]
pub struct Game {
    id: String,
    board: Board,
    history: Vector<ActionRecord>,
}

/// Response fields gathered while an event runs.
#[derive(Default)]
struct Reply {
    success: bool,
    outcome: Outcome,
    global_message: String,
    user_message: String,
    placement: Option<Placement>,
    possible_plays: PlayOptions,
    turn_change: Option<TurnChange>,
}

impl Reply {
    fn into_response(self, player_id: String, board: &Board) -> Response {
        Response {
            success: self.success,
            outcome: self.outcome,
            state: board.view(),
            global_message: self.global_message,
            user_message: self.user_message,
            player_id,
            placement: self.placement,
            possible_plays: self.possible_plays,
            turn_change: self.turn_change,
        }
    }
}

impl Game {
    /// Deal a standard game for `player_ids` in seat order.
    pub fn new<S: AsRef<str>>(player_ids: &[S]) -> Result<Self> {
        Self::with_config(player_ids, &GameConfig::for_players(player_ids.len()))
    }

    /// Deal a game with explicit configuration.
    pub fn with_config<S: AsRef<str>>(player_ids: &[S], config: &GameConfig) -> Result<Self> {
        Ok(Self::from_board(Board::deal(player_ids, config)?))
    }

    /// Run events against an existing board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let id = Uuid::new_v4().to_string();
        log::info!("game {} started with {} players", id, board.player_count());
        Self {
            id,
            board,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every event that passed validation, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Actions `seat` could submit right now without being rejected.
    ///
    /// Plays come first, one per legal (tile, path) pair.
    #[must_use]
    pub fn legal_actions(&self, seat: Seat) -> Vec<Action> {
        let mut actions = Vec::new();
        let player = self.board.player(seat);

        if seat == self.board.active() {
            let moves = self.board.playable_moves(seat);
            actions.extend(moves.iter().map(|m| Action::play(m.hand_index, m.path)));

            let phase = self.board.phase();
            if !phase.has_drawn() {
                actions.push(Action::DrawDomino);
            }
            if moves.is_empty() && phase.may_end() {
                actions.push(Action::EndTurn);
            }
        }
        if player.hand.len() == 1 && !player.knocked {
            actions.push(Action::Knock);
        }
        actions
    }

    /// Apply one event.
    ///
    /// Validation errors and illegal placements come back as `Err` with the
    /// board untouched. Everything else, including refused turn ends and
    /// forced ends on an empty pool, is an `Ok` response.
    pub fn handle(&mut self, event: &Event) -> Result<Response> {
        let Some(seat) = self.board.seat_of(&event.player_id) else {
            return Err(match event.action {
                Action::Knock => GameError::UnknownPlayer(event.player_id.clone()),
                _ => GameError::NotYourTurn,
            });
        };

        let turn = self.board.turn_number();
        let mut reply = Reply::default();

        match event.action {
            // Knocking is allowed out of turn
            Action::Knock => self.knock(seat, &mut reply),
            _ if seat != self.board.active() => return Err(GameError::NotYourTurn),
            Action::EndTurn => self.end_turn(seat, &mut reply),
            Action::PlayDomino { path, hand_index } => {
                self.play(seat, hand_index, path, &mut reply)?;
            }
            Action::DrawDomino => self.draw(seat, &mut reply),
        }

        self.record(seat, event.action, turn);
        Ok(reply.into_response(event.player_id.clone(), &self.board))
    }

    fn end_turn(&mut self, seat: Seat, reply: &mut Reply) {
        let moves = self.board.playable_moves(seat);
        if !moves.is_empty() {
            for m in &moves {
                push_line(
                    &mut reply.user_message,
                    &format!(
                        "you can place tile {} ({}) in your hand on path {}",
                        m.tile, m.hand_index, m.path
                    ),
                );
            }
            reply.possible_plays = moves;
            return;
        }

        let phase = self.board.phase();
        if !phase.may_end() {
            push_line(&mut reply.user_message, messages::MUST_TRY_DRAWING);
            return;
        }

        if !phase.has_played() {
            self.board.raise_train(seat);
            push_line(&mut reply.global_message, messages::SETTING_TRAIN);
        }

        reply.success = true;
        self.end_of_turn(reply);
    }

    fn play(&mut self, seat: Seat, hand_index: usize, path: usize, reply: &mut Reply) -> Result<()> {
        let placement = self.board.play(seat, hand_index, path)?;
        let double = placement.left_double();

        let phase = self.board.phase().after_play(double);
        self.board.set_phase(phase);

        reply.success = true;
        reply.placement = Some(placement);
        push_line(&mut reply.global_message, messages::PLAY_SUCCESSFUL);

        if double {
            push_line(&mut reply.user_message, messages::MUST_RESOLVE_DOUBLE);
        } else {
            self.end_of_turn(reply);
        }
        Ok(())
    }

    fn draw(&mut self, seat: Seat, reply: &mut Reply) {
        let phase = self.board.phase();
        if phase.has_drawn() {
            return;
        }

        match self.board.draw(seat) {
            Ok(_) => {
                self.board.set_phase(phase.after_draw());
                reply.success = true;
            }
            Err(err) => {
                log::warn!("{}: ending {}'s turn", err, self.board.player(seat).id);
                push_line(&mut reply.global_message, messages::OUT_OF_TILES);
                self.board.raise_train(seat);
                push_line(&mut reply.global_message, messages::SETTING_TRAIN);
                reply.success = true;
                self.end_of_turn(reply);
            }
        }
    }

    fn knock(&mut self, seat: Seat, reply: &mut Reply) {
        if self.board.knock(seat) {
            reply.success = true;
            push_line(&mut reply.global_message, messages::KNOCK_SUCCESSFUL);
        } else {
            push_line(&mut reply.user_message, messages::CANNOT_KNOCK);
        }
    }

    fn end_of_turn(&mut self, reply: &mut Reply) {
        let change = self.board.next_turn();
        if change.penalty_drawn > 0 {
            push_line(&mut reply.global_message, messages::NO_KNOCK_PENALTY);
        }
        reply.outcome = Outcome::EndOfTurn;
        reply.turn_change = Some(change);
    }

    fn record(&mut self, seat: Seat, action: Action, turn: u32) {
        let sequence = self
            .history
            .iter()
            .rev()
            .take_while(|r| r.turn == turn)
            .count() as u32;
        self.history
            .push_back(ActionRecord::new(seat, action, turn, sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TurnPhase;
    use crate::core::Tile;

    const A: Seat = Seat::new(0);
    const B: Seat = Seat::new(1);

    /// A: [6|1] [2|3] [5|5]   B: [6|4] [4|4] [3|0]   center [6||6]
    fn game() -> Game {
        Game::from_board(
            Board::builder()
                .player("A", [Tile::new(6, 1), Tile::new(2, 3), Tile::new(5, 5)])
                .player("B", [Tile::new(6, 4), Tile::new(4, 4), Tile::new(3, 0)])
                .center(Tile::new(6, 6))
                .pool([Tile::new(0, 0), Tile::new(0, 1), Tile::new(0, 2), Tile::new(1, 1)])
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_game_id_is_uuid() {
        let g = game();
        assert!(Uuid::parse_str(g.id()).is_ok());
        assert_ne!(g.id(), game().id());
    }

    #[test]
    fn test_new_standard_game() {
        let g = Game::new(&["Xena", "Vic"]).unwrap();
        assert_eq!(g.board().total_tiles(), 28);
        assert_eq!(g.board().tiles_accounted(), 28);
    }

    #[test]
    fn test_not_your_turn() {
        let mut g = game();
        assert_eq!(g.handle(&Event::draw("B")), Err(GameError::NotYourTurn));
        assert_eq!(g.handle(&Event::draw("Z")), Err(GameError::NotYourTurn));
        assert!(g.history().is_empty());
    }

    #[test]
    fn test_unknown_knocker() {
        let mut g = game();
        assert_eq!(
            g.handle(&Event::knock("Z")),
            Err(GameError::UnknownPlayer("Z".into()))
        );
    }

    #[test]
    fn test_play_ends_turn() {
        let mut g = game();
        let r = g.handle(&Event::play("A", 0, 0)).unwrap();

        assert!(r.success);
        assert!(r.is_end_of_turn());
        assert_eq!(r.global_message, messages::PLAY_SUCCESSFUL);
        assert_eq!(r.placement.unwrap().element.tile, Tile::new(6, 1));
        assert_eq!(r.turn_change.unwrap().seat, B);
        assert_eq!(r.state.active, B);
        assert_eq!(r.state.paths[0].len(), 1);
        assert_eq!(r.player_id, "A");
    }

    #[test]
    fn test_illegal_play_restores_hand() {
        let mut g = game();
        let before = g.board().player(A).hand.clone();

        assert_eq!(g.handle(&Event::play("A", 1, 0)), Err(GameError::NotPlayable));
        assert_eq!(g.handle(&Event::play("A", 0, 1)), Err(GameError::DontOwnPath));
        assert_eq!(g.handle(&Event::play("A", 9, 0)), Err(GameError::InvalidHandIndex));
        assert_eq!(g.handle(&Event::play("A", 0, 9)), Err(GameError::InvalidPathIndex));

        assert_eq!(g.board().player(A).hand, before);
        assert_eq!(g.board().active(), A);
        assert_eq!(g.board().phase(), TurnPhase::AwaitingAction);
    }

    #[test]
    fn test_double_then_resolve() {
        let mut g = Game::from_board(
            Board::builder()
                .player("A", [Tile::new(6, 6), Tile::new(6, 2), Tile::new(1, 1)])
                .player("B", [Tile::new(3, 4)])
                .center(Tile::new(6, 6))
                .pool([Tile::new(0, 0)])
                .build()
                .unwrap(),
        );

        let r = g.handle(&Event::play("A", 0, 0)).unwrap();
        assert!(r.success);
        assert_eq!(r.outcome, Outcome::Continue);
        assert_eq!(r.user_message, messages::MUST_RESOLVE_DOUBLE);
        assert_eq!(r.state.dangling, Some(0));
        assert_eq!(r.state.phase, TurnPhase::DoubleToResolve { drawn: false });

        // Hand is now [1||1] [6|2]; covering the double ends the turn
        let r = g.handle(&Event::play("A", 1, 0)).unwrap();
        assert!(r.is_end_of_turn());
        assert_eq!(r.state.dangling, None);
    }

    #[test]
    fn test_double_unresolved_needs_draw() {
        let mut g = Game::from_board(
            Board::builder()
                .player("A", [Tile::new(6, 6), Tile::new(1, 2)])
                .player("B", [Tile::new(3, 4), Tile::new(3, 5)])
                .center(Tile::new(6, 6))
                .pool([Tile::new(0, 0)])
                .build()
                .unwrap(),
        );

        g.handle(&Event::play("A", 0, 0)).unwrap();

        let r = g.handle(&Event::end_turn("A")).unwrap();
        assert!(!r.success);
        assert_eq!(r.user_message, messages::MUST_TRY_DRAWING);

        let r = g.handle(&Event::draw("A")).unwrap();
        assert!(r.success);
        assert_eq!(r.state.phase, TurnPhase::DoubleToResolve { drawn: true });

        // [0||0] does not cover [6||6]; pass and raise the train
        let r = g.handle(&Event::end_turn("A")).unwrap();
        assert!(r.success);
        assert!(r.is_end_of_turn());
        assert_eq!(r.global_message, messages::SETTING_TRAIN);
        assert!(r.state.paths[0].has_train());
        assert_eq!(r.state.dangling, Some(0));

        // B may only answer the dangling double, on A's open path
        assert_eq!(g.handle(&Event::play("B", 0, 1)), Err(GameError::DanglingDouble));
    }

    #[test]
    fn test_end_turn_lists_plays() {
        let mut g = game();
        let r = g.handle(&Event::end_turn("A")).unwrap();

        assert!(!r.success);
        assert_eq!(r.outcome, Outcome::Continue);
        assert_eq!(r.possible_plays.len(), 2);
        assert_eq!(
            r.user_message,
            "you can place tile [6|1] (0) in your hand on path 0\n\
             you can place tile [6|1] (0) in your hand on path 2"
        );
        assert_eq!(g.board().active(), A);
    }

    #[test]
    fn test_must_draw_before_passing() {
        let mut g = Game::from_board(
            Board::builder()
                .player("A", [Tile::new(2, 3)])
                .player("B", [Tile::new(3, 4)])
                .center(Tile::new(6, 6))
                .pool([Tile::new(0, 1)])
                .build()
                .unwrap(),
        );

        let r = g.handle(&Event::end_turn("A")).unwrap();
        assert!(!r.success);
        assert_eq!(r.user_message, messages::MUST_TRY_DRAWING);

        g.handle(&Event::draw("A")).unwrap();
        let r = g.handle(&Event::end_turn("A")).unwrap();
        assert!(r.success);
        assert!(r.is_end_of_turn());
        assert!(r.state.paths[0].has_train());
    }

    #[test]
    fn test_second_draw_is_silent_noop() {
        let mut g = game();

        let r = g.handle(&Event::draw("A")).unwrap();
        assert!(r.success);
        assert_eq!(g.board().player(A).hand.len(), 4);

        let r = g.handle(&Event::draw("A")).unwrap();
        assert!(!r.success);
        assert!(r.user_message.is_empty());
        assert!(r.global_message.is_empty());
        assert_eq!(g.board().player(A).hand.len(), 4);
    }

    #[test]
    fn test_draw_from_empty_pool_ends_turn() {
        let mut g = Game::from_board(
            Board::builder()
                .player("A", [Tile::new(2, 3)])
                .player("B", [Tile::new(3, 4), Tile::new(3, 5)])
                .center(Tile::new(6, 6))
                .build()
                .unwrap(),
        );

        let r = g.handle(&Event::draw("A")).unwrap();
        assert!(r.success);
        assert!(r.is_end_of_turn());
        assert!(r.global_message.starts_with(messages::OUT_OF_TILES));
        assert_eq!(r.state.active, B);
        assert_eq!(g.board().player(A).hand.len(), 1);
    }

    #[test]
    fn test_knock() {
        let mut g = Game::from_board(
            Board::builder()
                .player("A", [Tile::new(2, 3), Tile::new(6, 0)])
                .player("B", [Tile::new(3, 4)])
                .center(Tile::new(6, 6))
                .build()
                .unwrap(),
        );

        let r = g.handle(&Event::knock("A")).unwrap();
        assert!(!r.success);
        assert_eq!(r.user_message, messages::CANNOT_KNOCK);

        // B knocks out of turn
        let r = g.handle(&Event::knock("B")).unwrap();
        assert!(r.success);
        assert_eq!(r.global_message, messages::KNOCK_SUCCESSFUL);
        assert!(r.state.players[1].knocked);
        assert_eq!(r.state.active, A);
    }

    #[test]
    fn test_penalty_reported() {
        let mut g = Game::from_board(
            Board::builder()
                .player("A", [Tile::new(6, 0), Tile::new(1, 2)])
                .player("B", [Tile::new(3, 4)])
                .center(Tile::new(6, 6))
                .pool([Tile::new(0, 0), Tile::new(0, 1)])
                .build()
                .unwrap(),
        );

        let r = g.handle(&Event::play("A", 0, 0)).unwrap();
        assert!(r.global_message.ends_with(messages::NO_KNOCK_PENALTY));
        assert!(r.turn_change.unwrap().penalized);
        assert_eq!(g.board().player(B).hand.len(), 3);
    }

    #[test]
    fn test_penalty_from_empty_pool_is_silent() {
        let mut g = Game::from_board(
            Board::builder()
                .player("A", [Tile::new(6, 0), Tile::new(1, 2)])
                .player("B", [Tile::new(3, 4)])
                .center(Tile::new(6, 6))
                .build()
                .unwrap(),
        );

        let r = g.handle(&Event::play("A", 0, 0)).unwrap();
        let change = r.turn_change.unwrap();
        assert!(change.penalized);
        assert_eq!(change.penalty_drawn, 0);
        assert_eq!(r.global_message, messages::PLAY_SUCCESSFUL);
        assert_eq!(g.board().player(B).hand.len(), 1);
    }

    #[test]
    fn test_history() {
        let mut g = game();
        g.handle(&Event::draw("A")).unwrap();
        g.handle(&Event::play("A", 0, 0)).unwrap();
        g.handle(&Event::knock("A")).unwrap();
        g.handle(&Event::draw("A")).unwrap_err();

        let history: Vec<_> = g.history().iter().cloned().collect();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0], ActionRecord::new(A, Action::DrawDomino, 1, 0));
        assert_eq!(history[1], ActionRecord::new(A, Action::play(0, 0), 1, 1));
        assert_eq!(history[2], ActionRecord::new(A, Action::Knock, 2, 0));
    }

    #[test]
    fn test_legal_actions() {
        let g = game();

        let actions = g.legal_actions(A);
        assert_eq!(
            actions,
            vec![Action::play(0, 0), Action::play(0, 2), Action::DrawDomino]
        );
        assert!(g.legal_actions(B).is_empty());
    }

    #[test]
    fn test_legal_actions_after_draw() {
        let mut g = Game::from_board(
            Board::builder()
                .player("A", [Tile::new(2, 3)])
                .player("B", [Tile::new(3, 4), Tile::new(3, 5)])
                .center(Tile::new(6, 6))
                .pool([Tile::new(0, 1)])
                .build()
                .unwrap(),
        );

        assert_eq!(g.legal_actions(A), vec![Action::DrawDomino, Action::Knock]);
        g.handle(&Event::draw("A")).unwrap();
        assert_eq!(g.legal_actions(A), vec![Action::EndTurn]);
    }
}
