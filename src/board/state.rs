//! The board: tile pool, paths, players and turn progress.
//!
//! `Board` owns every tile in the game. Tiles only ever move between the
//! pool, hands, paths and the center slot, so the total is fixed at setup.
//!
//! ## Dangling doubles
//!
//! At most one path at a time holds a double that still needs covering.
//! It is stored as a single `Option<usize>` path index, so the
//! one-dangling-double rule holds by construction.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::hand::{Hand, Player};
use super::path::{Element, Path};
use super::turn::TurnPhase;
use crate::core::{GameConfig, GameRng, Seat, SeatMap, Tile, MAX_PLAYERS};
use crate::error::{GameError, Result};

/// Tiles drawn on behalf of a player who reaches one tile without knocking.
pub const NO_KNOCK_PENALTY: usize = 2;

/// A legal (tile, path) pairing for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayOption {
    pub hand_index: usize,
    pub tile: Tile,
    pub path: usize,
}

/// Legal plays, usually few.
pub type PlayOptions = SmallVec<[PlayOption; 4]>;

/// What a successful placement did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub path: usize,
    pub element: Element,
    /// The owner took their own train down.
    pub closed_train: bool,
    /// A dangling double on this path was covered.
    pub resolved_double: bool,
}

impl Placement {
    /// The placed tile now dangles.
    #[must_use]
    pub fn left_double(&self) -> bool {
        self.element.tile.is_double()
    }
}

/// Result of handing the turn to the next seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnChange {
    pub seat: Seat,
    /// The no-knock penalty applied.
    pub penalized: bool,
    /// Tiles actually drawn for the penalty (fewer if the pool ran out).
    pub penalty_drawn: usize,
}

/// Full game state, including hidden hands and pool order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    /// Draw pile, consumed from the front.
    pool: Vector<Tile>,
    /// One path per seat, then the Mexican path.
    paths: Vec<Path>,
    players: SeatMap<Player>,
    seat_by_id: FxHashMap<String, Seat>,
    /// Starting double every empty path matches against.
    center: Option<Tile>,
    /// Path holding the uncovered double, if any.
    dangling: Option<usize>,
    active: Seat,
    phase: TurnPhase,
    turn_number: u32,
    total_tiles: usize,
    /// Shuffle seed, when the board was dealt.
    seed: Option<u64>,
}

impl Board {
    /// Deal a new game for `player_ids` in seat order.
    ///
    /// Builds the full set, shuffles it, deals every hand, then moves the
    /// highest double held by anyone to the center. Its holder starts; ties
    /// go to the lowest seat. Without any double the center stays empty and
    /// seat 0 starts.
    pub fn deal<S: AsRef<str>>(player_ids: &[S], config: &GameConfig) -> Result<Self> {
        let n = player_ids.len();
        if n == 0 {
            return Err(GameError::NoPlayers);
        }
        if n > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(n));
        }

        let mut tiles: Vec<Tile> = Tile::full_set(config.max_pip).collect();
        let needed = config.tiles_dealt(n);
        if needed > tiles.len() {
            return Err(GameError::NotEnoughTiles {
                needed,
                available: tiles.len(),
            });
        }

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        rng.shuffle(&mut tiles);

        let mut pool = tiles.into_iter();
        let mut hands: Vec<Hand> = (0..n)
            .map(|_| pool.by_ref().take(config.hand_size).collect())
            .collect();

        let mut builder = BoardBuilder::new();
        if let Some((seat, index)) = highest_double(&hands) {
            if let Some(center) = hands[seat].remove(index) {
                builder = builder.center(center).active(player_ids[seat].as_ref());
            }
        }
        for (id, hand) in player_ids.iter().zip(&hands) {
            builder = builder.player(id.as_ref(), hand.iter());
        }

        let mut board = builder.pool(pool).build()?;
        board.seed = Some(rng.seed());

        log::info!(
            "dealt {} tiles to {} players (double-{} set, seed {}), center {:?}, {} starts",
            needed,
            n,
            config.max_pip,
            rng.seed(),
            board.center,
            board.active_player().id
        );
        Ok(board)
    }

    /// Start a hand-arranged board.
    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    // === Accessors ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &SeatMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    /// Seat of the player with `id`.
    #[must_use]
    pub fn seat_of(&self, id: &str) -> Option<Seat> {
        self.seat_by_id.get(id).copied()
    }

    #[must_use]
    pub fn active(&self) -> Seat {
        self.active
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    #[must_use]
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    /// Index of the shared Mexican path (always last).
    #[must_use]
    pub fn mexican_path(&self) -> usize {
        self.paths.len() - 1
    }

    #[must_use]
    pub fn center(&self) -> Option<Tile> {
        self.center
    }

    /// Path whose double still has to be covered.
    #[must_use]
    pub fn dangling(&self) -> Option<usize> {
        self.dangling
    }

    #[must_use]
    pub fn pool(&self) -> &Vector<Tile> {
        &self.pool
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: TurnPhase) {
        self.phase = phase;
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Tiles in the game, fixed at setup.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.total_tiles
    }

    /// Tiles currently in the pool, hands, paths and center.
    ///
    /// Always equal to `total_tiles`.
    #[must_use]
    pub fn tiles_accounted(&self) -> usize {
        self.pool.len()
            + self.players.values().map(|p| p.hand.len()).sum::<usize>()
            + self.paths.iter().map(Path::len).sum::<usize>()
            + usize::from(self.center.is_some())
    }

    // === Draw / Knock ===

    /// Move the front tile of the pool into `seat`'s hand.
    ///
    /// A knock survives the draw.
    pub fn draw(&mut self, seat: Seat) -> Result<Tile> {
        let tile = self.pool.pop_front().ok_or(GameError::PoolExhausted)?;
        let player = &mut self.players[seat];
        player.hand.push(tile);

        log::debug!("{} drew {} ({} left in pool)", player.id, tile, self.pool.len());
        Ok(tile)
    }

    /// Declare a single remaining tile.
    ///
    /// Sets the knocked flag only when the hand holds exactly one tile and
    /// returns the flag either way.
    pub fn knock(&mut self, seat: Seat) -> bool {
        let player = &mut self.players[seat];
        if player.hand.len() == 1 {
            player.knocked = true;
        }
        player.knocked
    }

    // === Placement ===

    /// Check whether `seat` may lay `tile` on path `path`.
    ///
    /// Checks ownership, then the dangling double, then pip matching.
    pub fn can_place(&self, seat: Seat, tile: Tile, path: usize) -> Result<()> {
        let target = self.paths.get(path).ok_or(GameError::InvalidPathIndex)?;

        if !target.is_open_to(seat) {
            return Err(GameError::DontOwnPath);
        }
        if self.dangling.is_some_and(|d| d != path) {
            return Err(GameError::DanglingDouble);
        }
        if !target.accepts(tile, self.center) {
            return Err(GameError::NotPlayable);
        }
        Ok(())
    }

    /// Lay `tile` on path `path` for `seat`.
    ///
    /// The tile is not taken from any hand. Covers a dangling double on the
    /// path, takes down the owner's own train, and leaves a new dangling
    /// double if `tile` is one.
    pub fn place(&mut self, seat: Seat, tile: Tile, path: usize) -> Result<Placement> {
        self.can_place(seat, tile, path)?;

        let center = self.center;
        let target = &mut self.paths[path];
        let element = target.push(tile, center);
        let closed_train = target.owner() == Some(seat) && target.lower_train();

        // can_place only lets a dangling double be covered on its own path
        let resolved_double = self.dangling.take().is_some();
        if tile.is_double() {
            self.dangling = Some(path);
        }

        log::debug!(
            "{} placed {} on path {}{}{}",
            self.players[seat].id,
            element,
            path,
            if closed_train { ", train down" } else { "" },
            if resolved_double { ", double covered" } else { "" }
        );

        Ok(Placement {
            path,
            element,
            closed_train,
            resolved_double,
        })
    }

    /// Play the tile at `hand_index` from `seat`'s hand onto `path`.
    ///
    /// On any error the hand is left exactly as it was.
    pub fn play(&mut self, seat: Seat, hand_index: usize, path: usize) -> Result<Placement> {
        let tile = self.players[seat]
            .hand
            .get(hand_index)
            .ok_or(GameError::InvalidHandIndex)?;

        let placement = self.place(seat, tile, path)?;
        self.players[seat].hand.remove(hand_index);
        Ok(placement)
    }

    /// Every legal (hand tile, path) pair for `seat`.
    #[must_use]
    pub fn playable_moves(&self, seat: Seat) -> PlayOptions {
        let mut options = PlayOptions::new();
        for (hand_index, tile) in self.players[seat].hand.iter().enumerate() {
            for path in 0..self.paths.len() {
                if self.can_place(seat, tile, path).is_ok() {
                    options.push(PlayOption {
                        hand_index,
                        tile,
                        path,
                    });
                }
            }
        }
        options
    }

    /// Open `seat`'s own path to every player.
    pub fn raise_train(&mut self, seat: Seat) {
        let path = self.players[seat].path;
        self.paths[path].raise_train();
        log::debug!("train raised on {}", self.players[seat].id);
    }

    // === Turns ===

    /// Hand the turn to the next seat.
    ///
    /// Resets the turn phase. A player who arrives holding one tile without
    /// having knocked draws `NO_KNOCK_PENALTY` tiles before acting.
    pub fn next_turn(&mut self) -> TurnChange {
        self.phase = TurnPhase::AwaitingAction;
        self.turn_number += 1;
        self.active = self.active.next(self.players.len());

        let seat = self.active;
        let player = &self.players[seat];
        let penalized = player.hand.len() == 1 && !player.knocked;

        let mut penalty_drawn = 0;
        if penalized {
            while penalty_drawn < NO_KNOCK_PENALTY && self.draw(seat).is_ok() {
                penalty_drawn += 1;
            }
            log::info!(
                "{} did not knock with one tile left, drew {}",
                self.players[seat].id,
                penalty_drawn
            );
        }

        log::debug!("turn {}: {} is up", self.turn_number, self.players[seat].id);
        TurnChange {
            seat,
            penalized,
            penalty_drawn,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.center {
            Some(center) => writeln!(f, "CENTER PIECE: {}", center)?,
            None => writeln!(f, "CENTER PIECE: none")?,
        }
        for (i, path) in self.paths.iter().enumerate() {
            let label = path.owner().map_or("", |seat| self.players[seat].id.as_str());
            writeln!(f, "{}: {}", i, path.render(label, self.dangling == Some(i)))?;
        }
        Ok(())
    }
}

/// Seat and hand index of the highest double across all hands.
fn highest_double(hands: &[Hand]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, Tile)> = None;
    for (seat, hand) in hands.iter().enumerate() {
        for (index, tile) in hand.iter().enumerate() {
            if tile.is_double() && best.map_or(true, |(_, _, b)| tile.left > b.left) {
                best = Some((seat, index, tile));
            }
        }
    }
    best.map(|(seat, index, _)| (seat, index))
}

/// Builder for hand-arranged boards: puzzles, replays of real deals, tests.
///
/// ```
/// use mexican_train::board::Board;
/// use mexican_train::core::Tile;
///
/// let board = Board::builder()
///     .player("A", [Tile::new(1, 4)])
///     .player("B", [Tile::new(2, 2), Tile::new(0, 3)])
///     .center(Tile::new(6, 6))
///     .lay(0, Tile::new(6, 1))
///     .pool([Tile::new(5, 3)])
///     .build()
///     .unwrap();
///
/// assert_eq!(board.total_tiles(), 6);
/// assert_eq!(board.mexican_path(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    players: Vec<(String, Hand)>,
    pool: Vec<Tile>,
    center: Option<Tile>,
    active: Option<String>,
    lays: Vec<(usize, Tile)>,
    trains: Vec<usize>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player with the given hand. Seats follow call order.
    #[must_use]
    pub fn player(mut self, id: impl Into<String>, hand: impl IntoIterator<Item = Tile>) -> Self {
        self.players.push((id.into(), hand.into_iter().collect()));
        self
    }

    /// Tiles left to draw, front first.
    #[must_use]
    pub fn pool(mut self, tiles: impl IntoIterator<Item = Tile>) -> Self {
        self.pool.extend(tiles);
        self
    }

    #[must_use]
    pub fn center(mut self, center: Tile) -> Self {
        self.center = Some(center);
        self
    }

    /// Player whose turn it is. Defaults to the first seat.
    #[must_use]
    pub fn active(mut self, id: impl Into<String>) -> Self {
        self.active = Some(id.into());
        self
    }

    /// Append a tile to a path as already-settled history.
    ///
    /// Path indices follow seats, with the Mexican path last. Doubles laid
    /// this way do not dangle.
    #[must_use]
    pub fn lay(mut self, path: usize, tile: Tile) -> Self {
        self.lays.push((path, tile));
        self
    }

    /// Start with the train up on `path`.
    #[must_use]
    pub fn train(mut self, path: usize) -> Self {
        self.trains.push(path);
        self
    }

    pub fn build(self) -> Result<Board> {
        let n = self.players.len();
        if n == 0 {
            return Err(GameError::NoPlayers);
        }
        if n > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(n));
        }

        let mut seat_by_id = FxHashMap::default();
        for (seat, (id, _)) in Seat::all(n).zip(&self.players) {
            if seat_by_id.insert(id.clone(), seat).is_some() {
                return Err(GameError::DuplicatePlayer(id.clone()));
            }
        }

        let active = match &self.active {
            Some(id) => *seat_by_id
                .get(id)
                .ok_or_else(|| GameError::UnknownPlayer(id.clone()))?,
            None => Seat::new(0),
        };

        let mut paths: Vec<Path> = Seat::all(n).map(Path::owned).collect();
        paths.push(Path::mexican());
        for &(path, tile) in &self.lays {
            paths
                .get_mut(path)
                .ok_or(GameError::InvalidPathIndex)?
                .push(tile, self.center);
        }
        for &path in &self.trains {
            paths
                .get_mut(path)
                .ok_or(GameError::InvalidPathIndex)?
                .raise_train();
        }

        let players = SeatMap::from_vec(
            self.players
                .into_iter()
                .enumerate()
                .map(|(path, (id, hand))| Player::new(id, hand, path))
                .collect(),
        );

        let mut board = Board {
            pool: self.pool.into_iter().collect(),
            paths,
            players,
            seat_by_id,
            center: self.center,
            dangling: None,
            active,
            phase: TurnPhase::AwaitingAction,
            turn_number: 1,
            total_tiles: 0,
            seed: None,
        };
        board.total_tiles = board.tiles_accounted();
        Ok(board)
    }
}
