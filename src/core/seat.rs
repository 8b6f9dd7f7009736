//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe seat index supporting 1-255 players. Seats are assigned in the
//! order player ids are handed to setup, and turns rotate through them.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Maximum number of players at one table.
pub const MAX_PLAYERS: usize = 255;

/// Seat index supporting 1-255 players.
///
/// Seats are 0-based: the first player sits at `Seat(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// Create a new seat.
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one at a table of `player_count`.
    ///
    /// ```
    /// use mexican_train::core::Seat;
    ///
    /// assert_eq!(Seat::new(0).next(3), Seat::new(1));
    /// assert_eq!(Seat::new(2).next(3), Seat::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats at a table of `player_count`.
    pub fn all(player_count: usize) -> impl Iterator<Item = Seat> {
        (0..player_count as u8).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use mexican_train::core::{Seat, SeatMap};
///
/// let mut score: SeatMap<u32> = SeatMap::new(4, |_| 0);
/// score[Seat::new(1)] = 15;
/// assert_eq!(score[Seat::new(1)], 15);
/// assert_eq!(score.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(Seat) -> T) -> Self {
        Self::from_vec(Seat::all(player_count).map(factory).collect())
    }

    /// Wrap one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= MAX_PLAYERS, "At most 255 players supported");
        Self { data }
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a table has at least one seat.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all seats.
    pub fn seats(&self) -> impl Iterator<Item = Seat> {
        Seat::all(self.data.len())
    }

    /// Find the first seat whose value satisfies `pred`.
    pub fn position(&self, pred: impl Fn(&T) -> bool) -> Option<Seat> {
        self.data.iter().position(pred).map(|i| Seat(i as u8))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        let s0 = Seat::new(0);
        let s1 = Seat::new(1);

        assert_eq!(s0.index(), 0);
        assert_eq!(s1.index(), 1);
        assert_eq!(format!("{}", s1), "Seat 1");
    }

    #[test]
    fn test_seat_next_wraps() {
        assert_eq!(Seat::new(0).next(1), Seat::new(0));
        assert_eq!(Seat::new(0).next(2), Seat::new(1));
        assert_eq!(Seat::new(1).next(2), Seat::new(0));
        assert_eq!(Seat::new(254).next(255), Seat::new(0));
    }

    #[test]
    fn test_seat_all() {
        let seats: Vec<_> = Seat::all(4).collect();
        assert_eq!(seats, vec![Seat(0), Seat(1), Seat(2), Seat(3)]);
    }

    #[test]
    fn test_seat_map_new() {
        let map: SeatMap<usize> = SeatMap::new(3, |s| s.index() * 10);

        assert_eq!(map[Seat::new(0)], 0);
        assert_eq!(map[Seat::new(1)], 10);
        assert_eq!(map[Seat::new(2)], 20);
    }

    #[test]
    fn test_seat_map_position() {
        let map = SeatMap::from_vec(vec!["a", "b", "c"]);

        assert_eq!(map.position(|v| *v == "b"), Some(Seat::new(1)));
        assert_eq!(map.position(|v| *v == "z"), None);
    }

    #[test]
    fn test_seat_map_iter() {
        let map: SeatMap<u8> = SeatMap::new(2, |s| s.0 + 1);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Seat(0), &1), (Seat(1), &2)]);
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<u32> = SeatMap::new(2, |s| s.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_seat_map_zero_seats() {
        let _: SeatMap<u32> = SeatMap::from_vec(Vec::new());
    }
}
