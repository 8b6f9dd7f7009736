//! Domino tiles and the matching primitives every rule builds on.
//!
//! A tile is an ordered pair of pip values. Matching never cares about the
//! orientation a tile was laid in: two tiles are playable against each other
//! when any of the four pip values line up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pip value on one side of a tile.
pub type Pip = u8;

/// A single two-sided domino.
///
/// ```
/// use mexican_train::core::Tile;
///
/// let double_six = Tile::new(6, 6);
/// assert!(double_six.is_double());
/// assert!(double_six.is_playable(Tile::new(6, 1)));
/// assert!(!double_six.is_playable(Tile::new(2, 3)));
/// assert_eq!(Tile::new(4, 5).value(), 9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub left: Pip,
    pub right: Pip,
}

impl Tile {
    /// Create a tile from its two pip values.
    #[must_use]
    pub const fn new(left: Pip, right: Pip) -> Self {
        Self { left, right }
    }

    /// Both sides carry the same value.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.left == self.right
    }

    /// True if any pip of `other` equals any pip of `self`.
    #[must_use]
    pub const fn is_playable(self, other: Tile) -> bool {
        self.left == other.left
            || self.left == other.right
            || self.right == other.left
            || self.right == other.right
    }

    /// True if either side shows `pip`.
    #[must_use]
    pub const fn has_pip(self, pip: Pip) -> bool {
        self.left == pip || self.right == pip
    }

    /// Point value of the tile (sum of both sides).
    #[must_use]
    pub const fn value(self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// The same tile with its sides swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.right, self.left)
    }

    /// Chat-emoji rendering, e.g. `[:d3:|:d5:]`.
    #[must_use]
    pub fn emoji(self) -> String {
        format!("[:d{}:|:d{}:]", self.left, self.right)
    }

    /// Every tile of a double-`max_pip` set, `(i, j)` with `j <= i`.
    ///
    /// A double-six set (`max_pip = 6`) has 28 tiles.
    pub fn full_set(max_pip: Pip) -> impl Iterator<Item = Tile> {
        (0..=max_pip).flat_map(|i| (0..=i).map(move |j| Tile::new(i, j)))
    }

    /// Number of tiles in a double-`max_pip` set.
    #[must_use]
    pub const fn set_size(max_pip: Pip) -> usize {
        let n = max_pip as usize + 1;
        n * (n + 1) / 2
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_double() {
            write!(f, "[{}||{}]", self.left, self.right)
        } else {
            write!(f, "[{}|{}]", self.left, self.right)
        }
    }
}
