//! Paths (trains) and adjacency resolution.
//!
//! A path is an append-only line of placed tiles starting from the center
//! double. Whether a tile may extend a path depends only on the last placed
//! element and the one before it (or the center): the side of the last
//! element that touches its predecessor is consumed, the other side is open.
//!
//! ## Orientation
//!
//! Each element carries a `flipped` flag for display. It is derived once at
//! placement and never consulted for matching, which always uses the raw
//! `(left, right)` pips.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Pip, Seat, Tile};

/// A tile laid on a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    pub tile: Tile,
    /// Render with sides swapped.
    pub flipped: bool,
}

impl Element {
    #[must_use]
    pub const fn new(tile: Tile) -> Self {
        Self {
            tile,
            flipped: false,
        }
    }

    /// The tile as it should be drawn, right side outward.
    #[must_use]
    pub const fn oriented(self) -> Tile {
        if self.flipped {
            self.tile.reversed()
        } else {
            self.tile
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.oriented().fmt(f)
    }
}

/// What a candidate tile has to show to extend a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenEnd {
    /// No constraint: the path has nothing to match against.
    Any,
    /// Empty path: share any pip with the center tile.
    Center(Tile),
    /// Show this pip on either side.
    Pip(Pip),
    /// The last element does not connect to its predecessor.
    Blocked,
}

impl OpenEnd {
    /// Resolve the open side of `curr` given what it was laid against.
    ///
    /// `prev` is the element before `curr`, or the center when `curr` is the
    /// first element; `None` when there is no center. The left side of
    /// `curr` is checked before the right, so a double always reports its
    /// (identical) right pip.
    #[must_use]
    pub fn after(prev: Option<Tile>, curr: Tile) -> Self {
        let Some(prev) = prev else {
            return OpenEnd::Any;
        };

        if prev.has_pip(curr.left) {
            OpenEnd::Pip(curr.right)
        } else if prev.has_pip(curr.right) {
            OpenEnd::Pip(curr.left)
        } else {
            OpenEnd::Blocked
        }
    }

    /// Does `tile` satisfy this end?
    #[must_use]
    pub fn accepts(self, tile: Tile) -> bool {
        match self {
            OpenEnd::Any => true,
            OpenEnd::Center(center) => center.is_playable(tile),
            OpenEnd::Pip(pip) => tile.has_pip(pip),
            OpenEnd::Blocked => false,
        }
    }
}

/// Who a path belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "seat", rename_all = "snake_case")]
pub enum PathKind {
    /// A player's own path.
    Owned(Seat),
    /// The shared path anyone may extend.
    Mexican,
}

/// A line of placed tiles.
///
/// Elements live in an `im::Vector` so board snapshots share structure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    kind: PathKind,
    /// Open to every player.
    train: bool,
    elements: Vector<Element>,
}

impl Path {
    /// A private path for `seat`.
    #[must_use]
    pub fn owned(seat: Seat) -> Self {
        Self {
            kind: PathKind::Owned(seat),
            train: false,
            elements: Vector::new(),
        }
    }

    /// The shared Mexican path. Its train is always up.
    #[must_use]
    pub fn mexican() -> Self {
        Self {
            kind: PathKind::Mexican,
            train: true,
            elements: Vector::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    #[must_use]
    pub fn owner(&self) -> Option<Seat> {
        match self.kind {
            PathKind::Owned(seat) => Some(seat),
            PathKind::Mexican => None,
        }
    }

    #[must_use]
    pub fn is_mexican(&self) -> bool {
        self.kind == PathKind::Mexican
    }

    /// Marked so any player may extend it.
    #[must_use]
    pub fn has_train(&self) -> bool {
        self.train
    }

    /// Open the path to everyone.
    pub fn raise_train(&mut self) {
        self.train = true;
    }

    /// Close the path back to its owner.
    ///
    /// Returns true if a train was taken down. The Mexican path keeps its
    /// train.
    pub fn lower_train(&mut self) -> bool {
        if self.is_mexican() || !self.train {
            return false;
        }
        self.train = false;
        true
    }

    /// May `seat` lay a tile here?
    #[must_use]
    pub fn is_open_to(&self, seat: Seat) -> bool {
        self.train || self.is_mexican() || self.owner() == Some(seat)
    }

    #[must_use]
    pub fn elements(&self) -> &Vector<Element> {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// The tile a new element would be laid against: the last element, or
    /// the center for an empty path.
    #[must_use]
    pub fn predecessor(&self, center: Option<Tile>) -> Option<Tile> {
        self.last().map(|e| e.tile).or(center)
    }

    /// What the next tile has to match.
    #[must_use]
    pub fn open_end(&self, center: Option<Tile>) -> OpenEnd {
        let n = self.elements.len();
        match n {
            0 => center.map_or(OpenEnd::Any, OpenEnd::Center),
            1 => OpenEnd::after(center, self.elements[0].tile),
            _ => OpenEnd::after(Some(self.elements[n - 2].tile), self.elements[n - 1].tile),
        }
    }

    /// Can `tile` extend this path, ownership aside?
    #[must_use]
    pub fn accepts(&self, tile: Tile, center: Option<Tile>) -> bool {
        self.open_end(center).accepts(tile)
    }

    /// Append `tile` without checking legality, deriving its orientation.
    ///
    /// The element is flipped only when laid against a double whose pip
    /// matches the new tile's right side.
    pub fn push(&mut self, tile: Tile, center: Option<Tile>) -> Element {
        let flipped = self
            .predecessor(center)
            .is_some_and(|prev| prev.is_double() && tile.right == prev.left);
        let element = Element { tile, flipped };
        self.elements.push_back(element);
        element
    }

    /// One-line rendering, `label >> 0:[a|b] 1:[c|d]`, with ` *` for a
    /// raised train and ` <!>` when `dangling`.
    #[must_use]
    pub fn render(&self, label: &str, dangling: bool) -> String {
        let mut out = if self.is_mexican() {
            format!("{:>8} >>", "M")
        } else {
            format!("{:>8} >>", label)
        };

        for (i, e) in self.elements.iter().enumerate() {
            out.push_str(&format!(" {}:{}", i, e));
        }
        if self.train && !self.is_mexican() {
            out.push_str(" *");
        }
        if dangling {
            out.push_str(" <!>");
        }
        out
    }
}
