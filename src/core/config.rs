//! Game configuration.
//!
//! The size of the tile set and of the opening hands both depend on how many
//! people are at the table; the player count itself comes from the id list
//! handed to setup. `GameConfig::for_players` applies the standard
//! lookup tables; builder methods override individual values for house rules
//! and tests.

use serde::{Deserialize, Serialize};

use super::tile::{Pip, Tile};

/// Highest pip value of the set used for `player_count` players.
///
/// | players | set        |
/// |---------|------------|
/// | 1-2     | double-6   |
/// | 3-4     | double-9   |
/// | 5-8     | double-12  |
/// | 9-12    | double-15  |
/// | 13+     | double-18  |
#[must_use]
pub const fn max_pip_for(player_count: usize) -> Pip {
    match player_count {
        0..=2 => 6,
        3 | 4 => 9,
        5..=8 => 12,
        9..=12 => 15,
        _ => 18,
    }
}

/// Number of tiles dealt to each player at setup.
#[must_use]
pub const fn hand_size_for(player_count: usize) -> usize {
    match player_count {
        2 => 6,
        3 | 4 => 10,
        5 | 6 => 9,
        7 | 8 => 7,
        _ => 6,
    }
}

/// Complete configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Highest pip value in the set.
    pub max_pip: Pip,

    /// Tiles dealt to each player.
    pub hand_size: usize,

    /// Shuffle seed. `None` draws one from entropy at setup.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Standard configuration for `player_count` players.
    ///
    /// ```
    /// use mexican_train::core::GameConfig;
    ///
    /// let config = GameConfig::for_players(4);
    /// assert_eq!(config.max_pip, 9);
    /// assert_eq!(config.hand_size, 10);
    /// assert_eq!(config.tile_count(), 55);
    /// ```
    #[must_use]
    pub fn for_players(player_count: usize) -> Self {
        Self {
            max_pip: max_pip_for(player_count),
            hand_size: hand_size_for(player_count),
            seed: None,
        }
    }

    /// Override the highest pip value.
    #[must_use]
    pub fn with_max_pip(mut self, max_pip: Pip) -> Self {
        self.max_pip = max_pip;
        self
    }

    /// Override the opening hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Fix the shuffle seed for a reproducible game.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of tiles in the set.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        Tile::set_size(self.max_pip)
    }

    /// Tiles needed to deal an opening hand to `player_count` players.
    #[must_use]
    pub fn tiles_dealt(&self, player_count: usize) -> usize {
        player_count * self.hand_size
    }
}
