//! Message templates returned in responses.
//!
//! Placeholders are left for the presentation layer to substitute; the
//! engine never fills them in.

/// Replaced with the display name of the player who sent the event.
pub const EVENT_PLAYER_NAME: &str = "$EVENT_PLAYER_NAME";
/// Replaced with the player whose turn just started.
pub const CURRENT_PLAYER: &str = "$CURRENT_PLAYER";
/// Replaced with the rendering of the tile just played.
pub const DOMINO: &str = "$DOMINO";
/// Replaced with the owner of the path just played on.
pub const PATH_ID_OWNER: &str = "$PATH_ID_OWNER";

pub const KNOCK_SUCCESSFUL: &str = "$EVENT_PLAYER_NAME has only one tile left!";
pub const CANNOT_KNOCK: &str = "You cannot knock, you have more than one tile in your hand";
pub const OUT_OF_TILES: &str = "Out of tiles, can't draw";
pub const MUST_RESOLVE_DOUBLE: &str = "You must resolve this double if you can";
pub const PLAY_SUCCESSFUL: &str = "$EVENT_PLAYER_NAME has played $DOMINO on $PATH_ID_OWNER";
pub const MUST_TRY_DRAWING: &str =
    "You must try to draw a tile and see if that works before ending your turn";
pub const SETTING_TRAIN: &str = "Setting train on $EVENT_PLAYER_NAME";
pub const NO_KNOCK_PENALTY: &str =
    "$CURRENT_PLAYER has drawn two tiles for not knocking when they had one tile left";
