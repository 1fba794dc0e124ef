use crate::map::models::LatLng;

/// Where the player's marker sits at the start of every round (mid North Atlantic).
pub const DEFAULT_MARKER: LatLng = LatLng::new(45.3308, -34.3421);

/// World view shown while the player is guessing.
pub const OVERVIEW_ZOOM: f64 = 0.0;
/// Close-up on the actual location once the guess is revealed.
pub const REVEAL_ZOOM: f64 = 8.0;

pub const POPUP_COORDINATES_DECIMALS: usize = 4;
pub const TABLE_COORDINATES_DECIMALS: usize = 2;

pub const PLAYER_LABEL: &str = "You";
pub const PLAYER_MARKER_LABEL: &str = "Your Guess";
pub const GROUND_TRUTH_MARKER_LABEL: &str = "Actual";
