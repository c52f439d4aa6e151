//! Core gameplay constants (player stats, pickups).

/// Player's hit points at the start of each level
pub const PLAYER_STARTING_HIT_POINTS: i32 = 10;

/// Coins awarded for each coin pickup
pub const POINTS_PER_COIN: i32 = 20;
