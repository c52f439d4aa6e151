//! Game systems organized by domain.
//!
//! - `movement`: what a single step runs into
//! - `player_input`: axis input to a cardinal direction

pub mod movement;
pub mod player_input;

pub use movement::{GridMovement, MoveProbe, MoveResult, MovementResolver, Obstacle};
pub use player_input::Direction;
