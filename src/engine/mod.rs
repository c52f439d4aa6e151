//! Game engine - owns all game state and advances it one frame at a time.
//!
//! The application shell (main.rs) only handles:
//! - Reading input and forwarding it to the engine
//! - Reporting what the engine returns

pub mod floor_transition;
mod game_state;

pub use floor_transition::{LevelReloader, SceneTransitioner};
pub use game_state::{FrameReport, GameState, SharedAuthority};
