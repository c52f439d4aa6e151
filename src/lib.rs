//! Turn-based player control for a tile-based dungeon room.
//!
//! [`player::PlayerTurnController`] is the core: it moves the player one tile
//! per turn, strikes totems that block it, collects pickups and reports game
//! over. [`engine::GameState`] wires it to a level and a game manager.

pub mod authority;
pub mod components;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod grid;
pub mod input;
pub mod level;
pub mod player;
pub mod spawning;
pub mod systems;
pub mod tile;
pub mod time_system;

pub use error::{GameError, Result};
