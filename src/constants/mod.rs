//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod dungeon;
mod gameplay;
mod time;

pub use dungeon::*;
pub use gameplay::*;
pub use time::*;
