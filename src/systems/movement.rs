//! Player movement resolution.
//!
//! A [`MovementResolver`] inspects the level and says what one step would
//! run into, without changing anything.

use crate::components::{Position, Totem};
use crate::level::Level;
use crate::systems::player_input::Direction;
use hecs::Entity;

/// Everything the player can bump into and interact with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    Totem(Entity),
}

/// What a step in some direction would run into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveProbe {
    /// The target tile is free
    Clear(Position),
    /// An interactable obstacle occupies the target tile
    Obstacle(Obstacle),
    /// Wall, level edge or a blocker with no interaction
    Wall,
}

/// Result of a player move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved(Position),
    Attacked(Obstacle),
    Blocked,
}

pub trait MovementResolver {
    fn probe(&self, level: &Level, from: Position, direction: Direction) -> MoveProbe;
}

/// Single-tile steps over a [`Level`]'s grid and blockers
#[derive(Debug, Clone, Copy, Default)]
pub struct GridMovement;

impl MovementResolver for GridMovement {
    fn probe(&self, level: &Level, from: Position, direction: Direction) -> MoveProbe {
        if direction.is_none() {
            return MoveProbe::Wall;
        }

        let target = from.offset(direction.offset());
        if !level.grid.is_walkable(target) {
            return MoveProbe::Wall;
        }

        match level.blocking_at(target) {
            Some(blocker) if level.world.get::<&Totem>(blocker).is_ok() => {
                MoveProbe::Obstacle(Obstacle::Totem(blocker))
            }
            Some(_) => MoveProbe::Wall,
            None => MoveProbe::Clear(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::BlocksMovement;

    const ROOM: &str = "\
#####
#@.T#
#####";

    #[test]
    fn test_clear_step() {
        let level = Level::from_ascii(ROOM).unwrap();
        let probe = GridMovement.probe(&level, level.player_start, Direction::Right);
        assert_eq!(probe, MoveProbe::Clear(Position::new(2, 1)));
    }

    #[test]
    fn test_wall_blocks() {
        let level = Level::from_ascii(ROOM).unwrap();
        assert_eq!(
            GridMovement.probe(&level, level.player_start, Direction::Up),
            MoveProbe::Wall
        );
        assert_eq!(
            GridMovement.probe(&level, level.player_start, Direction::Left),
            MoveProbe::Wall
        );
    }

    #[test]
    fn test_totem_is_obstacle() {
        let level = Level::from_ascii(ROOM).unwrap();
        let totem = level.blocking_at(Position::new(3, 1)).unwrap();
        assert_eq!(
            GridMovement.probe(&level, Position::new(2, 1), Direction::Right),
            MoveProbe::Obstacle(Obstacle::Totem(totem))
        );
    }

    #[test]
    fn test_plain_blocker_acts_like_wall() {
        let mut level = Level::from_ascii(ROOM).unwrap();
        level.world.spawn((Position::new(2, 1), BlocksMovement));
        assert_eq!(
            GridMovement.probe(&level, level.player_start, Direction::Right),
            MoveProbe::Wall
        );
    }

    #[test]
    fn test_no_direction_goes_nowhere() {
        let level = Level::from_ascii(ROOM).unwrap();
        assert_eq!(
            GridMovement.probe(&level, level.player_start, Direction::None),
            MoveProbe::Wall
        );
    }
}
