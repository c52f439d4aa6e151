//! Spawning of level objects.
//!
//! Each map glyph that is not terrain names one kind of object; the kind
//! decides which components the spawned entity carries.

use crate::components::{BlocksMovement, Position, Totem, TriggerTag};
use hecs::{Entity, World};

/// Objects that can be placed on a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelObject {
    Totem,
    Coin,
    FireElement,
    Exit,
}

impl LevelObject {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'T' => Some(LevelObject::Totem),
            'c' => Some(LevelObject::Coin),
            'f' => Some(LevelObject::FireElement),
            'E' => Some(LevelObject::Exit),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            LevelObject::Totem => 'T',
            LevelObject::Coin => 'c',
            LevelObject::FireElement => 'f',
            LevelObject::Exit => 'E',
        }
    }

    /// Spawn this object at the given position
    pub fn spawn(&self, world: &mut World, pos: Position) -> Entity {
        match self {
            LevelObject::Totem => spawn_totem(world, pos),
            LevelObject::Coin => spawn_trigger(world, pos, TriggerTag::Coin),
            LevelObject::FireElement => spawn_trigger(world, pos, TriggerTag::ElementFire),
            LevelObject::Exit => spawn_trigger(world, pos, TriggerTag::Exit),
        }
    }
}

pub fn spawn_totem(world: &mut World, pos: Position) -> Entity {
    world.spawn((pos, Totem::new(), BlocksMovement))
}

/// Spawn a non-blocking trigger volume
pub fn spawn_trigger(world: &mut World, pos: Position, tag: TriggerTag) -> Entity {
    world.spawn((pos, tag))
}
