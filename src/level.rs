//! A single room: terrain plus the objects placed on it.

use crate::components::{BlocksMovement, Inactive, Position, TriggerTag};
use crate::error::{GameError, Result};
use crate::grid::Grid;
use crate::spawning::LevelObject;
use crate::tile::TileType;
use hecs::{Entity, World};

pub struct Level {
    pub grid: Grid,
    pub world: World,
    pub player_start: Position,
}

impl Level {
    /// Parse an ASCII room. The first line is the top row.
    ///
    /// `#` wall, `.` floor, `@` player start, `T` totem, `c` coin,
    /// `f` fire element, `E` exit. Objects and the player start sit on floor.
    pub fn from_ascii(map: &str) -> Result<Self> {
        let rows: Vec<&str> = map
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(GameError::InvalidLevel("map is empty".into()));
        };
        let width = first.chars().count();
        let height = rows.len();

        let mut grid = Grid::new(width, height);
        let mut world = World::new();
        let mut player_start = None;

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(GameError::InvalidLevel(format!(
                    "row {} has {} columns, expected {}",
                    row,
                    line.chars().count(),
                    width
                )));
            }
            let y = (height - 1 - row) as i32;

            for (col, glyph) in line.chars().enumerate() {
                let pos = Position::new(col as i32, y);
                let tile_type = match glyph {
                    '#' => TileType::Wall,
                    ' ' => TileType::Empty,
                    '.' => TileType::Floor,
                    '@' => {
                        if player_start.replace(pos).is_some() {
                            return Err(GameError::InvalidLevel(
                                "more than one player start".into(),
                            ));
                        }
                        TileType::Floor
                    }
                    other => {
                        let Some(object) = LevelObject::from_glyph(other) else {
                            return Err(GameError::InvalidLevel(format!(
                                "unknown glyph {:?} at row {}, column {}",
                                other, row, col
                            )));
                        };
                        object.spawn(&mut world, pos);
                        TileType::Floor
                    }
                };
                if let Some(tile) = grid.get_mut(pos.x, pos.y) {
                    tile.tile_type = tile_type;
                }
            }
        }

        let Some(player_start) = player_start else {
            return Err(GameError::InvalidLevel("no player start ('@')".into()));
        };

        Ok(Self {
            grid,
            world,
            player_start,
        })
    }

    /// Active object blocking movement at `pos`, if any
    pub fn blocking_at(&self, pos: Position) -> Option<Entity> {
        self.world
            .query::<(&Position, &BlocksMovement)>()
            .iter()
            .find(|(id, (blocker, _))| **blocker == pos && self.is_active(*id))
            .map(|(id, _)| id)
    }

    /// Active trigger volumes under `pos`
    pub fn triggers_at(&self, pos: Position) -> Vec<(Entity, TriggerTag)> {
        self.world
            .query::<(&Position, &TriggerTag)>()
            .iter()
            .filter(|(id, (trigger, _))| **trigger == pos && self.is_active(*id))
            .map(|(id, (_, tag))| (id, *tag))
            .collect()
    }

    pub fn is_active(&self, entity: Entity) -> bool {
        self.world.contains(entity) && self.world.get::<&Inactive>(entity).is_err()
    }

    /// Switch an object off. Returns false if it was already off or is gone.
    pub fn deactivate(&mut self, entity: Entity) -> bool {
        if !self.is_active(entity) {
            return false;
        }
        self.world.insert_one(entity, Inactive).is_ok()
    }

    /// Number of still-active triggers with the given tag
    pub fn count_active(&self, tag: TriggerTag) -> usize {
        self.world
            .query::<&TriggerTag>()
            .iter()
            .filter(|(id, t)| **t == tag && self.is_active(*id))
            .count()
    }
}
