use crate::components::Position;
use crate::tile::{Tile, TileType};

/// Terrain of a single room. `y` grows upward, so row 0 is the bottom row.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
}

impl Grid {
    /// An open room with every tile walkable.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::new(TileType::Floor); width * height],
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&self.tiles[y as usize * self.width + x as usize])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&mut self.tiles[y as usize * self.width + x as usize])
    }

    /// Out-of-bounds positions are never walkable.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos.x, pos.y)
            .map(|tile| tile.tile_type.is_walkable())
            .unwrap_or(false)
    }
}
