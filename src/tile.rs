//! Terrain tiles.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    Empty,
    Floor,
    Wall,
}

impl TileType {
    pub fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor)
    }

    /// Map glyph for this terrain
    pub fn glyph(&self) -> char {
        match self {
            TileType::Empty => ' ',
            TileType::Floor => '.',
            TileType::Wall => '#',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tile {
    pub tile_type: TileType,
}

impl Tile {
    pub fn new(tile_type: TileType) -> Self {
        Self { tile_type }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(TileType::Empty)
    }
}
