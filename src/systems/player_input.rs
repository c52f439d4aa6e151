//! Player input interpretation.
//!
//! Converts raw axis input into a single cardinal direction.

use glam::IVec2;

/// Grid direction for one move attempt. `Up` is +y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Resolve two axis signals into at most one axis of movement.
    ///
    /// Horizontal input wins: when the horizontal axis is non-zero the
    /// vertical axis is ignored, so a diagonal press always moves sideways.
    /// Each axis is reduced to its sign first.
    pub fn from_axes(axes: IVec2) -> Self {
        let horizontal = axes.x.signum();
        let vertical = if horizontal != 0 { 0 } else { axes.y.signum() };

        match (horizontal, vertical) {
            (1, _) => Direction::Right,
            (-1, _) => Direction::Left,
            (_, 1) => Direction::Up,
            (_, -1) => Direction::Down,
            _ => Direction::None,
        }
    }

    /// Grid step for this direction
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, 1),
            Direction::Down => IVec2::new(0, -1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
            Direction::None => IVec2::ZERO,
        }
    }

    pub fn is_none(self) -> bool {
        self == Direction::None
    }
}
