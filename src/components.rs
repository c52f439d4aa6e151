use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Position component - grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Marker for objects the player cannot walk through
#[derive(Debug, Clone, Copy)]
pub struct BlocksMovement;

/// Marker for objects switched off after being picked up. Inactive objects
/// neither block movement nor fire trigger overlaps.
#[derive(Debug, Clone, Copy)]
pub struct Inactive;

/// Elemental affinities the player can unlock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a trigger volume, as carried by an overlap event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerTag {
    Exit,
    ElementFire,
    Coin,
    /// Any tag the player does not react to
    Other,
}

impl TriggerTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerTag::Exit => "Exit",
            TriggerTag::ElementFire => "ElementFire",
            TriggerTag::Coin => "Coin",
            TriggerTag::Other => "Untagged",
        }
    }
}

impl From<&str> for TriggerTag {
    fn from(tag: &str) -> Self {
        match tag {
            "Exit" => TriggerTag::Exit,
            "ElementFire" => TriggerTag::ElementFire,
            "Coin" => TriggerTag::Coin,
            _ => TriggerTag::Other,
        }
    }
}

/// Totem component - a stationary obstacle that takes on an element each
/// time it is struck instead of being destroyed.
#[derive(Debug, Clone, Default)]
pub struct Totem {
    pub hits: u32,
    pub element: Option<Element>,
}

impl Totem {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to a hit by choosing the next unlocked element after the current
    /// one, wrapping around. Stays neutral while nothing is unlocked.
    pub fn on_hit(&mut self, unlocked: &BTreeSet<Element>) -> Option<Element> {
        use std::ops::Bound::{Excluded, Unbounded};

        self.hits += 1;
        let next = match self.element {
            Some(current) => unlocked
                .range((Excluded(current), Unbounded))
                .next()
                .or_else(|| unlocked.iter().next()),
            None => unlocked.iter().next(),
        };
        self.element = next.copied();
        self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_tag_parsing() {
        assert_eq!(TriggerTag::from("Exit"), TriggerTag::Exit);
        assert_eq!(TriggerTag::from("ElementFire"), TriggerTag::ElementFire);
        assert_eq!(TriggerTag::from("Coin"), TriggerTag::Coin);
        assert_eq!(TriggerTag::from("coin"), TriggerTag::Other);
        assert_eq!(TriggerTag::from("Enemy"), TriggerTag::Other);
    }

    #[test]
    fn test_totem_stays_neutral_without_elements() {
        let mut totem = Totem::new();
        assert_eq!(totem.on_hit(&BTreeSet::new()), None);
        assert_eq!(totem.hits, 1);
        assert_eq!(totem.element, None);
    }

    #[test]
    fn test_totem_takes_unlocked_element() {
        let mut totem = Totem::new();
        let unlocked: BTreeSet<Element> = [Element::Fire].into_iter().collect();
        assert_eq!(totem.on_hit(&unlocked), Some(Element::Fire));
        // Only one element unlocked, so the cycle wraps onto itself
        assert_eq!(totem.on_hit(&unlocked), Some(Element::Fire));
        assert_eq!(totem.hits, 2);
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(2, 3).offset(IVec2::new(-1, 0));
        assert_eq!(pos, Position::new(1, 3));
    }
}
