//! Input handling.
//!
//! Tracks held movement keys and turns them into raw axis signals, each in
//! {-1, 0, 1}. Opposite keys held together cancel out.

use glam::IVec2;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Key for a typed command character (`wasd`, case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Key::W),
            'a' => Some(Key::A),
            's' => Some(Key::S),
            'd' => Some(Key::D),
            _ => None,
        }
    }
}

/// Input state tracking
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_pressed: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.keys_pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys_pressed.remove(&key);
    }

    pub fn clear(&mut self) {
        self.keys_pressed.clear();
    }

    fn held(&self, a: Key, b: Key) -> i32 {
        (self.keys_pressed.contains(&a) || self.keys_pressed.contains(&b)) as i32
    }

    /// Horizontal axis in `x`, vertical axis in `y` (up is positive)
    pub fn axes(&self) -> IVec2 {
        let horizontal = self.held(Key::D, Key::ArrowRight) - self.held(Key::A, Key::ArrowLeft);
        let vertical = self.held(Key::W, Key::ArrowUp) - self.held(Key::S, Key::ArrowDown);
        IVec2::new(horizontal, vertical)
    }
}
