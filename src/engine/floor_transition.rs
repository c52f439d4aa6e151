//! Level reload requests.
//!
//! The player only asks for the current level to be reloaded; the session
//! that owns the level decides when and how to rebuild it.

use log::debug;

/// Anything that can reload the level the player is in
pub trait SceneTransitioner {
    fn reload_current_level(&mut self);
}

/// Records reload requests until the session gets round to them
#[derive(Debug, Default)]
pub struct LevelReloader {
    pending: bool,
    reloads: u32,
}

impl LevelReloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request, if any
    pub fn take_request(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Number of reloads requested so far
    pub fn reloads(&self) -> u32 {
        self.reloads
    }
}

impl SceneTransitioner for LevelReloader {
    fn reload_current_level(&mut self) {
        self.pending = true;
        self.reloads += 1;
        debug!("level reload requested ({} so far)", self.reloads);
    }
}
