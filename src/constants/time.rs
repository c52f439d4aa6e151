//! Time system constants.

/// Delay before the level restarts once the player reaches the exit (seconds)
pub const RESTART_LEVEL_DELAY: f32 = 1.0;

/// Simulated seconds per frame when driving a session from the command line
pub const FRAME_DURATION: f32 = 0.25;
