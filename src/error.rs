//! Error type shared by the player controller, level loading and config.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    /// A turn-gated operation arrived before `on_activate` bound an authority.
    #[error("no turn authority is bound to the player")]
    AuthorityUnbound,

    #[error("player is already bound to a turn authority")]
    AlreadyActive,

    #[error("invalid config: {0}")]
    Config(String),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid level map: {0}")]
    InvalidLevel(String),
}
