//! Player tuning loaded from JSON.
//!
//! Every field is optional in the file; missing fields fall back to the
//! values in [`crate::constants`].

use crate::constants::*;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Seconds between touching the exit and the level reloading
    pub restart_level_delay: f32,
    /// Coins added per coin pickup
    pub points_per_coin: i32,
    /// Hit points a freshly spawned player starts with
    pub starting_hit_points: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            restart_level_delay: RESTART_LEVEL_DELAY,
            points_per_coin: POINTS_PER_COIN,
            starting_hit_points: PLAYER_STARTING_HIT_POINTS,
        }
    }
}

impl PlayerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.restart_level_delay.is_finite() || self.restart_level_delay < 0.0 {
            return Err(GameError::Config(format!(
                "restart_level_delay must be a non-negative number of seconds, got {}",
                self.restart_level_delay
            )));
        }
        if self.points_per_coin < 0 {
            return Err(GameError::Config(format!(
                "points_per_coin must not be negative, got {}",
                self.points_per_coin
            )));
        }
        if self.starting_hit_points <= 0 {
            return Err(GameError::Config(format!(
                "starting_hit_points must be positive, got {}",
                self.starting_hit_points
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = PlayerConfig::default();
        assert_eq!(config.points_per_coin, 20);
        assert_eq!(config.starting_hit_points, 10);
        assert_eq!(config.restart_level_delay, 1.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PlayerConfig::from_json_str(r#"{ "points_per_coin": 5 }"#).unwrap();
        assert_eq!(config.points_per_coin, 5);
        assert_eq!(config.starting_hit_points, PLAYER_STARTING_HIT_POINTS);
    }

    #[test]
    fn test_rejects_negative_delay() {
        let err = PlayerConfig::from_json_str(r#"{ "restart_level_delay": -1.0 }"#).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_hit_points() {
        let err = PlayerConfig::from_json_str(r#"{ "starting_hit_points": 0 }"#).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = PlayerConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, GameError::Json(_)));
    }
}
