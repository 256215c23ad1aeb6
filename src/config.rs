use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::{InputOrder, MAX_EXPLORED_NODES, TICKS_PER_SECOND, TILE_WIDTH};

pub const CONFIG_ENV_VAR: &str = "TILEFALL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Runtime settings for the front end and the explorer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ticks_per_second: u32,
    /// Characters used to draw one tile.
    pub tile_width: u16,
    pub input_order: InputOrder,
    pub max_explored_nodes: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            ticks_per_second: TICKS_PER_SECOND,
            tile_width: TILE_WIDTH,
            input_order: InputOrder::Fifo,
            max_explored_nodes: MAX_EXPLORED_NODES,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reads the file named by `TILEFALL_CONFIG`, or falls back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = GameConfig::from_json(r#"{ "ticks_per_second": 60 }"#).unwrap();
        assert_eq!(config.ticks_per_second, 60);
        assert_eq!(config.tile_width, TILE_WIDTH);
        assert_eq!(config.input_order, InputOrder::Fifo);
    }

    #[test]
    fn input_order_is_lowercase() {
        let config = GameConfig::from_json(r#"{ "input_order": "lifo" }"#).unwrap();
        assert_eq!(config.input_order, InputOrder::Lifo);
    }
}
