//! Host configuration: frame pacing, cell mapping, seeding and logging.
//!
//! Read from an optional JSON file; every field has a default so an empty
//! object (or no file at all) is valid.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GameError, Result};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Target frame length in milliseconds (≈60 FPS by default).
    pub frame_ms: u64,
    /// World units covered by one terminal column.
    pub cell_width: f32,
    /// World units covered by one terminal row.
    pub cell_height: f32,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// Where tracing output goes; the terminal itself is in raw mode.
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            frame_ms: 16,
            cell_width: 10.0,
            cell_height: 20.0,
            seed: None,
            log_file: std::env::temp_dir().join("xp_shooter.log"),
        }
    }
}

impl GameConfig {
    /// Load from `path`, or return the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(GameConfig::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|e| match e {
            GameError::ConfigParse { source, .. } => GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(text).map_err(|source| GameError::ConfigParse {
                path: PathBuf::new(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_ms == 0 {
            return Err(GameError::ConfigValue("frame_ms must be positive".into()));
        }
        if !(self.cell_width > 0.0 && self.cell_height > 0.0) {
            return Err(GameError::ConfigValue(
                "cell_width and cell_height must be positive".into(),
            ));
        }
        Ok(())
    }
}
