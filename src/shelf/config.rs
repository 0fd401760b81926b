use crate::error::{Result, ShelfError};
use crate::render::{RenderOptions, DEFAULT_SEPARATOR_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for shelf, read from an optional JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShelfConfig {
    /// Width of the hyphen line closing each result block
    pub separator_width: usize,

    /// Log filter used when neither SHELF_LOG nor --verbose is given
    pub log_level: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ShelfError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ShelfError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::with_separator_width(self.separator_width)
    }
}
