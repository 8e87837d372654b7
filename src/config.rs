use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Game configuration. The board dimensions are fixed for the whole
/// session; the level format carries no dimension header.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Allocation hint for the move history.
    pub history_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 12,
            cols: 12,
            history_capacity: 1000,
        }
    }
}

impl GameConfig {
    pub fn from_file(path: &Path) -> Result<GameConfig, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<GameConfig, Box<dyn std::error::Error>> {
        match path {
            Some(p) => GameConfig::from_file(p),
            None => Ok(GameConfig::default()),
        }
    }
}
