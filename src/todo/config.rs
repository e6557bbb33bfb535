use crate::error::{Result, TodoError};
use crate::store::Backend;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for todo, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Storage engine for this data directory ("json" or "sqlite")
    #[serde(default)]
    pub backend: Backend,
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            TodoError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let mut tmp = NamedTempFile::new_in(config_dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(config_dir.join(CONFIG_FILENAME)).map_err(|e| e.error)?;
        Ok(())
    }

    /// Read a key by its CLI name.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "backend" => Ok(self.backend.to_string()),
            other => Err(TodoError::Config(format!("unknown config key '{other}'"))),
        }
    }

    /// Set a key by its CLI name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend" => {
                self.backend = value.parse()?;
                Ok(())
            }
            other => Err(TodoError::Config(format!("unknown config key '{other}'"))),
        }
    }
}
