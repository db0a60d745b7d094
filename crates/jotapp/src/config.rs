use crate::error::{JotError, Result};
use crate::store::DEFAULT_STORAGE_KEY;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_STEM: &str = "config";
const CONFIG_FILENAME: &str = "config.json";

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "JOT_HOME";

/// Configuration for jot, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotConfig {
    /// Key the note collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Ask before deleting a note
    #[serde(default = "default_confirm_deletes")]
    pub confirm_deletes: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_confirm_deletes() -> bool {
    true
}

impl Default for JotConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            confirm_deletes: default_confirm_deletes(),
        }
    }
}

impl JotConfig {
    pub const KEYS: [&'static str; 2] = ["storage-key", "confirm-deletes"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JotError::Io)?;
        let config: JotConfig = serde_json::from_str(&content)
            .map_err(|e| JotError::Config(format!("{}: {}", config_path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JotError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JotError::Serialization)?;
        fs::write(config_path, content).map_err(JotError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "confirm-deletes" => Ok(self.confirm_deletes.to_string()),
            other => Err(JotError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let previous = std::mem::replace(&mut self.storage_key, value.trim().to_string());
                if let Err(e) = self.validate() {
                    self.storage_key = previous;
                    return Err(e);
                }
            }
            "confirm-deletes" => {
                self.confirm_deletes = parse_bool(value).ok_or_else(|| {
                    JotError::Config(format!("Expected true or false, got {:?}", value))
                })?;
            }
            other => return Err(JotError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let key = &self.storage_key;
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if key == CONFIG_STEM {
            return Err(JotError::Config(format!(
                "storage-key {:?} is reserved for the config file",
                key
            )));
        }
        if !valid {
            return Err(JotError::Config(format!(
                "storage-key must be non-empty and use only letters, digits, '-' or '_' (got {:?})",
                key
            )));
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Resolve the data directory: explicit path, then `JOT_HOME`, then the
/// platform data dir.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "jot", "jot")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| JotError::Config("Could not determine a data directory".to_string()))
}
