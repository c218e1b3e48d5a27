use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

const APP_DIR: &str = "finance_core";
const CONFIG_FILE: &str = "config.json";

/// User preferences carried between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Accent color for the presentation layer, as a hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default)]
    pub autosave: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_file: Option<PathBuf>,
}

/// Loads and saves the configuration file under the platform config dir.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        let base = dirs::config_dir()
            .ok_or_else(|| LedgerError::Persistence("no config directory available".into()))?
            .join(APP_DIR);
        Self::from_base(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, LedgerError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the stored configuration, falling back to defaults when the
    /// file does not exist yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
