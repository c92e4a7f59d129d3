use crate::error::{HabitzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "habits.jsonl";
const DEFAULT_BAR_DAYS: usize = 30;

/// Configuration for habitz, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitzConfig {
    /// Name of the habit file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Number of days shown by the progress bar in `habitz list`
    #[serde(default = "default_bar_days")]
    pub bar_days: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_bar_days() -> usize {
    DEFAULT_BAR_DAYS
}

impl Default for HabitzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            bar_days: DEFAULT_BAR_DAYS,
        }
    }
}

impl HabitzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HabitzError::Io)?;
        let config: HabitzConfig = serde_json::from_str(&content).map_err(|e| {
            HabitzError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let data_file = self.data_file.trim();
        if data_file.is_empty() {
            return Err(HabitzError::Config("data_file cannot be empty".to_string()));
        }
        if Path::new(data_file).components().count() != 1 {
            return Err(HabitzError::Config(format!(
                "data_file must be a plain file name, got '{}'",
                self.data_file
            )));
        }
        Ok(())
    }

    /// Full path of the habit file inside `data_dir`.
    pub fn data_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(self.data_file.trim())
    }
}
