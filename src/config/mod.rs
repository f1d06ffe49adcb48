use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::utils::{ensure_dir, PathResolver};
use crate::errors::TrackerError;
use crate::storage::SeedPolicy;

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    /// Number of entries in the dashboard's recent list.
    pub recent_limit: usize,
    pub seed_demo_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            recent_limit: 5,
            seed_demo_data: true,
            log_filter: None,
        }
    }
}

impl Config {
    pub fn seed_policy(&self) -> SeedPolicy {
        if self.seed_demo_data {
            SeedPolicy::Demo
        } else {
            SeedPolicy::Empty
        }
    }

    /// Updates a single setting from its textual form.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        match key {
            "currency_symbol" => {
                if value.trim().is_empty() {
                    return Err(TrackerError::Config("currency_symbol cannot be empty".into()));
                }
                self.currency_symbol = value.trim().to_string();
            }
            "recent_limit" => {
                self.recent_limit = value.trim().parse().map_err(|_| {
                    TrackerError::Config(format!("recent_limit expects a number, got `{value}`"))
                })?;
            }
            "seed_demo_data" => {
                self.seed_demo_data = value.trim().parse().map_err(|_| {
                    TrackerError::Config(format!("seed_demo_data expects true or false, got `{value}`"))
                })?;
            }
            "log_filter" => {
                let trimmed = value.trim();
                self.log_filter = (!trimmed.is_empty()).then(|| trimmed.to_string());
            }
            other => {
                return Err(TrackerError::Config(format!("unknown setting `{other}`")));
            }
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, TrackerError> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, TrackerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Missing file means defaults; a malformed file is an error so a typo is
    /// not silently replaced on the next save.
    pub fn load(&self) -> Result<Config, TrackerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| {
                TrackerError::Config(format!("{}: {}", self.path.display(), err))
            })
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), TrackerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_and_reload() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.set_value("currency_symbol", "€").unwrap();
        config.set_value("recent_limit", "3").unwrap();
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"seed_demo_data": false}"#).unwrap();
        let config = manager.load().unwrap();
        assert!(!config.seed_demo_data);
        assert_eq!(config.seed_policy(), SeedPolicy::Empty);
        assert_eq!(config.recent_limit, 5);
    }

    #[test]
    fn malformed_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "{").unwrap();
        assert!(matches!(manager.load(), Err(TrackerError::Config(_))));
    }

    #[test]
    fn set_value_rejects_unknown_keys_and_bad_values() {
        let mut config = Config::default();
        assert!(config.set_value("colour", "blue").is_err());
        assert!(config.set_value("recent_limit", "many").is_err());
        assert!(config.set_value("currency_symbol", " ").is_err());
    }
}
