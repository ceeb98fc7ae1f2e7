use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CLIENT: &str = "Claris International Inc";
pub const DEFAULT_MANAGER: &str = "Sudheer Tivare";
pub const DEFAULT_COMPANY: &str = "TechnoApex Ltd.";
pub const DEFAULT_EXPORT_PREFIX: &str = "Claris-TS";

/// Keys written to a fresh configuration file.
pub const CONFIG_KEYS: [&str; 5] = [
    "database",
    "default_client",
    "default_manager",
    "company_name",
    "export_prefix",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_client")]
    pub default_client: String,
    #[serde(default = "default_manager")]
    pub default_manager: String,
    #[serde(default = "default_company")]
    pub company_name: String,
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_client() -> String {
    DEFAULT_CLIENT.to_string()
}
fn default_manager() -> String {
    DEFAULT_MANAGER.to_string()
}
fn default_company() -> String {
    DEFAULT_COMPANY.to_string()
}
fn default_export_prefix() -> String {
    DEFAULT_EXPORT_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_client: default_client(),
            default_manager: default_manager(),
            company_name: default_company(),
            export_prefix: default_export_prefix(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from the standard file, or defaults if it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration: {e}")))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Keys absent from a configuration file body (their defaults are in use).
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration: {e}")))?;

        let map = value.as_mapping();
        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| map.is_none_or(|m| !m.contains_key(*k)))
            .collect())
    }

    /// Create the configuration directory and file, returning the config in use.
    ///
    /// `database` is the already resolved database path (see `--db`); it
    /// replaces the configured one. With `is_test` nothing is written to the
    /// config file.
    pub fn init_all(database: Option<&str>, is_test: bool) -> AppResult<Self> {
        let mut cfg = if is_test {
            Config::default()
        } else {
            Self::load()?
        };

        if let Some(db) = database {
            cfg.database = db.to_string();
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(Self::config_file(), cfg.to_yaml()?)?;
        }

        if let Some(parent) = Path::new(&cfg.database).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(cfg)
    }
}
