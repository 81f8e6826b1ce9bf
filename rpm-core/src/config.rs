//! Global RPM Life configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{RpmError, RpmResult};

static DEFAULT_DATA_DIR: &str = "~/rpm-life";
static DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4096;

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Global configuration at ~/.config/rpm-life/config.toml
///
/// Every key can be overridden from the environment with an `RPM_` prefix,
/// e.g. `RPM_PORT=8080` or `RPM_DATA_DIR=/srv/rpm`.
#[derive(Debug, Deserialize, Clone)]
pub struct RpmConfig {
    /// Directory holding the store files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for RpmConfig {
    fn default() -> Self {
        RpmConfig {
            data_dir: default_data_dir(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl RpmConfig {
    pub fn config_path() -> RpmResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RpmError::Config("Could not determine config directory".into()))?
            .join("rpm-life");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> RpmResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Read the global config if there is one, without creating it.
    /// Falls back to the defaults when the config directory is unknown.
    pub fn load_existing() -> RpmResult<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path. A missing file yields the defaults
    /// (plus any `RPM_*` environment overrides).
    pub fn load_from(path: &Path) -> RpmResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("RPM"))
            .build()
            .map_err(|e| RpmError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RpmError::Config(e.to_string()))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data directory in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.data_dir.clone()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RpmResult<()> {
        let contents = format!(
            "\
# RPM Life configuration

# Where the store files (categories.json, ...) live:
# data_dir = \"{}\"

# Address the server listens on:
# host = \"{}\"
# port = {}
",
            DEFAULT_DATA_DIR, DEFAULT_HOST, DEFAULT_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RpmError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RpmError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
