// ABOUTME: Job configuration for dumpinfo.yml.
// ABOUTME: Controls which optional sections the console report includes.

mod init;

pub use init::init_config;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "dumpinfo.yml";
pub const CONFIG_FILENAME_ALT: &str = "dumpinfo.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".dumpinfo/config.yml";

const KNOWN_KEYS: [&str; 3] = ["dump_nodes", "dump_tools", "dump_plugins"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Dump worker node status.
    #[serde(default = "enabled")]
    pub dump_nodes: bool,

    /// Dump configured JDK installations.
    #[serde(default = "enabled")]
    pub dump_tools: bool,

    /// Dump installed plugins.
    #[serde(default = "enabled")]
    pub dump_plugins: bool,
}

fn enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dump_nodes: true,
            dump_tools: true,
            dump_plugins: true,
        }
    }
}

impl Config {
    /// Parse a configuration document. An empty document yields the defaults;
    /// unknown keys are rejected so a misspelled flag is not silently ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;

        match &value {
            serde_yaml::Value::Null => return Ok(Self::default()),
            serde_yaml::Value::Mapping(map) => {
                for key in map.keys() {
                    match key.as_str() {
                        Some(k) if KNOWN_KEYS.contains(&k) => {}
                        Some(k) => {
                            return Err(Error::InvalidConfig(format!(
                                "unknown key `{k}` (expected one of: {})",
                                KNOWN_KEYS.join(", ")
                            )));
                        }
                        None => {
                            return Err(Error::InvalidConfig(format!(
                                "non-string key: {key:?}"
                            )));
                        }
                    }
                }
            }
            _ => {
                return Err(Error::InvalidConfig(
                    "expected a mapping of dump flags".to_string(),
                ));
            }
        }

        serde_yaml::from_value(value).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("loading configuration from {}", path.display());
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like [`Config::discover`], but falls back to defaults when no file exists.
    /// Parse errors in a file that does exist are still returned.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }
}
