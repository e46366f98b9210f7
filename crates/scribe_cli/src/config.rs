//! TOML configuration with flag overrides layered on top.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

const DEFAULT_INTERVAL_SECS: u64 = 3;
const DEFAULT_SINK_ENDPOINT: &str = "http://localhost:8765/api/add";
const DEFAULT_MAX_RETRIES: u32 = 0;

const DEFAULT_CONFIG_PATHS: &[&str] = &["./scribe.toml", "~/.config/scribe.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub watch: WatchConfig,
    pub sink: SinkConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchConfig {
    /// Address of the live chat page; drives platform lookup and
    /// conversation identity.
    pub page_url: Option<Url>,

    /// Snapshot source: an HTML file path (re-read every cycle) or an
    /// http(s) URL.
    pub snapshot: Option<String>,

    /// Seconds between capture cycles.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            page_url: None,
            snapshot: None,
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    DEFAULT_INTERVAL_SECS
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SinkConfig {
    /// Capture endpoint receiving the JSON payload.
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,

    /// Re-attempts per delivery. Zero means one attempt, no retry.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_SINK_ENDPOINT).expect("default endpoint is a valid URL")
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

impl Config {
    /// Load the first config file that exists, falling back to defaults.
    ///
    /// An explicitly passed path is tried before the default search list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map(Path::to_path_buf)
            .into_iter()
            .chain(DEFAULT_CONFIG_PATHS.iter().map(|path| {
                PathBuf::from(path.replace('~', &env::var("HOME").unwrap_or_default()))
            }))
            .find(|path| path.exists())
            .map_or_else(|| Ok(Self::default()), |path| Self::load_from_file(&path))
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
