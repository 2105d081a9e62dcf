use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_DATA_PATH;
use crate::error::{MovieError, Result};
use crate::query::DEFAULT_SAMPLE_SIZE;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MOVIE_CARDS_CONFIG";

/// Project-local config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "movie-cards.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

impl Config {
    /// Build the effective configuration: defaults, then config files,
    /// then environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(local) = Self::load_patch(Path::new(LOCAL_CONFIG_FILE))? {
                config.merge_patch(local);
            }
        }

        config.apply_overrides(env_string)?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("movie-cards/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            MovieError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            MovieError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.data {
            self.data.merge(patch);
        }
        if let Some(patch) = patch.server {
            self.server.merge(patch);
        }
        if let Some(patch) = patch.sampling {
            self.sampling.merge(patch);
        }
    }

    /// Apply `MOVIE_CARDS_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("MOVIE_CARDS_DATA_PATH") {
            self.data.path = PathBuf::from(value);
        }
        if let Some(value) = lookup("MOVIE_CARDS_ADDR") {
            self.server.addr = value;
        }
        if let Some(value) = lookup("MOVIE_CARDS_SAMPLE_SIZE") {
            self.sampling.size = value.trim().parse::<usize>().map_err(|err| {
                MovieError::Config(format!("invalid MOVIE_CARDS_SAMPLE_SIZE value {value}: {err}"))
            })?;
        }
        Ok(())
    }

    /// The bind address, validated.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        parse_addr(&self.server.addr)
    }
}

pub fn parse_addr(raw: &str) -> Result<SocketAddr> {
    raw.trim()
        .parse()
        .map_err(|err| MovieError::Config(format!("invalid server address {raw}: {err}")))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl DataConfig {
    fn merge(&mut self, patch: DataPatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8000".to_string(),
        }
    }
}

impl ServerConfig {
    fn merge(&mut self, patch: ServerPatch) {
        if let Some(value) = patch.addr {
            self.addr = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub size: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl SamplingConfig {
    fn merge(&mut self, patch: SamplingPatch) {
        if let Some(value) = patch.size {
            self.size = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub data: Option<DataPatch>,
    pub server: Option<ServerPatch>,
    pub sampling: Option<SamplingPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DataPatch {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ServerPatch {
    pub addr: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SamplingPatch {
    pub size: Option<usize>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
