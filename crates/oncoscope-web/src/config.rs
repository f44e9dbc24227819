//! Server configuration: a small TOML file with environment overrides.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "oncoscope.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV export loaded into the mutation table at startup.
    pub dataset_path: PathBuf,
    pub bind_addr: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/mutations.csv"),
            bind_addr: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

impl AppConfig {
    /// Load `oncoscope.toml` if present, then apply environment overrides
    /// (`ONCOSCOPE_DATASET`, `ONCOSCOPE_ADDR`, `ONCOSCOPE_PORT`).
    pub fn load() -> Result<Self> {
        Self::from_file(Path::new(CONFIG_FILE))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("Malformed config {}", path.display()))?
        } else {
            debug!("No {} found, using defaults", path.display());
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var("ONCOSCOPE_DATASET") {
            self.dataset_path = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var("ONCOSCOPE_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = std::env::var("ONCOSCOPE_PORT") {
            self.port = value
                .parse()
                .with_context(|| format!("Invalid ONCOSCOPE_PORT: {}", value))?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.bind_addr, self.port))
    }
}
