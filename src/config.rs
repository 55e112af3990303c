// SPDX-License-Identifier: MIT
//! Layered configuration for the assist commands.
//!
//! Priority (highest to lowest):
//!   1. CLI flag / env var — passed as `Some(value)` from clap
//!   2. `{data_dir}/config.toml`
//!   3. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `{data_dir}/config.toml` — all fields are optional overrides.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// Base URL of the assist service (default: http://127.0.0.1:5000).
    service_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    timeout_secs: Option<u64>,
    /// Log level filter string, e.g. "debug", "info,mori=trace" (default: "info").
    log: Option<String>,
}

fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

// ─── AssistConfig ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// Base URL of the assist service (MORI_SERVICE_URL env var).
    pub service_url: String,
    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,
    /// Log level filter string.
    pub log: String,
    pub data_dir: PathBuf,
}

impl AssistConfig {
    /// Build config from CLI/env args + optional TOML file.
    pub fn new(
        service_url: Option<String>,
        timeout_secs: Option<u64>,
        log: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);

        // TOML is the lowest-priority override layer.
        let toml = load_toml(&data_dir).unwrap_or_default();

        let service_url = service_url
            .or(toml.service_url)
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let timeout_secs = timeout_secs.or(toml.timeout_secs).unwrap_or(DEFAULT_TIMEOUT_SECS);
        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        Self {
            service_url,
            timeout_secs,
            log,
            data_dir,
        }
    }
}

fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("mori");
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("mori");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local").join("share").join("mori");
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("mori");
        }
    }
    PathBuf::from(".mori")
}
