//! Runtime configuration.
//!
//! Settings come from an optional TOML file with CLI/env overrides
//! applied afterwards in `main`. Loading never hard-fails on the default
//! file: a broken `aerocast.toml` in the working directory degrades to
//! defaults with a warning, while an explicitly passed path must parse.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Name probed in the working directory when no config path is given.
const DEFAULT_CONFIG_FILE: &str = "aerocast.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub seed: SeedConfig,
    pub assets: AssetsConfig,
    /// Permissive CORS and relaxed defaults for local operation.
    pub dev_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            seed: SeedConfig::default(),
            assets: AssetsConfig::default(),
            dev_mode: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed outside dev mode. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// JSON roster file (`{"teams": [...]}`) loaded once at startup.
    /// Absent means the embedded demo roster.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the `overlay/` and `control-panel/` bundles.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
}

impl Config {
    /// Loads configuration, collecting non-fatal warnings for startup
    /// logging instead of printing from here.
    pub fn load(path: Option<&Path>) -> anyhow::Result<ConfigLoad> {
        let mut warnings = Vec::new();

        let config = match path {
            Some(explicit) => Self::parse_file(explicit)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    match Self::parse_file(default_path) {
                        Ok(config) => config,
                        Err(err) => {
                            warnings.push(ConfigWarning {
                                message: format!(
                                    "ignoring {}: {err:#}",
                                    default_path.display()
                                ),
                            });
                            Config::default()
                        }
                    }
                } else {
                    Config::default()
                }
            }
        };

        if !config.dev_mode && config.cors.allowed_origins.is_empty() {
            warnings.push(ConfigWarning {
                message: "dev_mode is off but no CORS allow-list is configured; \
                          any origin will be accepted"
                    .to_string(),
            });
        }

        Ok(ConfigLoad { config, warnings })
    }

    fn parse_file(path: &Path) -> anyhow::Result<Config> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
