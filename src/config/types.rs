use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use vidinfo_common::SelectionLimits;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub extractor: ExtractorConfig,

    #[serde(default)]
    pub selection: SelectionLimits,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS. Empty (or containing "*") allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractorConfig {
    /// Explicit path to the yt-dlp executable (PATH lookup otherwise)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Time budget for a single extraction
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Time budget for the `--version` availability probe
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Extra arguments passed to yt-dlp before the URL
    #[serde(default)]
    pub extra_args: Vec<String>,

    /// Parent directory for per-request workspaces (system temp dir otherwise)
    #[serde(default)]
    pub work_dir: Option<PathBuf>,
}

fn default_timeout_secs() -> u64 {
    30
}
fn default_probe_timeout_secs() -> u64 {
    10
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            path: None,
            timeout_secs: default_timeout_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
            extra_args: Vec::new(),
            work_dir: None,
        }
    }
}

impl ExtractorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}
