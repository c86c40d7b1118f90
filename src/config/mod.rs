mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// yt-dlp flags that would defeat single-resource, workspace-confined runs.
const FORBIDDEN_EXTRA_ARGS: &[&str] = &["--yes-playlist", "--cache-dir", "--rm-cache-dir"];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./vidinfo.toml",
        "~/.config/vidinfo/config.toml",
        "/etc/vidinfo/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.extractor.timeout_secs == 0 {
        anyhow::bail!("Extractor timeout must be at least 1 second");
    }

    if config.extractor.probe_timeout_secs == 0 {
        anyhow::bail!("Extractor probe timeout must be at least 1 second");
    }

    for arg in &config.extractor.extra_args {
        let flag = arg.split('=').next().unwrap_or(arg);
        if FORBIDDEN_EXTRA_ARGS.contains(&flag) {
            anyhow::bail!("Extractor argument '{}' is not allowed", arg);
        }
    }

    if let Some(ref path) = config.extractor.path {
        if !path.exists() {
            tracing::warn!("Configured yt-dlp path does not exist: {:?}", path);
        }
    }

    if let Some(ref dir) = config.extractor.work_dir {
        if !dir.is_dir() {
            anyhow::bail!("Extractor work_dir is not a directory: {:?}", dir);
        }
    }

    if config.selection.total() == 0 {
        tracing::warn!("All selection limits are 0; responses will contain no formats");
    }

    Ok(())
}
