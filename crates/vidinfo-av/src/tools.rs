//! External tool detection.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::command::ToolCommand;
use crate::{Error, Result};

/// Information about an external tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool answered its version probe.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Probe a tool by running `<program> --version`.
///
/// The tool counts as available only if the probe exits successfully within
/// `timeout`. The first line of stdout is reported as the version.
pub async fn check_tool(name: &str, program: &Path, timeout: Duration) -> ToolInfo {
    let result = ToolCommand::new(program)
        .arg("--version")
        .timeout(timeout)
        .execute()
        .await;

    match result {
        Ok(output) => ToolInfo {
            name: name.to_string(),
            available: true,
            version: output.stdout.lines().next().map(|s| s.trim().to_string()),
            path: which::which(program).ok(),
        },
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(tool = name, error = %_e, "Tool probe failed");
            ToolInfo {
                name: name.to_string(),
                available: false,
                version: None,
                path: None,
            }
        }
    }
}

/// Require that a tool is on `PATH`, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        #[cfg(feature = "tracing")]
        tracing::warn!(
            tool = name,
            path = %path.display(),
            "Configured tool path does not exist, falling back to PATH"
        );
    }

    require_tool(name)
}
