//! Error types for vidinfo-av.

use std::process::ExitStatus;
use std::time::Duration;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running an external tool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is missing or not executable.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// The tool ran but exited unsuccessfully. `message` is its stderr.
    #[error("tool execution failed: {tool} ({status}): {message}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        message: String,
    },

    /// The tool did not finish within its time budget and was killed.
    #[error("{tool} timed out after {timeout:?}")]
    Timeout { tool: String, timeout: Duration },

    /// Failed to parse tool output.
    #[error("failed to parse {tool} output: {message}")]
    ParseError { tool: String, message: String },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Workspace error.
    #[error("workspace error: {0}")]
    Workspace(String),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            tool: tool.into(),
            message: message.into(),
        }
    }
}
