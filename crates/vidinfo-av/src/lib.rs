//! # vidinfo-av
//!
//! External extractor integration for vidinfo.
//!
//! This crate provides:
//!
//! - **Command execution** ([`ToolCommand`]) -- async builder with timeout
//!   support. Timed out or abandoned children are killed.
//! - **Workspace management** ([`Workspace`]) -- a disposable temporary
//!   directory per invocation, removed on every exit path.
//! - **Tool discovery** ([`check_tool`], [`require_tool`], [`get_tool_path`]).
//! - **yt-dlp** ([`YtDlp`]) -- metadata extraction for a single URL, decoded
//!   into [`vidinfo_common::RawVideoDocument`].
//!
//! ## Features
//!
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use vidinfo_av::YtDlp;
//! use vidinfo_common::{normalize, SelectionLimits};
//!
//! # async fn example() -> vidinfo_av::Result<()> {
//! let ytdlp = YtDlp::discover(None);
//! let doc = ytdlp.extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await?;
//! let info = normalize(&doc, &SelectionLimits::default());
//! println!("{} ({} formats)", info.title, info.formats.len());
//! # Ok(())
//! # }
//! ```

pub mod command;
mod error;
pub mod tools;
pub mod workspace;
pub mod ytdlp;

// Re-exports
pub use command::{ToolCommand, ToolOutput};
pub use error::{Error, Result};
pub use tools::{check_tool, get_tool_path, require_tool, ToolInfo};
pub use workspace::Workspace;
pub use ytdlp::YtDlp;
