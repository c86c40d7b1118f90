//! yt-dlp extractor adapter.
//!
//! [`YtDlp`] runs `yt-dlp --dump-json` for a single URL inside a disposable
//! [`Workspace`] and decodes the document it prints.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use vidinfo_common::RawVideoDocument;

use crate::command::ToolCommand;
use crate::tools::{check_tool, get_tool_path, ToolInfo};
use crate::workspace::Workspace;
use crate::{Error, Result};

/// Executable name looked up on `PATH`.
pub const PROGRAM: &str = "yt-dlp";

/// Default time budget for one extraction.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default time budget for the `--version` availability probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle to the yt-dlp executable and its invocation settings.
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
    timeout: Duration,
    probe_timeout: Duration,
    extra_args: Vec<String>,
    work_root: Option<PathBuf>,
}

impl YtDlp {
    /// Use the executable at `program` as-is.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            extra_args: Vec::new(),
            work_root: None,
        }
    }

    /// Resolve the executable once, preferring `configured` over `PATH`.
    ///
    /// When neither resolves, the bare program name is kept so that an
    /// installation made after startup is still found at spawn time.
    pub fn discover(configured: Option<&Path>) -> Self {
        match get_tool_path(PROGRAM, configured) {
            Ok(path) => {
                #[cfg(feature = "tracing")]
                tracing::info!(path = %path.display(), "Resolved yt-dlp");
                Self::new(path)
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("yt-dlp not found on PATH; extraction requests will fail until it is installed");
                Self::new(PROGRAM)
            }
        }
    }

    /// Set the extraction time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the version probe time budget.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Extra arguments inserted before the URL.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Create per-invocation workspaces under `root` instead of the system
    /// temp directory.
    pub fn with_work_root(mut self, root: Option<PathBuf>) -> Self {
        self.work_root = root;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the version probe and report what was found.
    pub async fn check(&self) -> ToolInfo {
        check_tool(PROGRAM, &self.program, self.probe_timeout).await
    }

    /// Whether the executable answers its version probe.
    pub async fn is_available(&self) -> bool {
        self.check().await.available
    }

    /// Arguments for a metadata-only, single-resource extraction.
    pub fn extract_args(&self, url: &str, cache_dir: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> =
            ["--dump-json", "--no-download", "--no-playlist", "--cache-dir"]
                .into_iter()
                .map(OsString::from)
                .collect();
        args.push(cache_dir.as_os_str().to_os_string());
        args.extend(self.extra_args.iter().map(OsString::from));
        args.push(OsString::from(url));
        args
    }

    /// Extract the metadata document for `url`.
    ///
    /// The process runs in a fresh workspace that is removed before this
    /// returns, on success, failure and timeout alike.
    ///
    /// # Errors
    ///
    /// Propagates [`ToolCommand::execute`] errors and returns
    /// [`Error::ParseError`] when stdout is not a JSON document.
    pub async fn extract(&self, url: &str) -> Result<RawVideoDocument> {
        let workspace = match &self.work_root {
            Some(root) => Workspace::in_dir(root)?,
            None => Workspace::new()?,
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            url,
            workspace = %workspace.path().display(),
            timeout = ?self.timeout,
            "Running yt-dlp"
        );

        let output = ToolCommand::new(&self.program)
            .args(self.extract_args(url, workspace.path()))
            .current_dir(workspace.path())
            .timeout(self.timeout)
            .execute()
            .await?;

        let document = parse_document(&output.stdout)?;

        if let Err(_e) = workspace.cleanup() {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "Failed to remove yt-dlp workspace");
        }

        Ok(document)
    }
}

/// Decode the first JSON document on stdout.
pub fn parse_document(stdout: &str) -> Result<RawVideoDocument> {
    if stdout.trim().is_empty() {
        return Err(Error::parse_error(PROGRAM, "no output"));
    }

    serde_json::Deserializer::from_str(stdout)
        .into_iter::<RawVideoDocument>()
        .next()
        .unwrap_or_else(|| Err(serde::de::Error::custom("no JSON document")))
        .map_err(|e| Error::parse_error(PROGRAM, e.to_string()))
}
