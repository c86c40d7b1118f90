//! Shared test harness for integration tests.
//!
//! Provides [`FakeYtDlp`], a shell script standing in for yt-dlp inside a
//! temporary directory, and helpers to build a [`LookupService`] or a full
//! [`AppContext`] around it. Scripts log their arguments and working
//! directory next to themselves so tests can inspect each invocation.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;
use vidinfo::config::Config;
use vidinfo::lookup::LookupService;
use vidinfo::server::AppContext;
use vidinfo_av::YtDlp;
use vidinfo_common::SelectionLimits;

/// A document shaped like real `yt-dlp --dump-json` output.
pub const SAMPLE_DOCUMENT: &str = r#"{
  "id": "dQw4w9WgXcQ",
  "title": "Never Gonna Give You Up",
  "thumbnail": "https://i.ytimg.com/vi/dQw4w9WgXcQ/maxresdefault.jpg",
  "duration": 213,
  "uploader": "Rick Astley",
  "formats": [
    {"format_id": "sb0", "ext": "mhtml", "format_note": "storyboard", "url": "https://example.com/sb0"},
    {"format_id": "139", "ext": "m4a", "abr": 48.8, "filesize": 1290000, "url": "https://example.com/139"},
    {"format_id": "140", "ext": "m4a", "abr": 129.5, "filesize": 3433514, "url": "https://example.com/140"},
    {"format_id": "136", "ext": "mp4", "height": 720, "filesize": 13000000, "url": "https://example.com/136"},
    {"format_id": "137", "ext": "mp4", "height": 1080, "filesize": 25000000, "url": "https://example.com/137"},
    {"format_id": "299", "ext": "mp4", "height": 1080, "url": null}
  ]
}"#;

/// A fake yt-dlp executable living in its own temporary directory.
pub struct FakeYtDlp {
    dir: TempDir,
    work_root: TempDir,
}

impl FakeYtDlp {
    /// Script that prints `body`'s output for extractions and a version for
    /// `--version` probes.
    pub fn with_body(body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let work_root = tempfile::tempdir().unwrap();
        let log_dir = dir.path();

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then echo 2024.08.06; exit 0; fi\n\
             echo $$ > '{pid}'\n\
             touch '{invoked}'\n\
             printf '%s\\n' \"$@\" > '{args}'\n\
             pwd > '{cwd}'\n\
             echo cached > sigfuncs.json\n\
             {body}\n",
            pid = log_dir.join("pid").display(),
            invoked = log_dir.join("invoked").display(),
            args = log_dir.join("args").display(),
            cwd = log_dir.join("cwd").display(),
        );

        let program = dir.path().join("yt-dlp");
        fs::write(&program, script).unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir, work_root }
    }

    /// Prints [`SAMPLE_DOCUMENT`] and exits 0.
    pub fn success() -> Self {
        Self::printing(SAMPLE_DOCUMENT)
    }

    /// Prints `stdout` verbatim and exits 0.
    pub fn printing(stdout: &str) -> Self {
        Self::with_body(&format!("cat <<'DOC'\n{stdout}\nDOC"))
    }

    /// Writes `stderr` and exits 1.
    pub fn failing(stderr: &str) -> Self {
        Self::with_body(&format!("printf '%s' '{stderr}' >&2\nexit 1"))
    }

    /// Never finishes on its own.
    pub fn hanging() -> Self {
        Self::with_body("exec sleep 30")
    }

    pub fn program(&self) -> PathBuf {
        self.dir.path().join("yt-dlp")
    }

    /// Parent of the per-invocation workspaces.
    pub fn work_root(&self) -> &Path {
        self.work_root.path()
    }

    /// Whether the script was run for an extraction.
    pub fn was_invoked(&self) -> bool {
        self.dir.path().join("invoked").exists()
    }

    /// Arguments of the last extraction, one per entry.
    pub fn last_args(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("args"))
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Process id of the last extraction, once the script has started.
    pub fn last_pid(&self) -> Option<u32> {
        fs::read_to_string(self.dir.path().join("pid"))
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }

    /// Working directory of the last extraction.
    pub fn last_cwd(&self) -> PathBuf {
        PathBuf::from(fs::read_to_string(self.dir.path().join("cwd")).unwrap().trim())
    }

    /// Number of entries left under the work root.
    pub fn leftover_workspaces(&self) -> usize {
        fs::read_dir(self.work_root.path()).unwrap().count()
    }

    pub fn extractor(&self, timeout: Duration) -> YtDlp {
        YtDlp::new(self.program())
            .with_timeout(timeout)
            .with_probe_timeout(Duration::from_secs(5))
            .with_work_root(Some(self.work_root.path().to_path_buf()))
    }

    pub fn service(&self) -> LookupService {
        LookupService::new(
            self.extractor(Duration::from_secs(10)),
            SelectionLimits::default(),
        )
    }

    pub fn service_with_timeout(&self, timeout: Duration) -> LookupService {
        LookupService::new(self.extractor(timeout), SelectionLimits::default())
    }

    pub fn context(&self) -> AppContext {
        AppContext::new(Config::default(), self.service())
    }

    pub fn context_with_config(&self, config: Config) -> AppContext {
        AppContext::new(config, self.service())
    }

    pub fn context_with_timeout(&self, timeout: Duration) -> AppContext {
        AppContext::new(Config::default(), self.service_with_timeout(timeout))
    }
}

/// Context whose extractor does not exist.
pub fn missing_extractor_context() -> AppContext {
    let service = LookupService::new(
        YtDlp::new("/definitely/not/here/yt-dlp"),
        SelectionLimits::default(),
    );
    AppContext::new(Config::default(), service)
}
