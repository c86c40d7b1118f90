//! Response types served to clients.

use serde::{Deserialize, Serialize};

use crate::display::format_filesize;
use crate::quality::{FormatKind, Quality};
use crate::raw::RawFormat;

/// Title used when the extractor does not report one.
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// Uploader used when the extractor does not report one.
pub const UNKNOWN_UPLOADER: &str = "Unknown";
/// Container extension assumed when the extractor omits it.
pub const DEFAULT_EXT: &str = "mp4";

/// A simplified, client-facing format record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFormat {
    pub format_id: String,
    pub ext: String,
    /// Display label such as `1080p` or `128kbps`.
    pub quality: String,
    pub kind: FormatKind,
    /// Human-readable size such as `3.4 MB`.
    pub filesize: Option<String>,
    pub filesize_bytes: Option<u64>,
    pub url: String,
}

impl NormalizedFormat {
    /// Build the record for a raw format that has already been classified.
    pub(crate) fn from_raw(raw: &RawFormat, url: &str, quality: &Quality) -> Self {
        let filesize_bytes = raw.filesize_bytes();
        Self {
            format_id: raw.id().unwrap_or_default(),
            ext: raw.extension().unwrap_or_else(|| DEFAULT_EXT.to_string()),
            quality: quality.label(),
            kind: quality.kind(),
            filesize: format_filesize(filesize_bytes),
            filesize_bytes,
            url: url.to_string(),
        }
    }
}

/// Aggregate response for one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    pub thumbnail: String,
    /// `MM:SS`, `HH:MM:SS` or `Unknown`.
    pub duration: String,
    pub uploader: String,
    /// Video formats first, then audio, then the rest.
    pub formats: Vec<NormalizedFormat>,
}

impl VideoInfo {
    /// Formats of the given kind, in response order.
    pub fn formats_of(&self, kind: FormatKind) -> impl Iterator<Item = &NormalizedFormat> {
        self.formats.iter().filter(move |f| f.kind == kind)
    }
}
