//! Quality classification.
//!
//! A format is classified from its structured fields before any label is
//! produced. The label is presentation only and is never parsed back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::raw::RawFormat;

/// Label used when a format carries no height, bitrate or note.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Coarse bucket a format is ranked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Video,
    Audio,
    Other,
}

/// Classified quality of a single format.
#[derive(Debug, Clone, PartialEq)]
pub enum Quality {
    /// Has a frame height; ranked by height.
    Video { height: u32 },
    /// No height but an average audio bitrate; ranked by bitrate.
    Audio { bitrate_kbps: f64 },
    /// Neither; keeps its input position. `note` is the extractor's
    /// free-text description, if any.
    Other { note: Option<String> },
}

impl Quality {
    /// Classify a raw format. First match wins: height, then audio bitrate,
    /// then format note.
    pub fn classify(raw: &RawFormat) -> Self {
        if let Some(height) = raw.height() {
            Quality::Video { height }
        } else if let Some(bitrate_kbps) = raw.audio_bitrate() {
            Quality::Audio { bitrate_kbps }
        } else {
            Quality::Other {
                note: raw.note(),
            }
        }
    }

    pub fn kind(&self) -> FormatKind {
        match self {
            Quality::Video { .. } => FormatKind::Video,
            Quality::Audio { .. } => FormatKind::Audio,
            Quality::Other { .. } => FormatKind::Other,
        }
    }

    /// Human-readable label, e.g. `1080p`, `128kbps`, `DASH audio`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Video { height } => write!(f, "{height}p"),
            // Whole bitrates print without a trailing ".0".
            Quality::Audio { bitrate_kbps } if bitrate_kbps.fract() == 0.0 => {
                write!(f, "{}kbps", *bitrate_kbps as u64)
            }
            Quality::Audio { bitrate_kbps } => write!(f, "{bitrate_kbps}kbps"),
            Quality::Other { note: Some(note) } => f.write_str(note),
            Quality::Other { note: None } => f.write_str(UNKNOWN_LABEL),
        }
    }
}
