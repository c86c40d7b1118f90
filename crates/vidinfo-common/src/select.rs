//! Format selection: filter, classify, rank and truncate.

use serde::{Deserialize, Serialize};

use crate::display::format_duration;
use crate::model::{NormalizedFormat, VideoInfo, UNKNOWN_TITLE, UNKNOWN_UPLOADER};
use crate::quality::Quality;
use crate::raw::{RawFormat, RawVideoDocument};

/// Maximum number of formats kept per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionLimits {
    #[serde(default = "default_max_video")]
    pub max_video: usize,
    #[serde(default = "default_max_audio")]
    pub max_audio: usize,
    #[serde(default = "default_max_other")]
    pub max_other: usize,
}

fn default_max_video() -> usize {
    5
}
fn default_max_audio() -> usize {
    3
}
fn default_max_other() -> usize {
    2
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            max_video: default_max_video(),
            max_audio: default_max_audio(),
            max_other: default_max_other(),
        }
    }
}

impl SelectionLimits {
    /// Upper bound on the number of formats in a response.
    pub fn total(&self) -> usize {
        self.max_video
            .saturating_add(self.max_audio)
            .saturating_add(self.max_other)
    }
}

/// Select the formats to return, in response order.
///
/// Formats without a URL are dropped. Video formats are ordered by height and
/// audio formats by bitrate, both highest first and stable on ties. The
/// remaining formats keep their input order.
pub fn select_formats(formats: &[RawFormat], limits: &SelectionLimits) -> Vec<NormalizedFormat> {
    let mut video: Vec<(u32, NormalizedFormat)> = Vec::new();
    let mut audio: Vec<(f64, NormalizedFormat)> = Vec::new();
    let mut other: Vec<NormalizedFormat> = Vec::new();

    for raw in formats {
        let Some(url) = raw.usable_url() else {
            continue;
        };
        let quality = Quality::classify(raw);
        let normalized = NormalizedFormat::from_raw(raw, url, &quality);
        match quality {
            Quality::Video { height } => video.push((height, normalized)),
            Quality::Audio { bitrate_kbps } => audio.push((bitrate_kbps, normalized)),
            Quality::Other { .. } => {
                if other.len() < limits.max_other {
                    other.push(normalized);
                }
            }
        }
    }

    // sort_by is stable, so equal keys keep input order.
    video.sort_by(|a, b| b.0.cmp(&a.0));
    audio.sort_by(|a, b| b.0.total_cmp(&a.0));

    video
        .into_iter()
        .take(limits.max_video)
        .map(|(_, f)| f)
        .chain(audio.into_iter().take(limits.max_audio).map(|(_, f)| f))
        .chain(other)
        .collect()
}

/// Build the client response from an extractor document.
pub fn normalize(doc: &RawVideoDocument, limits: &SelectionLimits) -> VideoInfo {
    VideoInfo {
        title: doc
            .title
            .clone()
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        thumbnail: doc.thumbnail.clone().unwrap_or_default(),
        duration: format_duration(doc.duration_secs()),
        uploader: doc
            .uploader
            .clone()
            .unwrap_or_else(|| UNKNOWN_UPLOADER.to_string()),
        formats: select_formats(&doc.formats, limits),
    }
}
