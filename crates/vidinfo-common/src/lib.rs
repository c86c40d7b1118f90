//! Vidinfo-Common: format model and selection logic.
//!
//! This crate turns the raw document emitted by an extractor such as yt-dlp
//! into the compact response served to clients:
//!
//! - **Raw types**: [`RawVideoDocument`] and [`RawFormat`], decoded leniently
//!   so malformed numeric fields degrade to "absent" instead of failing.
//! - **Quality**: [`Quality`] classifies a format from its structured fields
//!   (height, audio bitrate, note) and renders the display label.
//! - **Selection**: [`normalize`] filters, ranks and truncates the formats
//!   into a bounded [`VideoInfo`].
//! - **Display helpers**: [`format_duration`] and [`format_filesize`].
//!
//! Everything here is pure and free of I/O.
//!
//! # Examples
//!
//! ```
//! use vidinfo_common::{normalize, RawVideoDocument, SelectionLimits};
//!
//! let doc: RawVideoDocument = serde_json::from_str(r#"{
//!     "title": "Demo",
//!     "duration": 65,
//!     "formats": [
//!         {"format_id": "18", "ext": "mp4", "height": 360, "url": "https://cdn/18"},
//!         {"format_id": "22", "ext": "mp4", "height": 720, "url": "https://cdn/22"},
//!         {"format_id": "140", "ext": "m4a", "abr": 128, "url": "https://cdn/140"}
//!     ]
//! }"#).unwrap();
//!
//! let info = normalize(&doc, &SelectionLimits::default());
//! assert_eq!(info.duration, "01:05");
//! let labels: Vec<&str> = info.formats.iter().map(|f| f.quality.as_str()).collect();
//! assert_eq!(labels, ["720p", "360p", "128kbps"]);
//! ```

pub mod display;
pub mod model;
pub mod quality;
pub mod raw;
pub mod select;

pub use display::{format_duration, format_filesize};
pub use model::{NormalizedFormat, VideoInfo};
pub use quality::{FormatKind, Quality};
pub use raw::{RawFormat, RawVideoDocument};
pub use select::{normalize, select_formats, SelectionLimits};
