//! Raw extractor output.
//!
//! These types mirror the subset of the yt-dlp `--dump-json` document that
//! vidinfo consumes. Format fields are kept as [`serde_json::Value`] and read
//! through accessors, because extractors are inconsistent about emitting
//! numbers, numeric strings, `null` or `0` for "unknown".

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The full document emitted by the extractor for a single resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVideoDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration: Option<Value>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default, deserialize_with = "lenient_formats")]
    pub formats: Vec<RawFormat>,
}

impl RawVideoDocument {
    /// Duration in seconds, if present and positive.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration.as_ref().and_then(positive_number)
    }
}

/// One encoded variant from the extractor's `formats` array.
///
/// Every field is kept as a raw [`Value`] so that one field of an unexpected
/// type degrades to "absent" instead of discarding the whole entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFormat {
    #[serde(default)]
    pub format_id: Option<Value>,
    #[serde(default)]
    pub ext: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    /// Average audio bitrate in kbps.
    #[serde(default)]
    pub abr: Option<Value>,
    #[serde(default)]
    pub format_note: Option<Value>,
    #[serde(default)]
    pub filesize: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
}

impl RawFormat {
    /// Extractor identifier of the format. Numeric ids are stringified.
    pub fn id(&self) -> Option<String> {
        self.format_id.as_ref().and_then(text)
    }

    /// Container extension.
    pub fn extension(&self) -> Option<String> {
        self.ext.as_ref().and_then(text)
    }

    /// Frame height in pixels.
    pub fn height(&self) -> Option<u32> {
        self.height
            .as_ref()
            .and_then(positive_number)
            .filter(|h| *h < f64::from(u32::MAX))
            .map(|h| h as u32)
            .filter(|h| *h > 0)
    }

    /// Average audio bitrate in kbps.
    pub fn audio_bitrate(&self) -> Option<f64> {
        self.abr.as_ref().and_then(positive_number)
    }

    /// File size in bytes.
    pub fn filesize_bytes(&self) -> Option<u64> {
        self.filesize
            .as_ref()
            .and_then(positive_number)
            .map(|b| b as u64)
            .filter(|b| *b > 0)
    }

    /// Free-text note, ignoring blank values.
    pub fn note(&self) -> Option<String> {
        self.format_note.as_ref().and_then(text)
    }

    /// Direct resource URL. Formats without one are unusable.
    pub fn usable_url(&self) -> Option<&str> {
        match &self.url {
            Some(Value::String(u)) if !u.is_empty() => Some(u),
            _ => None,
        }
    }
}

/// Read a non-empty string, stringifying numbers. Other shapes are absent.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a JSON number or numeric string, keeping only finite positive values.
fn positive_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n > 0.0).then_some(n)
}

/// Accept anything for `formats`: non-arrays become empty and entries that
/// are not format objects are skipped.
fn lenient_formats<'de, D>(deserializer: D) -> Result<Vec<RawFormat>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn format(value: Value) -> RawFormat {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn numeric_fields_accept_numbers_and_strings() {
        let f = format(json!({"height": "720", "abr": 129.5, "filesize": "2048"}));
        assert_eq!(f.height(), Some(720));
        assert_eq!(f.audio_bitrate(), Some(129.5));
        assert_eq!(f.filesize_bytes(), Some(2048));
    }

    #[test]
    fn malformed_numbers_are_absent() {
        let f = format(json!({"height": "tall", "abr": true, "filesize": {"x": 1}}));
        assert_eq!(f.height(), None);
        assert_eq!(f.audio_bitrate(), None);
        assert_eq!(f.filesize_bytes(), None);
    }

    #[test]
    fn zero_and_negative_are_absent() {
        let f = format(json!({"height": 0, "abr": -3, "filesize": 0}));
        assert_eq!(f.height(), None);
        assert_eq!(f.audio_bitrate(), None);
        assert_eq!(f.filesize_bytes(), None);
    }

    #[test]
    fn blank_url_and_note_are_absent() {
        let f = format(json!({"url": "", "format_note": ""}));
        assert_eq!(f.usable_url(), None);
        assert_eq!(f.note(), None);
    }

    #[test]
    fn text_fields_stringify_numbers() {
        let f = format(json!({"format_id": 18, "ext": "webm", "format_note": 7}));
        assert_eq!(f.id().as_deref(), Some("18"));
        assert_eq!(f.extension().as_deref(), Some("webm"));
        assert_eq!(f.note().as_deref(), Some("7"));
    }

    #[test]
    fn mistyped_text_fields_are_absent() {
        let f = format(json!({
            "format_id": ["18"],
            "ext": true,
            "format_note": {"lang": "en"},
            "url": 42
        }));
        assert_eq!(f.id(), None);
        assert_eq!(f.extension(), None);
        assert_eq!(f.note(), None);
        assert_eq!(f.usable_url(), None);
    }

    #[test]
    fn document_defaults_when_fields_missing() {
        let doc: RawVideoDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.title.is_none());
        assert!(doc.formats.is_empty());
        assert_eq!(doc.duration_secs(), None);
    }

    #[test]
    fn formats_tolerates_wrong_shapes() {
        let doc: RawVideoDocument = serde_json::from_value(json!({"formats": "nope"})).unwrap();
        assert!(doc.formats.is_empty());

        let doc: RawVideoDocument = serde_json::from_value(json!({"formats": null})).unwrap();
        assert!(doc.formats.is_empty());

        let doc: RawVideoDocument = serde_json::from_value(json!({
            "formats": [42, {"format_id": "18", "url": "https://cdn/18"}, "junk"]
        }))
        .unwrap();
        assert_eq!(doc.formats.len(), 1);
        assert_eq!(doc.formats[0].id().as_deref(), Some("18"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let doc: RawVideoDocument = serde_json::from_value(json!({
            "id": "abc",
            "title": "Clip",
            "view_count": 10,
            "formats": [{"format_id": "18", "vcodec": "avc1", "url": "https://cdn/18"}]
        }))
        .unwrap();
        assert_eq!(doc.title.as_deref(), Some("Clip"));
        assert_eq!(doc.formats.len(), 1);
    }
}
