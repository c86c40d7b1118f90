//! Human-readable rendering of durations and sizes.

/// Placeholder for a duration that is missing or unusable.
pub const UNKNOWN_DURATION: &str = "Unknown";

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Render seconds as `MM:SS`, or `HH:MM:SS` when the duration reaches an hour.
///
/// Fractional seconds are truncated. Missing, zero, negative or non-finite
/// values render as `"Unknown"`.
pub fn format_duration(seconds: Option<f64>) -> String {
    let total = match seconds {
        Some(s) if s.is_finite() && s > 0.0 => s.trunc() as u64,
        _ => return UNKNOWN_DURATION.to_string(),
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Render a byte count with one decimal and a binary unit, e.g. `3.4 MB`.
///
/// Returns `None` for missing or zero sizes.
pub fn format_filesize(bytes: Option<u64>) -> Option<String> {
    let bytes = bytes.filter(|b| *b > 0)?;

    let mut size = bytes as f64;
    for unit in SIZE_UNITS {
        if size < 1024.0 {
            return Some(format!("{size:.1} {unit}"));
        }
        size /= 1024.0;
    }
    Some(format!("{size:.1} TB"))
}
