//! Video lookup: URL validation, extraction and normalization.
//!
//! [`LookupService`] is the single entry point used by both the HTTP server
//! and the `inspect` CLI command. It owns the error taxonomy clients see.

use crate::config::Config;
use vidinfo_av::YtDlp;
use vidinfo_common::{normalize, SelectionLimits, VideoInfo};

/// URL schemes accepted for lookup.
const ALLOWED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Client-facing lookup failures.
///
/// `Display` is the sanitized message sent to clients; internal details of
/// decode and unexpected failures are only logged.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("{0}")]
    Validation(String),

    #[error("yt-dlp is not installed or not accessible")]
    ExtractorUnavailable,

    #[error("Failed to fetch video information: {0}")]
    ExtractorFailure(String),

    #[error("Request timed out while fetching video information")]
    Timeout,

    #[error("Failed to parse video information")]
    Decode { detail: String },

    #[error("An unexpected error occurred while processing the video")]
    Unexpected { detail: String },
}

impl LookupError {
    /// HTTP status code for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            LookupError::Validation(_) => 400,
            LookupError::ExtractorUnavailable => 503,
            LookupError::ExtractorFailure(_) => 400,
            LookupError::Timeout => 408,
            LookupError::Decode { .. } => 500,
            LookupError::Unexpected { .. } => 500,
        }
    }

    /// Stable machine-readable category.
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::Validation(_) => "validation_error",
            LookupError::ExtractorUnavailable => "extractor_unavailable",
            LookupError::ExtractorFailure(_) => "extractor_failure",
            LookupError::Timeout => "timeout",
            LookupError::Decode { .. } => "decode_error",
            LookupError::Unexpected { .. } => "internal_error",
        }
    }
}

impl From<vidinfo_av::Error> for LookupError {
    fn from(err: vidinfo_av::Error) -> Self {
        use vidinfo_av::Error;

        match err {
            Error::ToolNotFound { .. } => LookupError::ExtractorUnavailable,
            Error::ToolFailed { message, .. } if message.is_empty() => {
                LookupError::ExtractorFailure("Unknown error".to_string())
            }
            Error::ToolFailed { message, .. } => LookupError::ExtractorFailure(message),
            Error::Timeout { .. } => LookupError::Timeout,
            Error::ParseError { message, .. } => LookupError::Decode { detail: message },
            other => LookupError::Unexpected {
                detail: other.to_string(),
            },
        }
    }
}

/// Check that `raw` is a non-empty http(s) URL and return it trimmed.
pub fn validate_url(raw: &str) -> Result<&str, LookupError> {
    let url = raw.trim();

    if url.is_empty() {
        return Err(LookupError::Validation("URL is required".to_string()));
    }

    if !ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(LookupError::Validation(
            "Invalid URL format. URL must start with http:// or https://".to_string(),
        ));
    }

    Ok(url)
}

/// Looks up videos with yt-dlp and shapes the result for clients.
#[derive(Debug, Clone)]
pub struct LookupService {
    extractor: YtDlp,
    limits: SelectionLimits,
}

impl LookupService {
    pub fn new(extractor: YtDlp, limits: SelectionLimits) -> Self {
        Self { extractor, limits }
    }

    /// Resolve the extractor and apply configured settings.
    pub fn from_config(config: &Config) -> Self {
        let extractor = YtDlp::discover(config.extractor.path.as_deref())
            .with_timeout(config.extractor.timeout())
            .with_probe_timeout(config.extractor.probe_timeout())
            .with_extra_args(config.extractor.extra_args.clone())
            .with_work_root(config.extractor.work_dir.clone());

        Self::new(extractor, config.selection)
    }

    pub fn extractor(&self) -> &YtDlp {
        &self.extractor
    }

    /// Validate `raw_url`, run the extractor once and normalize its output.
    ///
    /// Invalid URLs are rejected before any process is spawned. Failures are
    /// never retried.
    pub async fn lookup(&self, raw_url: &str) -> Result<VideoInfo, LookupError> {
        let url = match validate_url(raw_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(url = raw_url, error = %e, "Rejected lookup request");
                return Err(e);
            }
        };

        tracing::info!(url, "Processing video URL");

        let document = self.extractor.extract(url).await.map_err(|e| {
            let mapped = LookupError::from(e);
            let category = mapped.code();
            match &mapped {
                LookupError::Decode { detail } | LookupError::Unexpected { detail } => {
                    tracing::error!(url, category, detail = %detail, "Video lookup failed")
                }
                other => tracing::error!(url, category, error = %other, "Video lookup failed"),
            }
            mapped
        })?;

        let info = normalize(&document, &self.limits);

        tracing::info!(
            url,
            title = %info.title,
            formats = info.formats.len(),
            "Successfully processed video"
        );

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(validate_url("https://youtu.be/x").unwrap(), "https://youtu.be/x");
        assert_eq!(validate_url("  http://example.com/v  ").unwrap(), "http://example.com/v");
    }

    #[test]
    fn rejects_empty() {
        let err = validate_url("   ").unwrap_err();
        assert_eq!(err.to_string(), "URL is required");
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn rejects_other_schemes() {
        for url in ["ftp://example.com/v", "youtube.com/watch?v=x", "HTTPS://x", "file:///etc/passwd"] {
            let err = validate_url(url).unwrap_err();
            assert!(matches!(err, LookupError::Validation(_)), "{url}");
        }
    }

    #[test]
    fn maps_extractor_errors() {
        let err: LookupError = vidinfo_av::Error::tool_not_found("yt-dlp").into();
        assert_eq!(err.http_status(), 503);

        let err: LookupError = vidinfo_av::Error::Timeout {
            tool: "yt-dlp".into(),
            timeout: Duration::from_secs(30),
        }
        .into();
        assert_eq!(err.http_status(), 408);

        let err: LookupError = vidinfo_av::Error::parse_error("yt-dlp", "expected value").into();
        assert_eq!(err.http_status(), 500);
        assert_eq!(err.to_string(), "Failed to parse video information");

        let err: LookupError = vidinfo_av::Error::Workspace("disk full".into()).into();
        assert_eq!(err.http_status(), 500);
        assert!(!err.to_string().contains("disk full"));
    }

    #[test]
    fn sanitized_messages_hide_details() {
        let err = LookupError::Unexpected {
            detail: "secret path /srv/x".into(),
        };
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred while processing the video"
        );
    }

    #[tokio::test]
    async fn invalid_url_never_reaches_extractor() {
        // A nonexistent binary would surface as ExtractorUnavailable if spawned.
        let service = LookupService::new(
            YtDlp::new("/definitely/not/here/yt-dlp"),
            SelectionLimits::default(),
        );
        let err = service.lookup("ftp://example.com").await.unwrap_err();
        assert!(matches!(err, LookupError::Validation(_)));
    }
}
