use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One Astronomy Picture of the Day entry, as returned by the APOD API.
///
/// The record is transient: built from one response body (or the canned
/// offline record), rendered once, then dropped.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct ImageRecord {
    /// Calendar date the picture was featured
    pub date: NaiveDate,
    /// Picture title
    #[validate(length(min = 1))]
    pub title: String,
    /// Long-form description shown next to the picture
    #[validate(length(min = 1))]
    pub explanation: String,
    /// "image" or "video", as reported upstream
    pub media_type: String,
    /// Locator for the picture itself (or the embeddable video)
    #[validate(custom = "validate_locator")]
    pub url: String,
    /// High-resolution variant, when the API provides one
    pub hdurl: Option<String>,
    /// Attribution line, absent for public-domain entries
    pub copyright: Option<String>,
}

impl ImageRecord {
    /// Prefer the high-resolution image when available.
    pub fn image_url(&self) -> &str {
        self.hdurl.as_deref().unwrap_or(&self.url)
    }

    pub fn is_video(&self) -> bool {
        self.media_type == "video"
    }
}

// Upstream records carry absolute URLs; the offline record points at a
// bundled asset by relative path.
fn validate_locator(value: &str) -> Result<(), validator::ValidationError> {
    if value.starts_with("static/") {
        return Ok(());
    }
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_url"))
}
