use async_trait::async_trait;
use chrono::NaiveDate;

use super::client::{FetchError, Fetcher};
use crate::models::ImageRecord;

/// Stand-in fetcher for offline runs. No request is issued at all; the page
/// renders from a fixed record whose image is a bundled asset.
pub struct StaticFetcher;

impl StaticFetcher {
    /// The canned record rendered when the service runs offline.
    pub fn placeholder_record() -> ImageRecord {
        ImageRecord {
            // The day the first APOD was published
            date: NaiveDate::from_ymd_opt(1995, 6, 16).unwrap(),
            title: "DEMO".to_string(),
            explanation: "DEMO".to_string(),
            media_type: "image".to_string(),
            url: "static/demo.svg".to_string(),
            hdurl: None,
            copyright: None,
        }
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self) -> Result<ImageRecord, FetchError> {
        Ok(Self::placeholder_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn placeholder_record_is_renderable() {
        assert!(StaticFetcher::placeholder_record().validate().is_ok());
    }
}
