use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use albedo::apod::{FetchError, Fetcher};
use albedo::models::ImageRecord;

/// Fetcher test double: serves a fixed record and counts invocations.
#[derive(Clone)]
pub struct MockFetcher {
    record: ImageRecord,
    calls: Arc<AtomicUsize>,
}

impl MockFetcher {
    pub fn new(record: ImageRecord) -> Self {
        Self {
            record,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self) -> Result<ImageRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.record.clone())
    }
}

/// Fetcher test double that always fails the way a garbage response body
/// does.
pub struct FailingFetcher;

#[async_trait]
impl Fetcher for FailingFetcher {
    async fn fetch(&self) -> Result<ImageRecord, FetchError> {
        let err = serde_json::from_str::<ImageRecord>("{}").unwrap_err();
        Err(FetchError::MalformedPayload(err))
    }
}

pub fn sample_record() -> ImageRecord {
    ImageRecord {
        date: NaiveDate::from_ymd_opt(2024, 4, 8).unwrap(),
        title: "Moon Mountains Magnified during Ring of Fire Eclipse".to_string(),
        explanation: "A total solar eclipse swept across North America, \
                      and the lunar limb grazed the solar disk."
            .to_string(),
        media_type: "image".to_string(),
        url: "https://apod.nasa.gov/apod/image/2404/eclipse.jpg".to_string(),
        hdurl: Some("https://apod.nasa.gov/apod/image/2404/eclipse_big.jpg".to_string()),
        copyright: Some("Josh Dury".to_string()),
    }
}
