//! Remote threat feed over HTTP: same JSON document as the local file.

use super::{FeedError, ThreatFeed};
use std::time::Duration;

pub struct FeedClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl FeedClient {
    pub fn new(url: impl Into<String>) -> Result<Self, FeedError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the feed document. Errors are the caller's to
    /// recover from (fall back to the local file or defaults).
    pub fn fetch(&self) -> Result<ThreatFeed, FeedError> {
        let res = self.client.get(&self.url).send()?;
        if !res.status().is_success() {
            return Err(FeedError::Status(res.status()));
        }
        Ok(res.json::<ThreatFeed>()?)
    }
}
