use feed_rs::parser;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::{CandidateItem, SourceKind};
use crate::errors::{HarvesterError, HarvesterResult};
use crate::sources::traits::ContentSource;

/// Most recent entries taken per feed
const PER_FEED_LIMIT: usize = 5;

pub struct RssSource {
    client: Client,
    feeds: Vec<String>,
}

impl RssSource {
    pub fn new(feeds: Vec<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            feeds,
        }
    }

    fn parse_bytes(bytes: &[u8]) -> HarvesterResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| HarvesterError::FeedParse(e.to_string()))
    }

    fn items_from_feed(feed: feed_rs::model::Feed) -> Vec<CandidateItem> {
        feed.entries
            .into_iter()
            .take(PER_FEED_LIMIT)
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| t.content)
                    .filter(|t| !t.is_empty())
                    .or_else(|| {
                        entry
                            .summary
                            .map(|s| s.content)
                            .filter(|s| !s.is_empty())
                    })
                    .unwrap_or_else(|| "Untitled".to_string());

                let url = entry.links.into_iter().next().map(|l| l.href);

                CandidateItem::new(title, SourceKind::Rss).with_url(url)
            })
            .collect()
    }

    fn fetch_feed(&self, feed_url: &str) -> HarvesterResult<Vec<CandidateItem>> {
        Url::parse(feed_url).map_err(|e| HarvesterError::InvalidUrl(e.to_string()))?;

        let response = self.client.get(feed_url).send()?;
        let bytes = response.bytes()?;

        Ok(Self::items_from_feed(Self::parse_bytes(&bytes)?))
    }
}

impl ContentSource for RssSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Rss
    }

    fn fetch_latest(&self) -> HarvesterResult<Vec<CandidateItem>> {
        if self.feeds.is_empty() {
            println!("RSS: no feeds configured. Skipping.");
            return Ok(Vec::new());
        }

        let mut results = Vec::new();

        // Feeds are isolated from each other: one failing feed never
        // prevents the rest from being processed
        for feed_url in &self.feeds {
            match self.fetch_feed(feed_url) {
                Ok(items) => results.extend(items),
                Err(e) => eprintln!("RSS fetch error for {}: {}", feed_url, e),
            }
        }

        Ok(results)
    }
}
