use crate::config::Config;
use crate::domain::CandidateItem;
use crate::sources::traits::ContentSource;
use crate::sources::{rss::RssSource, tiktok::TikTokSource, youtube::YouTubeSource};

pub struct SourceRegistry {
    sources: Vec<Box<dyn ContentSource>>,
}

impl SourceRegistry {
    /// Build the registry from configuration, in fixed fetch order:
    /// YouTube, then TikTok, then RSS
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self {
            sources: Vec::new(),
        };

        registry.register(Box::new(YouTubeSource::new(
            config.youtube_api_key.clone(),
            config.youtube_channel_ids.clone(),
        )));
        registry.register(Box::new(TikTokSource::new(config.tiktok_users.clone())));
        registry.register(Box::new(RssSource::new(config.rss_feeds.clone())));

        registry
    }

    pub fn register(&mut self, source: Box<dyn ContentSource>) {
        self.sources.push(source);
    }

    /// Run every source in registration order and concatenate the results.
    /// A failing source contributes nothing; the others still run.
    pub fn fetch_all(&self) -> Vec<CandidateItem> {
        let mut items = Vec::new();

        for source in &self.sources {
            match source.fetch_latest() {
                Ok(found) => {
                    println!("{}: {} items", source.kind(), found.len());
                    items.extend(found);
                }
                Err(e) => {
                    eprintln!("Error fetching {}: {}", source.kind(), e);
                }
            }
        }

        items
    }
}
