use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::{CandidateItem, SourceKind};
use crate::errors::HarvesterResult;
use crate::sources::traits::ContentSource;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Most recent uploads fetched per channel
const PER_CHANNEL_LIMIT: u32 = 3;

pub struct YouTubeSource {
    client: Client,
    api_key: String,
    channel_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelResource {
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: String,
}

#[derive(Debug, Deserialize)]
struct PlaylistItemsResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    resource_id: Option<ResourceId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    #[serde(default)]
    video_id: Option<String>,
}

impl YouTubeSource {
    pub fn new(api_key: String, channel_ids: Vec<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            channel_ids,
        }
    }

    fn watch_url(video_id: &str) -> String {
        format!("https://www.youtube.com/watch?v={}", video_id)
    }

    /// Resolve a channel's uploads playlist via channels.list
    fn uploads_playlist(&self, channel_id: &str) -> HarvesterResult<Option<String>> {
        let response: ChannelListResponse = self
            .client
            .get(format!("{}/channels", API_BASE))
            .query(&[
                ("part", "contentDetails"),
                ("id", channel_id),
                ("key", self.api_key.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response
            .items
            .into_iter()
            .next()
            .map(|item| item.content_details.related_playlists.uploads))
    }

    fn fetch_channel(&self, channel_id: &str) -> HarvesterResult<Vec<CandidateItem>> {
        let playlist_id = match self.uploads_playlist(channel_id)? {
            Some(id) => id,
            None => return Ok(Vec::new()),
        };

        let limit = PER_CHANNEL_LIMIT.to_string();
        let response: PlaylistItemsResponse = self
            .client
            .get(format!("{}/playlistItems", API_BASE))
            .query(&[
                ("part", "snippet"),
                ("playlistId", playlist_id.as_str()),
                ("maxResults", limit.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        Ok(Self::collect_items(response))
    }

    /// Map playlist entries to candidates, dropping entries without a video id
    fn collect_items(response: PlaylistItemsResponse) -> Vec<CandidateItem> {
        response
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.snippet.resource_id.and_then(|r| r.video_id)?;
                Some(
                    CandidateItem::new(item.snippet.title, SourceKind::YouTube)
                        .with_url(Some(Self::watch_url(&video_id))),
                )
            })
            .collect()
    }
}

impl ContentSource for YouTubeSource {
    fn kind(&self) -> SourceKind {
        SourceKind::YouTube
    }

    fn fetch_latest(&self) -> HarvesterResult<Vec<CandidateItem>> {
        if self.api_key.is_empty() || self.channel_ids.is_empty() {
            println!("YouTube: API key or channel IDs not set. Skipping.");
            return Ok(Vec::new());
        }

        let mut results = Vec::new();

        // A failed channel aborts the rest of this source; what was
        // accumulated so far is still returned
        for channel_id in &self.channel_ids {
            match self.fetch_channel(channel_id) {
                Ok(items) => results.extend(items),
                Err(e) => {
                    eprintln!("YouTube fetch error: {}", e);
                    break;
                }
            }
        }

        Ok(results)
    }
}
