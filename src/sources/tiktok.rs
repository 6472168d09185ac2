use regex::Regex;
use reqwest::blocking::Client;
use scraper::{Html, Selector};

use crate::domain::{CandidateItem, SourceKind};
use crate::errors::HarvesterResult;
use crate::sources::traits::ContentSource;

const USER_AGENT: &str = "Mozilla/5.0";

pub struct TikTokSource {
    client: Client,
    usernames: Vec<String>,
}

impl TikTokSource {
    pub fn new(usernames: Vec<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .unwrap_or_else(|_| Client::new()),
            usernames,
        }
    }

    fn profile_url(username: &str) -> String {
        format!(
            "https://www.tiktok.com/@{}",
            username.trim_start_matches('@')
        )
    }

    fn fallback_title(username: &str) -> String {
        format!("{} - TikTok", username)
    }

    fn absolutize(link: &str) -> String {
        if link.starts_with('/') {
            format!("https://www.tiktok.com{}", link)
        } else {
            link.to_string()
        }
    }

    /// Pull the first video link out of a profile page.
    ///
    /// Prefers a direct `/video/` anchor; when the markup carries none
    /// (script-rendered page), falls back to pattern-matching the embedded
    /// JSON for an author name and a direct media address. Returns None when
    /// neither path finds a link, which callers treat as "skip this user".
    fn extract_first_video(html: &str, username: &str) -> Option<(String, String)> {
        let document = Html::parse_document(html);

        let anchor_selector = Selector::parse(r#"a[href*="/video/"]"#).unwrap();
        if let Some(anchor) = document.select(&anchor_selector).next() {
            if let Some(href) = anchor.value().attr("href") {
                let title = anchor
                    .value()
                    .attr("title")
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| Self::fallback_title(username));
                return Some((title, Self::absolutize(href)));
            }
        }

        let author_regex = Regex::new(r#""authorName":"([^"]+)""#).unwrap();
        let play_regex = Regex::new(r#""playAddr":"([^"]+)""#).unwrap();
        let script_selector = Selector::parse("script").unwrap();

        let mut title = None;
        for script in document.select(&script_selector) {
            let body: String = script.text().collect();
            if let Some(caps) = author_regex.captures(&body) {
                title = Some(caps[1].to_string());
            }
            if let Some(caps) = play_regex.captures(&body) {
                let link = caps[1].replace("\\u0026", "&");
                let title = title.unwrap_or_else(|| Self::fallback_title(username));
                return Some((title, Self::absolutize(&link)));
            }
        }

        None
    }

    fn fetch_user(&self, username: &str) -> HarvesterResult<Option<CandidateItem>> {
        let response = self
            .client
            .get(Self::profile_url(username))
            .send()?
            .error_for_status()?;
        let html = response.text()?;

        Ok(Self::extract_first_video(&html, username).map(|(title, link)| {
            CandidateItem::new(title, SourceKind::TikTok).with_url(Some(link))
        }))
    }
}

impl ContentSource for TikTokSource {
    fn kind(&self) -> SourceKind {
        SourceKind::TikTok
    }

    fn fetch_latest(&self) -> HarvesterResult<Vec<CandidateItem>> {
        if self.usernames.is_empty() {
            println!("TikTok: no users defined. Skipping.");
            return Ok(Vec::new());
        }

        let mut results = Vec::new();

        // A failed request aborts the remaining usernames; a page without a
        // recognizable video link only skips that user
        for username in &self.usernames {
            match self.fetch_user(username) {
                Ok(Some(item)) => results.push(item),
                Ok(None) => {
                    println!("TikTok: no video link found for {}, skipping.", username);
                }
                Err(e) => {
                    eprintln!("TikTok fetch error: {}", e);
                    break;
                }
            }
        }

        Ok(results)
    }
}
