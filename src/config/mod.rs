use std::collections::HashMap;
use std::str::FromStr;

use crate::domain::SourceKind;
use crate::errors::{HarvesterError, HarvesterResult};

pub const DEFAULT_DEDUP_WINDOW: u32 = 30;

/// Explicit destination property names, configured to bypass schema inference
#[derive(Debug, Clone, Default)]
pub struct PropertyOverrides {
    pub title: Option<String>,
    pub url_by_source: HashMap<SourceKind, String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub notion_token: String,
    pub database_id: String,
    pub youtube_api_key: String,
    pub youtube_channel_ids: Vec<String>,
    pub tiktok_users: Vec<String>,
    pub rss_feeds: Vec<String>,
    pub dedup_window: u32,
    pub overrides: PropertyOverrides,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> HarvesterResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let notion_token = std::env::var("NOTION_TOKEN")
            .map_err(|_| HarvesterError::MissingEnvVar("NOTION_TOKEN".to_string()))?;

        let database_id = std::env::var("NOTION_DATABASE_ID")
            .or_else(|_| std::env::var("DATABASE_ID"))
            .map_err(|_| HarvesterError::MissingEnvVar("NOTION_DATABASE_ID".to_string()))?;

        let youtube_api_key = std::env::var("YOUTUBE_API_KEY").unwrap_or_default();

        let youtube_channel_ids =
            parse_list(&std::env::var("YOUTUBE_CHANNEL_IDS").unwrap_or_default());
        let tiktok_users = parse_list(&std::env::var("TIKTOK_USERS").unwrap_or_default());
        let rss_feeds = parse_list(&std::env::var("RSS_FEEDS").unwrap_or_default());

        let dedup_window = match std::env::var("DEDUP_WINDOW") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                HarvesterError::Config(format!("DEDUP_WINDOW is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_DEDUP_WINDOW,
        };

        let overrides = PropertyOverrides {
            title: std::env::var("NOTION_TITLE_PROPERTY")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            url_by_source: parse_property_map(
                &std::env::var("NOTION_URL_PROPERTIES").unwrap_or_default(),
            )?,
        };

        Ok(Self {
            notion_token,
            database_id,
            youtube_api_key,
            youtube_channel_ids,
            tiktok_users,
            rss_feeds,
            dedup_window,
            overrides,
        })
    }
}

/// Split a comma-separated value, trimming entries and dropping empties
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse `source=Property` pairs, e.g. "youtube=Video,rss=Link"
pub fn parse_property_map(raw: &str) -> HarvesterResult<HashMap<SourceKind, String>> {
    let mut map = HashMap::new();

    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (source, property) = entry.split_once('=').ok_or_else(|| {
            HarvesterError::Config(format!(
                "NOTION_URL_PROPERTIES entry is not source=Property: {}",
                entry
            ))
        })?;

        let kind = SourceKind::from_str(source.trim())
            .map_err(HarvesterError::Config)?;
        let property = property.trim();
        if property.is_empty() {
            return Err(HarvesterError::Config(format!(
                "NOTION_URL_PROPERTIES entry has an empty property name: {}",
                entry
            )));
        }

        map.insert(kind, property.to_string());
    }

    Ok(map)
}
