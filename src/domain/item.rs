use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    YouTube,
    TikTok,
    Rss,
}

impl SourceKind {
    /// Label used in output and matched against destination property names
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::YouTube => "YouTube",
            SourceKind::TikTok => "TikTok",
            SourceKind::Rss => "RSS",
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "youtube" => Ok(SourceKind::YouTube),
            "tiktok" => Ok(SourceKind::TikTok),
            "rss" => Ok(SourceKind::Rss),
            _ => Err(format!("Unknown source kind: {}", s)),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single piece of content discovered from a source, pending dedup/write.
/// Exists only within a single run; its only identity is its URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateItem {
    pub title: String,
    pub url: Option<String>,
    pub source: SourceKind,
}

impl CandidateItem {
    pub fn new(title: String, source: SourceKind) -> Self {
        Self {
            title,
            url: None,
            source,
        }
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }
}
