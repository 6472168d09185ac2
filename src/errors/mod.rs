use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvesterError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Source errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Datastore errors
    #[error("Datastore error: {0}")]
    Datastore(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<notion::NotionError> for HarvesterError {
    fn from(err: notion::NotionError) -> Self {
        HarvesterError::Datastore(err.to_string())
    }
}

pub type HarvesterResult<T> = Result<T, HarvesterError>;
