//! Notion API bindings for Rust
//! Provides functions to retrieve a database schema, query recent pages, and create pages

use std::collections::HashMap;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

const BASE_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Error, Debug)]
pub enum NotionError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Invalid header value")]
    InvalidHeader,
    #[error("Notion API error {code} ({status}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    #[error("Notion API returned status {0}")]
    Status(u16),
}

/// A database's schema: property name -> property descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertySchema>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl PropertySchema {
    pub fn is_title(&self) -> bool {
        self.kind == "title"
    }

    pub fn is_url(&self) -> bool {
        self.kind == "url"
    }

    pub fn is_rich_text(&self) -> bool {
        self.kind == "rich_text"
    }
}

/// A page row as returned by a database query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyValue {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub title: Vec<RichText>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl PropertyValue {
    pub fn is_url(&self) -> bool {
        self.kind == "url"
    }

    pub fn is_rich_text(&self) -> bool {
        self.kind == "rich_text"
    }

    /// Plain text of the first rich text segment, if any
    pub fn first_plain_text(&self) -> Option<&str> {
        self.rich_text.first().map(|t| t.plain_text.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    results: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct QueryPayload {
    page_size: u32,
}

#[derive(Debug, Serialize)]
struct DatabaseParent {
    database_id: String,
}

#[derive(Debug, Serialize)]
struct CreatePagePayload {
    parent: DatabaseParent,
    properties: serde_json::Value,
}

#[derive(Clone)]
pub struct NotionClient {
    url: String,
    client: Client,
}

impl NotionClient {
    pub fn new(token: &str) -> Result<Self, NotionError> {
        Self::with_base_url(BASE_URL, token)
    }

    pub fn with_base_url(url: &str, token: &str) -> Result<Self, NotionError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| NotionError::InvalidHeader)?,
        );
        headers.insert(
            HeaderName::from_static("notion-version"),
            HeaderValue::from_static(NOTION_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Retrieve a database's schema
    pub fn retrieve_database(&self, database_id: &str) -> Result<Database, NotionError> {
        let response = self
            .client
            .get(format!("{}/databases/{}", self.url, database_id))
            .send()?;

        Ok(Self::check(response)?.json()?)
    }

    /// Query the most recent pages of a database, bounded by `page_size`.
    /// Issues a single request; pagination cursors are not followed.
    pub fn query_database(
        &self,
        database_id: &str,
        page_size: u32,
    ) -> Result<Vec<Page>, NotionError> {
        let payload = QueryPayload { page_size };

        let response = self
            .client
            .post(format!("{}/databases/{}/query", self.url, database_id))
            .json(&payload)
            .send()?;

        let wrapper: QueryResponse = Self::check(response)?.json()?;
        Ok(wrapper.results)
    }

    /// Create a page in a database with the given property values
    pub fn create_page(
        &self,
        database_id: &str,
        properties: serde_json::Value,
    ) -> Result<Page, NotionError> {
        let payload = CreatePagePayload {
            parent: DatabaseParent {
                database_id: database_id.to_string(),
            },
            properties,
        };

        let response = self
            .client
            .post(format!("{}/pages", self.url))
            .json(&payload)
            .send()?;

        Ok(Self::check(response)?.json()?)
    }

    fn check(response: Response) -> Result<Response, NotionError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        match response.json::<ApiErrorBody>() {
            Ok(body) if !body.message.is_empty() => Err(NotionError::Api {
                status,
                code: body.code,
                message: body.message,
            }),
            _ => Err(NotionError::Status(status)),
        }
    }
}

/// Build a title property value
pub fn title_value(content: &str) -> serde_json::Value {
    json!({ "title": [{ "text": { "content": content } }] })
}

/// Build a url property value
pub fn url_value(url: &str) -> serde_json::Value {
    json!({ "url": url })
}

/// Build a rich text property value holding a single text segment
pub fn rich_text_value(content: &str) -> serde_json::Value {
    json!({ "rich_text": [{ "text": { "content": content } }] })
}

/// Create a new Notion client
pub fn create_client(token: &str) -> Result<NotionClient, NotionError> {
    NotionClient::new(token)
}

/// Retrieve a database's schema
pub fn retrieve_database(token: &str, database_id: &str) -> Result<Database, NotionError> {
    create_client(token)?.retrieve_database(database_id)
}

/// Query the most recent pages of a database
pub fn query_database(
    token: &str,
    database_id: &str,
    page_size: u32,
) -> Result<Vec<Page>, NotionError> {
    create_client(token)?.query_database(database_id, page_size)
}

/// Create a page in a database
pub fn create_page(
    token: &str,
    database_id: &str,
    properties: serde_json::Value,
) -> Result<Page, NotionError> {
    create_client(token)?.create_page(database_id, properties)
}
