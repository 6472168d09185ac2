use serde_json::Value;

use crate::config::PropertyOverrides;
use crate::domain::SourceKind;
use crate::errors::HarvesterResult;
use crate::services::property_map::{PropertyMapping, UrlPropertyKind};
use crate::storage::traits::Datastore;

/// Creates destination records, shaping each write to the schema as it is
/// at that moment.
pub struct RecordWriter<D: Datastore> {
    store: D,
    database_id: String,
    overrides: PropertyOverrides,
}

impl<D: Datastore> RecordWriter<D> {
    pub fn new(store: D, database_id: String, overrides: PropertyOverrides) -> Self {
        Self {
            store,
            database_id,
            overrides,
        }
    }

    /// Create one record and return its page id. The URL is written directly
    /// into a url-typed property, wrapped as a text block for a rich text
    /// property, and omitted when the schema offers neither.
    pub fn create(&self, title: &str, url: &str, source: SourceKind) -> HarvesterResult<String> {
        let database = self.store.retrieve_database(&self.database_id)?;
        let mapping = PropertyMapping::resolve(&database.properties, source, &self.overrides);

        let mut properties = serde_json::Map::new();
        properties.insert(mapping.title.clone(), notion::title_value(title));

        if let Some(url_property) = mapping.url {
            let value = match url_property.kind {
                UrlPropertyKind::Url => notion::url_value(url),
                UrlPropertyKind::RichText => notion::rich_text_value(url),
            };
            properties.insert(url_property.name, value);
        }

        let page = self
            .store
            .create_page(&self.database_id, Value::Object(properties))?;

        Ok(page.id)
    }
}
