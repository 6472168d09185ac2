use crate::errors::HarvesterResult;
use crate::storage::traits::Datastore;

/// Checks whether a URL already exists among the most recent destination
/// records. Only a bounded window is inspected: a URL whose record has
/// scrolled out of the window is reported as absent and will be inserted
/// again.
pub struct DedupService<D: Datastore> {
    store: D,
    database_id: String,
    window: u32,
}

impl<D: Datastore> DedupService<D> {
    pub fn new(store: D, database_id: String, window: u32) -> Self {
        Self {
            store,
            database_id,
            window,
        }
    }

    /// Scan the window for a property value equal to `url`: url-typed
    /// properties match on the value itself, rich text properties on the
    /// plain text of their first segment.
    pub fn try_find(&self, url: &str) -> HarvesterResult<Option<String>> {
        let pages = self.store.query_recent(&self.database_id, self.window)?;

        for page in pages {
            for value in page.properties.values() {
                let matched = (value.is_url() && value.url.as_deref() == Some(url))
                    || (value.is_rich_text() && value.first_plain_text() == Some(url));
                if matched {
                    return Ok(Some(page.id.clone()));
                }
            }
        }

        Ok(None)
    }

    /// Best-effort variant: a failed check is reported and treated as "no
    /// match", biasing toward duplicate creation over missed insertion
    pub fn find_existing(&self, url: &str) -> Option<String> {
        match self.try_find(url) {
            Ok(found) => found,
            Err(e) => {
                eprintln!("Dedup check failed for {}: {}", url, e);
                None
            }
        }
    }
}
