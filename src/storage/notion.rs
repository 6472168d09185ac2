use notion::NotionClient;

use crate::errors::HarvesterResult;
use crate::storage::traits::Datastore;

#[derive(Clone)]
pub struct NotionDatastore {
    client: NotionClient,
}

impl NotionDatastore {
    pub fn new(token: &str) -> HarvesterResult<Self> {
        Ok(Self {
            client: NotionClient::new(token)?,
        })
    }
}

impl Datastore for NotionDatastore {
    fn retrieve_database(&self, database_id: &str) -> HarvesterResult<notion::Database> {
        Ok(self.client.retrieve_database(database_id)?)
    }

    fn query_recent(
        &self,
        database_id: &str,
        page_size: u32,
    ) -> HarvesterResult<Vec<notion::Page>> {
        Ok(self.client.query_database(database_id, page_size)?)
    }

    fn create_page(
        &self,
        database_id: &str,
        properties: serde_json::Value,
    ) -> HarvesterResult<notion::Page> {
        Ok(self.client.create_page(database_id, properties)?)
    }
}
