use crate::errors::HarvesterResult;

#[cfg_attr(test, mockall::automock)]
pub trait Datastore: Send + Sync {
    fn retrieve_database(&self, database_id: &str) -> HarvesterResult<notion::Database>;
    fn query_recent(&self, database_id: &str, page_size: u32)
        -> HarvesterResult<Vec<notion::Page>>;
    fn create_page(
        &self,
        database_id: &str,
        properties: serde_json::Value,
    ) -> HarvesterResult<notion::Page>;
}
