pub mod property_map;
pub mod dedup;
pub mod writer;
pub mod ingest;

pub use dedup::DedupService;
pub use ingest::{IngestService, IngestSummary};
pub use property_map::PropertyMapping;
pub use writer::RecordWriter;
