use crate::domain::CandidateItem;
use crate::services::dedup::DedupService;
use crate::services::writer::RecordWriter;
use crate::storage::traits::Datastore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub created: usize,
    pub duplicates: usize,
    pub skipped_no_url: usize,
    pub failed: usize,
}

/// Runs fetched candidates through dedup and record creation, one at a
/// time. There is no transaction: a failing write is reported and the batch
/// continues, so partial completion is an accepted outcome.
pub struct IngestService<D: Datastore> {
    dedup: DedupService<D>,
    writer: RecordWriter<D>,
}

impl<D: Datastore> IngestService<D> {
    pub fn new(dedup: DedupService<D>, writer: RecordWriter<D>) -> Self {
        Self { dedup, writer }
    }

    pub fn run(&self, items: &[CandidateItem], dry_run: bool) -> IngestSummary {
        let mut summary = IngestSummary::default();

        for item in items {
            let url = match item.url.as_deref().filter(|u| !u.is_empty()) {
                Some(url) => url,
                None => {
                    summary.skipped_no_url += 1;
                    continue;
                }
            };

            if let Some(existing) = self.dedup.find_existing(url) {
                println!("Already exists, skip: {} ({})", url, existing);
                summary.duplicates += 1;
                continue;
            }

            if dry_run {
                println!("[DRY RUN] {} [{}] {}", item.title, item.source, url);
                summary.created += 1;
                continue;
            }

            match self.writer.create(&item.title, url, item.source) {
                Ok(page_id) => {
                    println!("Created page {} ({})", page_id, item.source);
                    summary.created += 1;
                }
                Err(e) => {
                    eprintln!("Failed to create record for {}: {}", url, e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
