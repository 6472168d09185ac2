use crate::domain::{CandidateItem, SourceKind};
use crate::errors::HarvesterResult;

pub trait ContentSource: Send + Sync {
    /// Identifies this source kind
    fn kind(&self) -> SourceKind;

    /// Fetch the most recent items from every configured identifier.
    /// Implementations catch their own per-identifier failures and return
    /// whatever was accumulated; an unconfigured source returns an empty list.
    fn fetch_latest(&self) -> HarvesterResult<Vec<CandidateItem>>;
}
