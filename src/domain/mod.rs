pub mod item;

pub use item::{CandidateItem, SourceKind};
