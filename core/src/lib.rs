pub mod build;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod source;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use build::{build_from_files, build_index, load_noise_words, BuildOutcome, SkippedDocument, Strictness};
pub use document::{load_document, load_keywords, DocumentTable};
pub use error::IndexError;
pub use index::{insert_last_occurrence, insertion_point, KeywordIndex};
pub use query::{top5search, TOP_K};
pub use source::{ContentProvider, FsContentProvider, MemoryContentProvider};
pub use tokenizer::{normalize, NoiseWords};

/// One keyword's presence in one document: `frequency` is the number of
/// times the keyword appears in `document`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}

/// Occurrences of a single keyword, non-increasing by frequency.
pub type OccurrenceList = Vec<Occurrence>;
