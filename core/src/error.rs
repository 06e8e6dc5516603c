use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum IndexError {
    /// A document named in the corpus could not be read. Only that
    /// document is dropped from the index.
    #[error("document not found: {document}")]
    DocumentNotFound {
        document: String,
        #[source]
        source: io::Error,
    },
    /// Keyword filtering cannot proceed without the noise words.
    #[error("noise words file not found: {}", .path.display())]
    NoiseWordsNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("document list file not found: {}", .path.display())]
    DocumentListNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Raised only in strict builds, where any unreadable document aborts.
    #[error("{} document(s) could not be indexed: {}", .0.len(), .0.join(", "))]
    SkippedDocuments(Vec<String>),
}

impl IndexError {
    pub fn document_not_found(document: impl Into<String>, source: io::Error) -> Self {
        IndexError::DocumentNotFound { document: document.into(), source }
    }
}
