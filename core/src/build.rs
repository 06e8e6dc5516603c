use crate::document::load_document;
use crate::error::IndexError;
use crate::index::KeywordIndex;
use crate::source::{read_word_list, ContentProvider, FsContentProvider};
use crate::tokenizer::NoiseWords;
use std::path::Path;

/// What to do when a document cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Drop the document and keep going.
    #[default]
    Lenient,
    /// Fail the whole build.
    Strict,
}

/// A listed document that could not be indexed, and why.
#[derive(Debug)]
pub struct SkippedDocument {
    pub document: String,
    pub error: IndexError,
}

/// The built index plus the documents that had to be left out.
#[derive(Debug)]
pub struct BuildOutcome {
    pub index: KeywordIndex,
    pub skipped: Vec<SkippedDocument>,
}

impl BuildOutcome {
    pub fn skipped_documents(&self) -> Vec<String> {
        self.skipped.iter().map(|s| s.document.clone()).collect()
    }

    pub fn into_result(self, strictness: Strictness) -> Result<KeywordIndex, IndexError> {
        if strictness == Strictness::Strict && !self.skipped.is_empty() {
            return Err(IndexError::SkippedDocuments(self.skipped_documents()));
        }
        Ok(self.index)
    }
}

/// Index every document in order. A document that cannot be read is
/// recorded in [`BuildOutcome::skipped`] and leaves the index untouched.
pub fn build_index<I, S>(
    document_ids: I,
    noise: &NoiseWords,
    provider: &dyn ContentProvider,
) -> BuildOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index = KeywordIndex::new();
    let mut skipped = Vec::new();
    for id in document_ids {
        let id = id.as_ref();
        match load_document(id, provider, noise) {
            Ok(table) => {
                index.merge(table);
            }
            Err(err) => {
                tracing::warn!(document = id, error = %err, "skipping document");
                skipped.push(SkippedDocument { document: id.to_string(), error: err });
            }
        }
    }
    tracing::info!(
        num_docs = index.documents().len(),
        num_keywords = index.keyword_count(),
        skipped = skipped.len(),
        "index build complete"
    );
    BuildOutcome { index, skipped }
}

pub fn load_noise_words<P: AsRef<Path>>(path: P) -> Result<NoiseWords, IndexError> {
    let path = path.as_ref();
    let words = read_word_list(path)
        .map_err(|source| IndexError::NoiseWordsNotFound { path: path.to_path_buf(), source })?;
    let noise = NoiseWords::from_words(words);
    tracing::debug!(path = %path.display(), count = noise.len(), "loaded noise words");
    Ok(noise)
}

/// Build from a file listing document names and a noise-word file, both
/// whitespace separated. Document names resolve relative to the directory
/// holding the list file.
pub fn build_from_files<P, Q>(
    docs_file: P,
    noise_file: Q,
    strictness: Strictness,
) -> Result<KeywordIndex, IndexError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let noise = load_noise_words(noise_file)?;
    let docs_file = docs_file.as_ref();
    let documents = read_word_list(docs_file).map_err(|source| {
        IndexError::DocumentListNotFound { path: docs_file.to_path_buf(), source }
    })?;
    let root = docs_file.parent().unwrap_or_else(|| Path::new(""));
    let provider = FsContentProvider::new(root);
    build_index(&documents, &noise, &provider).into_result(strictness)
}
