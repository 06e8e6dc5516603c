//! Where document text and word lists come from.

use crate::error::IndexError;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Supplies the full text of a document given its name.
pub trait ContentProvider {
    fn read(&self, document: &str) -> Result<String, IndexError>;
}

/// Reads documents from disk. Relative names resolve against `root`.
#[derive(Debug, Clone)]
pub struct FsContentProvider {
    pub root: PathBuf,
}

impl FsContentProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn path_for(&self, document: &str) -> PathBuf {
        let p = Path::new(document);
        if p.is_absolute() { p.to_path_buf() } else { self.root.join(p) }
    }
}

impl ContentProvider for FsContentProvider {
    fn read(&self, document: &str) -> Result<String, IndexError> {
        fs::read_to_string(self.path_for(document))
            .map_err(|e| IndexError::document_not_found(document, e))
    }
}

/// Documents held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentProvider {
    docs: HashMap<String, String>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.docs.insert(name.into(), text.into());
    }
}

impl ContentProvider for MemoryContentProvider {
    fn read(&self, document: &str) -> Result<String, IndexError> {
        self.docs.get(document).cloned().ok_or_else(|| {
            IndexError::document_not_found(
                document,
                io::Error::new(io::ErrorKind::NotFound, "no such document in memory"),
            )
        })
    }
}

/// Whitespace-separated words of a file, in order. Used for both the
/// document list and the noise words.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}
