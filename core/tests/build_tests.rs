use search_core::{build_from_files, build_index, ContentProvider, IndexError, MemoryContentProvider, NoiseWords, Strictness};
use std::fs;
use tempfile::tempdir;

fn write_corpus(dir: &std::path::Path) {
    fs::write(dir.join("docs.txt"), "a.txt\nmissing.txt\nb.txt\n").unwrap();
    fs::write(dir.join("noisewords.txt"), "the\nof\n").unwrap();
    fs::write(dir.join("a.txt"), "The rain of Spain. rain!").unwrap();
    fs::write(dir.join("b.txt"), "Spain spain spain, rain").unwrap();
}

#[test]
fn builds_from_files_skipping_missing_documents() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let index = build_from_files(dir.path().join("docs.txt"), dir.path().join("noisewords.txt"), Strictness::Lenient).unwrap();

    assert_eq!(index.documents(), &["a.txt".to_string(), "b.txt".to_string()]);
    assert_eq!(index.top5search("spain", "rain"), vec!["b.txt", "a.txt"]);
    assert!(!index.contains_keyword("the"));
}

#[test]
fn strict_build_fails_on_missing_document() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let err = build_from_files(dir.path().join("docs.txt"), dir.path().join("noisewords.txt"), Strictness::Strict).unwrap_err();
    match err {
        IndexError::SkippedDocuments(docs) => assert_eq!(docs, vec!["missing.txt".to_string()]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_noise_words_is_fatal() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let err = build_from_files(dir.path().join("docs.txt"), dir.path().join("nope.txt"), Strictness::Lenient).unwrap_err();
    assert!(matches!(err, IndexError::NoiseWordsNotFound { .. }));
}

#[test]
fn missing_document_list_is_fatal() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let err = build_from_files(dir.path().join("nope.txt"), dir.path().join("noisewords.txt"), Strictness::Lenient).unwrap_err();
    assert!(matches!(err, IndexError::DocumentListNotFound { .. }));
}

#[test]
fn skipped_documents_are_reported() {
    let provider = MemoryContentProvider::new().with_document("here", "text");
    let outcome = build_index(["gone", "here"], &NoiseWords::new(), &provider);
    assert_eq!(outcome.skipped_documents(), vec!["gone".to_string()]);
    assert_eq!(outcome.index.occurrences("text").len(), 1);
}

/// Fails every read with an error other than `DocumentNotFound`.
struct BrokenProvider;

impl ContentProvider for BrokenProvider {
    fn read(&self, document: &str) -> Result<String, IndexError> {
        Err(IndexError::DocumentListNotFound {
            path: document.into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }
}

#[test]
fn strict_build_names_documents_whatever_the_error() {
    let outcome = build_index(["locked.txt"], &NoiseWords::new(), &BrokenProvider);
    assert_eq!(outcome.skipped_documents(), vec!["locked.txt".to_string()]);
    match outcome.into_result(Strictness::Strict) {
        Err(IndexError::SkippedDocuments(docs)) => assert_eq!(docs, vec!["locked.txt".to_string()]),
        other => panic!("unexpected: {other:?}"),
    }
}
