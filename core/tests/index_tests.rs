use search_core::{
    build_index, insert_last_occurrence, load_keywords, KeywordIndex, MemoryContentProvider,
    NoiseWords, Occurrence,
};

fn fruit_corpus() -> (MemoryContentProvider, NoiseWords) {
    let provider = MemoryContentProvider::new()
        .with_document("doc1", "Apple apple BANANA. banana, the")
        .with_document("doc2", "banana apple apple!");
    (provider, NoiseWords::from_words(["the", "is"]))
}

fn is_descending(occs: &[Occurrence]) -> bool {
    occs.windows(2).all(|w| w[0].frequency >= w[1].frequency)
}

#[test]
fn fruit_corpus_occurrences() {
    let (provider, noise) = fruit_corpus();
    let index = build_index(["doc1", "doc2"], &noise, &provider).index;

    assert_eq!(
        index.occurrences("apple"),
        &[Occurrence::new("doc1", 2), Occurrence::new("doc2", 2)]
    );
    assert_eq!(
        index.occurrences("banana"),
        &[Occurrence::new("doc1", 2), Occurrence::new("doc2", 1)]
    );
    assert!(!index.contains_keyword("the"));
    assert_eq!(index.keyword_count(), 2);
    assert_eq!(index.top5search("apple", "banana"), vec!["doc1", "doc2"]);
}

#[test]
fn indexing_a_document_twice_is_the_same_as_once() {
    let (provider, noise) = fruit_corpus();
    let twice = build_index(["doc1", "doc1", "doc2"], &noise, &provider).index;
    let once = build_index(["doc1", "doc2"], &noise, &provider).index;

    for kw in ["apple", "banana"] {
        assert_eq!(twice.occurrences(kw), once.occurrences(kw));
    }
    assert_eq!(twice.documents(), once.documents());
}

#[test]
fn merged_lists_stay_descending() {
    let noise = NoiseWords::new();
    let mut index = KeywordIndex::new();
    let counts = [3usize, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    for (n, count) in counts.iter().enumerate() {
        let doc = format!("doc{n}");
        let text = vec!["word"; *count].join(" ");
        assert!(index.merge(load_keywords(&doc, &text, &noise)));
        assert!(is_descending(index.occurrences("word")));
    }
    assert_eq!(index.occurrences("word").len(), counts.len());
    assert_eq!(index.occurrences("word")[0].frequency, 9);
}

#[test]
fn insertion_keeps_every_prefix_sorted() {
    let mut occs = Vec::new();
    for (n, f) in [7u32, 2, 7, 9, 1, 4, 4, 8].into_iter().enumerate() {
        occs.push(Occurrence::new(format!("d{n}"), f));
        let mids = insert_last_occurrence(&mut occs);
        assert_eq!(mids.is_none(), n == 0);
        assert!(is_descending(&occs));
    }
}

#[test]
fn empty_document_adds_nothing() {
    let provider = MemoryContentProvider::new().with_document("blank", "  \n the is ");
    let noise = NoiseWords::from_words(["the", "is"]);
    let index = build_index(["blank"], &noise, &provider).index;
    assert!(index.is_empty());
    assert_eq!(index.documents(), &["blank".to_string()]);
}
