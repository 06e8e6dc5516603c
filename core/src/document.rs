use crate::error::IndexError;
use crate::source::ContentProvider;
use crate::tokenizer::NoiseWords;
use crate::Occurrence;
use std::collections::HashMap;

/// Keyword occurrences within a single document. Lives only until it is
/// merged into a [`crate::KeywordIndex`]. Every occurrence names `document`.
#[derive(Debug, Clone, Default)]
pub struct DocumentTable {
    document: String,
    keywords: HashMap<String, Occurrence>,
}

impl DocumentTable {
    pub fn new(document: impl Into<String>) -> Self {
        Self { document: document.into(), keywords: HashMap::new() }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn get(&self, keyword: &str) -> Option<&Occurrence> {
        self.keywords.get(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Occurrence)> + '_ {
        self.keywords.iter().map(|(k, occ)| (k.as_str(), occ))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    fn count(&mut self, keyword: String) {
        let document = &self.document;
        self.keywords
            .entry(keyword)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence::new(document.as_str(), 1));
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, keyword: &str, frequency: u32) {
        let occ = Occurrence::new(self.document.as_str(), frequency);
        self.keywords.insert(keyword.to_string(), occ);
    }

    pub(crate) fn into_parts(self) -> (String, HashMap<String, Occurrence>) {
        (self.document, self.keywords)
    }
}

/// Count keyword occurrences of `text`, which belongs to `document`.
pub fn load_keywords(document: &str, text: &str, noise: &NoiseWords) -> DocumentTable {
    let mut table = DocumentTable::new(document);
    for token in text.split_whitespace() {
        let Some(keyword) = noise.keyword(token) else { continue };
        table.count(keyword);
    }
    table
}

/// Fetch `document` from `provider` and build its table.
pub fn load_document(
    document: &str,
    provider: &dyn ContentProvider,
    noise: &NoiseWords,
) -> Result<DocumentTable, IndexError> {
    let text = provider.read(document)?;
    let table = load_keywords(document, &text, noise);
    tracing::debug!(document, bytes = text.len(), keywords = table.len(), "scanned document");
    Ok(table)
}
