use crate::document::DocumentTable;
use crate::{Occurrence, OccurrenceList};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Binary search for where an occurrence of `frequency` belongs in
/// `prefix`, which is sorted by descending frequency.
///
/// On an exact match the position right after the matched midpoint is
/// returned, which is not necessarily after the last equal entry. Also returns
/// the midpoints visited, in order.
pub fn insertion_point(prefix: &[Occurrence], frequency: u32) -> (usize, Vec<usize>) {
    let mut mids = Vec::new();
    let mut lo: isize = 0;
    let mut hi: isize = prefix.len() as isize - 1;
    while lo <= hi {
        let mid = (lo + hi) / 2;
        mids.push(mid as usize);
        match prefix[mid as usize].frequency.cmp(&frequency) {
            Ordering::Equal => return (mid as usize + 1, mids),
            Ordering::Less => hi = mid - 1,
            Ordering::Greater => lo = mid + 1,
        }
    }
    ((hi + 1) as usize, mids)
}

/// Move the last element of `occs` into its sorted position; the elements
/// before it must already be in descending frequency order.
///
/// Returns the midpoints checked by the search, or `None` if there was
/// nothing to search (fewer than two elements).
pub fn insert_last_occurrence(occs: &mut OccurrenceList) -> Option<Vec<usize>> {
    if occs.len() < 2 {
        return None;
    }
    let last = occs.pop()?;
    let (at, mids) = insertion_point(occs, last.frequency);
    occs.insert(at, last);
    Some(mids)
}

/// Keyword -> occurrences across the whole corpus.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    keywords: HashMap<String, OccurrenceList>,
    documents: Vec<String>,
    seen: HashSet<String>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document's table into the index. Returns `false` (and
    /// changes nothing) if that document has already been merged.
    pub fn merge(&mut self, table: DocumentTable) -> bool {
        if !self.seen.insert(table.document().to_string()) {
            tracing::warn!(document = table.document(), "document already indexed, skipping");
            return false;
        }
        let (document, keywords) = table.into_parts();
        for (keyword, occ) in keywords {
            match self.keywords.entry(keyword) {
                Entry::Vacant(e) => {
                    e.insert(vec![occ]);
                }
                Entry::Occupied(mut e) => {
                    let list = e.get_mut();
                    list.push(occ);
                    insert_last_occurrence(list);
                }
            }
        }
        self.documents.push(document);
        true
    }

    /// Occurrences of `keyword`; empty when it was never indexed.
    pub fn occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.keywords.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.keywords.contains_key(keyword)
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Indexed documents in merge order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// All entries, ordered by keyword.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> + '_ {
        let mut entries: Vec<_> =
            self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice())).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}
