use crate::index::KeywordIndex;
use crate::tokenizer::normalize;
use crate::Occurrence;

/// Maximum number of documents returned by [`top5search`].
pub const TOP_K: usize = 5;

struct Ranking<'a> {
    docs: Vec<&'a str>,
}

impl<'a> Ranking<'a> {
    fn full(&self) -> bool {
        self.docs.len() >= TOP_K
    }

    fn contains(&self, doc: &str) -> bool {
        self.docs.iter().any(|d| *d == doc)
    }

    /// Push `doc` unless it is already ranked; returns whether it was added.
    fn emit(&mut self, doc: &'a str) -> bool {
        if self.contains(doc) {
            return false;
        }
        self.docs.push(doc);
        true
    }

    fn drain(&mut self, rest: &'a [Occurrence]) {
        for occ in rest {
            if self.full() {
                break;
            }
            self.emit(&occ.document);
        }
    }
}

/// Documents where `kw1` or `kw2` occurs, highest frequency first, at most
/// [`TOP_K`] of them and each at most once. Equal frequencies favour `kw1`.
/// Unknown keywords contribute nothing; no match is an empty result.
pub fn top5search(index: &KeywordIndex, kw1: &str, kw2: &str) -> Vec<String> {
    let l1 = lookup(index, kw1);
    let l2 = lookup(index, kw2);
    let mut ranking = Ranking { docs: Vec::with_capacity(TOP_K) };
    let (mut i, mut j) = (0, 0);

    while i < l1.len() && j < l2.len() && !ranking.full() {
        let (a, b) = (&l1[i], &l2[j]);
        if a.frequency > b.frequency {
            ranking.emit(&a.document);
            i += 1;
        } else if a.frequency < b.frequency {
            ranking.emit(&b.document);
            j += 1;
        } else if a.document == b.document {
            ranking.emit(&a.document);
            i += 1;
            j += 1;
        } else if ranking.emit(&a.document) {
            i += 1;
        } else {
            ranking.emit(&b.document);
            i += 1;
            j += 1;
        }
    }

    ranking.drain(&l1[i..]);
    ranking.drain(&l2[j..]);
    ranking.docs.into_iter().map(str::to_string).collect()
}

fn lookup<'a>(index: &'a KeywordIndex, keyword: &str) -> &'a [Occurrence] {
    match normalize(keyword) {
        Some(kw) => index.occurrences(&kw),
        None => &[],
    }
}

impl KeywordIndex {
    /// See [`top5search`].
    pub fn top5search(&self, kw1: &str, kw2: &str) -> Vec<String> {
        top5search(self, kw1, kw2)
    }
}
