use std::collections::HashSet;

/// Characters stripped from the end of a token before the keyword test.
pub const PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// Strip a trailing run of [`PUNCTUATION`]. The first character of the
/// token is never stripped, so `"."` comes back unchanged (and is later
/// rejected as non-alphabetic).
pub fn strip_trailing_punctuation(word: &str) -> &str {
    let mut end = word.len();
    for (i, c) in word.char_indices().rev() {
        if i == 0 || !PUNCTUATION.contains(&c) {
            break;
        }
        end = i;
    }
    &word[..end]
}

fn is_alphabetic_keyword(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Lowercase a raw token, strip trailing punctuation and accept it only if
/// what is left is purely `a`-`z`. Noise words are not consulted here.
pub fn normalize(token: &str) -> Option<String> {
    let lowered = token.to_lowercase();
    let stripped = strip_trailing_punctuation(&lowered);
    if !is_alphabetic_keyword(stripped) {
        return None;
    }
    Some(stripped.to_string())
}

/// Words that are never indexed. Loaded once, immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from raw words; each is lowercased on the way in.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The keyword for `token`, or `None` when it is not indexable:
    /// embedded or leading punctuation, non-letters, or a noise word.
    pub fn keyword(&self, token: &str) -> Option<String> {
        normalize(token).filter(|kw| !self.contains(kw))
    }
}
