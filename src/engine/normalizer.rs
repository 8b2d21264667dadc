//! Lexical normalization for the tokenization visualizer: a closed lemma
//! dictionary and soft-deleting stop-word filter.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{NormalizedToken, TokenSequence, TokenState};

/// Lemma → known surface forms. Closed list; unknown words are never lemmatized.
///
/// A lemma is a stop word exactly when all of its surface forms are, so the
/// two passes can run in either order.
pub(crate) const LEMMAS: &[(&str, &[&str])] = &[
    ("run", &["run", "runs", "running", "ran"]),
    ("jump", &["jump", "jumps", "jumped", "jumping"]),
    ("sleep", &["sleep", "sleeps", "sleeping", "slept"]),
    ("eat", &["eat", "eats", "eating", "ate", "eaten"]),
    ("go", &["go", "goes", "going", "went", "gone"]),
    ("be", &["be", "am", "is", "are", "was", "were", "been", "being"]),
    ("have", &["have", "has", "had", "having"]),
    ("dog", &["dog", "dogs"]),
    ("fox", &["fox", "foxes"]),
    ("mouse", &["mouse", "mice"]),
    ("child", &["child", "children"]),
    ("good", &["good", "better", "best"]),
];

/// Function words excluded from vocabulary and statistics.
pub(crate) const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "if", "then", "than", "of", "in",
    "on", "at", "to", "for", "from", "by", "with", "as", "into", "onto", "about", "over",
    "under", "up", "down", "out", "off", "i", "me", "my", "you", "your", "he", "him", "his",
    "she", "her", "it", "its", "we", "us", "our", "they", "them", "their", "this", "that",
    "these", "those", "all", "be", "am", "is", "are", "was", "were", "been", "being", "have",
    "has", "had", "having", "do", "does", "did",
];

/// Which passes the tokenization visualizer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    pub lemmatize: bool,
    pub remove_stop_words: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            lemmatize: true,
            remove_stop_words: true,
        }
    }
}

/// Lemmatizer and stop-word filter over read-only tables built once.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// surface form → lemma
    lemma_index: HashMap<&'static str, &'static str>,
    stop_words: HashSet<&'static str>,
}

impl Normalizer {
    /// Build the reverse lemma index and the stop-word set.
    pub fn new() -> Self {
        let mut lemma_index = HashMap::new();
        for &(lemma, forms) in LEMMAS {
            lemma_index.insert(lemma, lemma);
            for &form in forms {
                lemma_index.insert(form, lemma);
            }
        }
        Self {
            lemma_index,
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Canonical lemma of a known surface form.
    pub fn lemma_of(&self, word: &str) -> Option<&'static str> {
        self.lemma_index.get(word).copied()
    }

    /// Check a word against the stop-word list.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Replace every known surface form with its lemma.
    pub fn lemmatize(&self, tokens: &[String]) -> TokenSequence {
        tokens
            .iter()
            .map(|t| match self.lemma_of(t) {
                Some(lemma) => lemma.to_string(),
                None => t.clone(),
            })
            .collect()
    }

    /// Tag stop words as removed without dropping their slots.
    pub fn filter_stop_words(&self, tokens: &[String]) -> Vec<NormalizedToken> {
        let mut tagged = NormalizedToken::from_sequence(tokens);
        self.remove_stop_words_in_place(&mut tagged);
        tagged
    }

    /// Lemmatize token texts in place. Text rewriting ignores token state,
    /// which keeps this pass commutative with stop-word removal.
    pub fn lemmatize_in_place(&self, tokens: &mut [NormalizedToken]) {
        for token in tokens.iter_mut() {
            if let Some(lemma) = self.lemma_of(&token.text) {
                if token.text != lemma {
                    token.text = lemma.to_string();
                }
            }
        }
    }

    /// Mark tokens whose current text is a stop word as removed.
    pub fn remove_stop_words_in_place(&self, tokens: &mut [NormalizedToken]) {
        for token in tokens.iter_mut() {
            if self.is_stop_word(&token.text) {
                token.state = TokenState::Removed;
            }
        }
    }

    /// Apply the enabled passes to a token sequence.
    pub fn normalize(&self, tokens: &[String], options: NormalizeOptions) -> Vec<NormalizedToken> {
        let mut tagged = NormalizedToken::from_sequence(tokens);
        if options.lemmatize {
            self.lemmatize_in_place(&mut tagged);
        }
        if options.remove_stop_words {
            self.remove_stop_words_in_place(&mut tagged);
        }
        tagged
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
