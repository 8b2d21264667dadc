//! Ordered, deduplicated term sets.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::types::TokenSequence;

/// Which token sequences define the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VocabularyScope {
    /// Query terms only (BM25).
    QueryOnly,
    /// Query terms followed by every document term (bag-of-words, TF-IDF).
    Union,
}

/// Unique terms in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    /// Empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the vocabulary for a query and its documents.
    pub fn build(query: &[String], documents: &[TokenSequence], scope: VocabularyScope) -> Self {
        let mut vocabulary = Self::new();
        vocabulary.extend(query);
        if scope == VocabularyScope::Union {
            for doc in documents {
                vocabulary.extend(doc);
            }
        }
        vocabulary
    }

    /// Vocabulary over raw sequences where the first one is the query.
    pub fn from_sequences(sequences: &[TokenSequence], scope: VocabularyScope) -> Self {
        match sequences.split_first() {
            Some((query, documents)) => Self::build(query, documents, scope),
            None => Self::new(),
        }
    }

    /// Add terms not seen yet, keeping existing positions.
    pub fn extend(&mut self, tokens: &[String]) {
        for token in tokens {
            if !self.terms.contains(token.as_str()) {
                self.terms.insert(token.clone());
            }
        }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when no term was collected.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check whether a term is part of the vocabulary.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Position of a term in enumeration order.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Terms in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_str())
    }

    /// Owned copy of the terms, in enumeration order.
    pub fn to_vec(&self) -> Vec<String> {
        self.terms.iter().cloned().collect()
    }
}
