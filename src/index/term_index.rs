//! Frequency statistics: posting lists restricted to one vocabulary.

use std::collections::HashMap;

use serde::Serialize;

use crate::index::{DocLengths, Vocabulary};
use crate::types::TokenSequence;

/// Term counts, document frequencies and document lengths for a document set.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    /// term → sorted Vec of (document index, occurrences in document)
    postings: HashMap<String, Vec<(usize, u32)>>,
    /// Vocabulary terms in enumeration order.
    terms: Vec<String>,
    doc_lengths: DocLengths,
}

/// Flat view of a [`FrequencyTable`] for the rendering side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencySummary {
    pub vocabulary: Vec<String>,
    /// `tf[doc][term]` raw occurrence counts.
    pub tf: Vec<Vec<u32>>,
    /// Documents containing each vocabulary term.
    pub df: Vec<usize>,
    pub doc_lengths: Vec<u32>,
    pub avg_doc_length: f64,
}

impl FrequencyTable {
    /// Count every vocabulary term in every document. Terms outside the
    /// vocabulary are ignored.
    pub fn compute(vocabulary: &Vocabulary, documents: &[TokenSequence]) -> Self {
        let mut postings: HashMap<String, Vec<(usize, u32)>> =
            vocabulary.iter().map(|t| (t.to_string(), Vec::new())).collect();

        for (doc, tokens) in documents.iter().enumerate() {
            let mut counts: HashMap<&str, u32> = HashMap::new();
            for token in tokens {
                if vocabulary.contains(token) {
                    *counts.entry(token.as_str()).or_insert(0) += 1;
                }
            }
            // Documents are visited in index order, so pushing keeps each list sorted.
            for (term, count) in counts {
                if let Some(posting) = postings.get_mut(term) {
                    posting.push((doc, count));
                }
            }
        }

        Self {
            postings,
            terms: vocabulary.to_vec(),
            doc_lengths: DocLengths::build(documents),
        }
    }

    /// Look up a term. Returns (document index, occurrences) pairs.
    pub fn get(&self, term: &str) -> &[(usize, u32)] {
        self.postings.get(term).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Occurrences of `term` in document `doc`.
    pub fn raw_count(&self, term: &str, doc: usize) -> u32 {
        let posting = self.get(term);
        posting
            .binary_search_by_key(&doc, |(d, _)| *d)
            .map(|pos| posting[pos].1)
            .unwrap_or(0)
    }

    /// Occurrences divided by document length; 0 for an empty document.
    pub fn normalized_frequency(&self, term: &str, doc: usize) -> f64 {
        normalized_frequency(self.raw_count(term, doc), self.doc_length(doc))
    }

    /// Number of documents containing a term at least once.
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.get(term).len()
    }

    /// Collection size N.
    pub fn doc_count(&self) -> usize {
        self.doc_lengths.len()
    }

    /// Token count of one document, 0 when out of range.
    pub fn doc_length(&self, doc: usize) -> u32 {
        self.doc_lengths.get(doc)
    }

    /// Mean document length over the collection.
    pub fn avg_doc_length(&self) -> f64 {
        self.doc_lengths.average()
    }

    pub fn doc_lengths(&self) -> &DocLengths {
        &self.doc_lengths
    }

    /// Vocabulary terms in enumeration order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Raw count vector of one document over the vocabulary.
    pub fn count_vector(&self, doc: usize) -> Vec<u32> {
        self.terms.iter().map(|t| self.raw_count(t, doc)).collect()
    }

    /// Flatten the table into dense per-document rows.
    pub fn summary(&self) -> FrequencySummary {
        FrequencySummary {
            vocabulary: self.terms.clone(),
            tf: (0..self.doc_count()).map(|d| self.count_vector(d)).collect(),
            df: self.terms.iter().map(|t| self.doc_frequency(t)).collect(),
            doc_lengths: self.doc_lengths.as_slice().to_vec(),
            avg_doc_length: self.avg_doc_length(),
        }
    }
}

/// `count / length`, or 0 when the text is empty.
pub fn normalized_frequency(count: u32, length: u32) -> f64 {
    if length == 0 {
        0.0
    } else {
        count as f64 / length as f64
    }
}

/// Count vector of an arbitrary token sequence (e.g. the query) over a vocabulary.
pub fn count_vector(vocabulary: &Vocabulary, tokens: &[String]) -> Vec<u32> {
    let mut counts = vec![0u32; vocabulary.len()];
    for token in tokens {
        if let Some(i) = vocabulary.index_of(token) {
            counts[i] += 1;
        }
    }
    counts
}
