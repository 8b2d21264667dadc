//! Document length table for BM25 length normalization.

use crate::types::TokenSequence;

/// Token count of each document, indexed by document position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocLengths {
    lengths: Vec<u32>,
}

impl DocLengths {
    /// Count tokens of every document.
    pub fn build(documents: &[TokenSequence]) -> Self {
        Self {
            lengths: documents.iter().map(|d| d.len() as u32).collect(),
        }
    }

    /// Get token count for a document. Unknown indexes have length 0.
    pub fn get(&self, doc: usize) -> u32 {
        self.lengths.get(doc).copied().unwrap_or(0)
    }

    /// Mean length over all documents, empty ones included. 0 with no documents.
    pub fn average(&self) -> f64 {
        if self.lengths.is_empty() {
            0.0
        } else {
            self.lengths.iter().map(|&l| l as u64).sum::<u64>() as f64 / self.lengths.len() as f64
        }
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// True when the table holds no documents.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Lengths in document order.
    pub fn as_slice(&self) -> &[u32] {
        &self.lengths
    }
}
