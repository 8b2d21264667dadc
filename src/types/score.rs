//! Scoring results handed to the rendering collaborator.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{Bm25IdfVariant, Bm25Params};

use super::token::NormalizedToken;

/// Document indexes ordered by descending score. Ties keep input order.
fn rank_descending(scores: impl Iterator<Item = f64>) -> Vec<usize> {
    let mut indexed: Vec<(usize, f64)> = scores.enumerate().collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    indexed.into_iter().map(|(i, _)| i).collect()
}

/// Output of the tokenization visualizer.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizationReport {
    /// Every token in input order, including soft-deleted stop words.
    pub tokens: Vec<NormalizedToken>,
    /// Distinct active token texts in first-seen order.
    pub vocabulary: Vec<String>,
}

/// Bag-of-words result for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowScore {
    /// Raw counts over the union vocabulary.
    pub vector: Vec<u32>,
    pub dot: f64,
    pub cosine: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BagOfWordsReport {
    pub vocabulary: Vec<String>,
    pub query_vector: Vec<u32>,
    pub documents: Vec<BowScore>,
}

impl BagOfWordsReport {
    /// Documents ordered by cosine similarity.
    pub fn ranking(&self) -> Vec<usize> {
        rank_descending(self.documents.iter().map(|d| d.cosine))
    }
}

/// TF-IDF result for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TfIdfScore {
    /// TF x IDF weights over the union vocabulary.
    pub vector: Vec<f64>,
    pub dot: f64,
    pub cosine: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TfIdfReport {
    pub vocabulary: Vec<String>,
    /// IDF per vocabulary term, same order as `vocabulary`.
    pub idf: Vec<f64>,
    pub query_vector: Vec<f64>,
    pub documents: Vec<TfIdfScore>,
}

impl TfIdfReport {
    /// Documents ordered by cosine similarity.
    pub fn ranking(&self) -> Vec<usize> {
        rank_descending(self.documents.iter().map(|d| d.cosine))
    }
}

/// BM25 result for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bm25Score {
    /// Sum of `per_term`.
    pub total: f64,
    /// Contribution of each query term, in query order.
    pub per_term: IndexMap<String, f64>,
    /// Query terms occurring at least once in the document.
    pub matched_terms: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bm25Report {
    /// Query-only vocabulary.
    pub vocabulary: Vec<String>,
    pub idf: Vec<f64>,
    pub avg_doc_length: f64,
    pub params: Bm25Params,
    pub idf_variant: Bm25IdfVariant,
    pub documents: Vec<Bm25Score>,
}

impl Bm25Report {
    /// Documents ordered by BM25 total.
    pub fn ranking(&self) -> Vec<usize> {
        rank_descending(self.documents.iter().map(|d| d.total))
    }
}
