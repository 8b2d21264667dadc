//! TF-IDF scoring with length-normalized TF and smoothed IDF.

use crate::index::term_index::{count_vector, normalized_frequency};
use crate::index::{cosine_similarity, dot, FrequencyTable, Vocabulary, VocabularyScope};
use crate::types::{TfIdfReport, TfIdfScore, TokenSequence};

use super::ScoringEngine;

/// `ln((N + 1) / (df + 1))`. Non-negative whenever `df <= N`.
pub fn idf(n_docs: usize, df: usize) -> f64 {
    ((n_docs as f64 + 1.0) / (df as f64 + 1.0)).ln()
}

fn weigh(counts: &[u32], length: u32, idf: &[f64]) -> Vec<f64> {
    counts
        .iter()
        .zip(idf)
        .map(|(&c, &w)| normalized_frequency(c, length) * w)
        .collect()
}

/// Score pre-tokenized documents over the union vocabulary.
pub fn score(query: &[String], documents: &[TokenSequence]) -> TfIdfReport {
    let vocabulary = Vocabulary::build(query, documents, VocabularyScope::Union);
    let table = FrequencyTable::compute(&vocabulary, documents);
    let n = table.doc_count();

    let idf_weights: Vec<f64> = vocabulary
        .iter()
        .map(|t| idf(n, table.doc_frequency(t)))
        .collect();

    let query_vector = weigh(
        &count_vector(&vocabulary, query),
        query.len() as u32,
        &idf_weights,
    );

    let documents: Vec<TfIdfScore> = (0..n)
        .map(|doc| {
            let weights = weigh(&table.count_vector(doc), table.doc_length(doc), &idf_weights);
            TfIdfScore {
                dot: dot(&query_vector, &weights),
                cosine: cosine_similarity(&query_vector, &weights),
                vector: weights,
            }
        })
        .collect();

    log::debug!("tf-idf: {} terms, {} documents", vocabulary.len(), n);

    TfIdfReport {
        vocabulary: vocabulary.to_vec(),
        idf: idf_weights,
        query_vector,
        documents,
    }
}

impl ScoringEngine {
    /// TF-IDF vectors, dot products and cosine similarity for raw texts.
    pub fn tfidf<S: AsRef<str>>(&self, query: &str, documents: &[S]) -> TfIdfReport {
        score(&self.tokenize(query), &self.tokenize_all(documents))
    }
}
