//! Bag-of-words scoring: raw count vectors, dot product and cosine similarity.

use crate::index::term_index::count_vector;
use crate::index::{cosine_similarity, dot, vector, FrequencyTable, Vocabulary, VocabularyScope};
use crate::types::{BagOfWordsReport, BowScore, TokenSequence};

use super::ScoringEngine;

/// Score pre-tokenized documents against a pre-tokenized query over the
/// union vocabulary.
pub fn score(query: &[String], documents: &[TokenSequence]) -> BagOfWordsReport {
    let vocabulary = Vocabulary::build(query, documents, VocabularyScope::Union);
    let table = FrequencyTable::compute(&vocabulary, documents);
    let query_vector = count_vector(&vocabulary, query);
    let q = vector::to_f64(&query_vector);

    let documents: Vec<BowScore> = (0..table.doc_count())
        .map(|doc| {
            let counts = table.count_vector(doc);
            let d = vector::to_f64(&counts);
            BowScore {
                dot: dot(&q, &d),
                cosine: cosine_similarity(&q, &d),
                vector: counts,
            }
        })
        .collect();

    log::debug!(
        "bag-of-words: {} terms, {} documents",
        vocabulary.len(),
        documents.len()
    );

    BagOfWordsReport {
        vocabulary: vocabulary.to_vec(),
        query_vector,
        documents,
    }
}

impl ScoringEngine {
    /// Count vectors, dot products and cosine similarity for raw texts.
    pub fn bag_of_words<S: AsRef<str>>(&self, query: &str, documents: &[S]) -> BagOfWordsReport {
        score(&self.tokenize(query), &self.tokenize_all(documents))
    }
}
