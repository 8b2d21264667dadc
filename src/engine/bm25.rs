//! Okapi BM25 ranking over query terms.

use indexmap::IndexMap;

use crate::config::{Bm25IdfVariant, Bm25Params};
use crate::index::{FrequencyTable, Vocabulary, VocabularyScope};
use crate::types::{Bm25Report, Bm25Score, LexResult, TokenSequence};

use super::ScoringEngine;

/// Contribution of one term to one document's score.
///
/// Returns exactly 0 when the term does not occur, whatever the IDF sign.
/// Parameter combinations that zero the denominator (e.g. `k1 = -1, b = 0`
/// at `tf = 1`) also yield 0 instead of NaN or an infinity.
pub fn term_contribution(
    idf: f64,
    tf: u32,
    doc_len: u32,
    avg_doc_len: f64,
    params: Bm25Params,
) -> f64 {
    if tf == 0 {
        return 0.0;
    }
    let tf = tf as f64;
    let len_ratio = if avg_doc_len > 0.0 {
        doc_len as f64 / avg_doc_len
    } else {
        0.0
    };
    let Bm25Params { k1, b } = params;
    let denom = tf + k1 * (1.0 - b + b * len_ratio);
    if denom == 0.0 {
        return 0.0;
    }
    idf * (tf * (k1 + 1.0)) / denom
}

/// Score pre-tokenized documents. Parameters are validated before any work.
pub fn score(
    query: &[String],
    documents: &[TokenSequence],
    params: Bm25Params,
    variant: Bm25IdfVariant,
) -> LexResult<Bm25Report> {
    params.validate()?;

    let vocabulary = Vocabulary::build(query, documents, VocabularyScope::QueryOnly);
    let table = FrequencyTable::compute(&vocabulary, documents);
    let n = table.doc_count();
    let avgdl = table.avg_doc_length();

    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|t| variant.idf(n, table.doc_frequency(t)))
        .collect();

    let mut scores = Vec::with_capacity(n);
    for doc in 0..n {
        let dl = table.doc_length(doc);
        let mut per_term = IndexMap::with_capacity(vocabulary.len());
        let mut matched_terms = Vec::new();
        let mut total = 0.0;

        for (term, &term_idf) in vocabulary.iter().zip(&idf) {
            let tf = table.raw_count(term, doc);
            let contribution = term_contribution(term_idf, tf, dl, avgdl, params);
            log::trace!("bm25 doc={doc} term={term} tf={tf} idf={term_idf} -> {contribution}");
            if tf > 0 {
                matched_terms.push(term.to_string());
            }
            total += contribution;
            per_term.insert(term.to_string(), contribution);
        }

        scores.push(Bm25Score {
            total,
            per_term,
            matched_terms,
        });
    }

    log::debug!(
        "bm25: {} query terms, {} documents, avgdl={:.3}, k1={}, b={}",
        vocabulary.len(),
        n,
        avgdl,
        params.k1,
        params.b
    );

    Ok(Bm25Report {
        vocabulary: vocabulary.to_vec(),
        idf,
        avg_doc_length: avgdl,
        params,
        idf_variant: variant,
        documents: scores,
    })
}

impl ScoringEngine {
    /// BM25 over the query terms with the default non-negative IDF.
    pub fn bm25<S: AsRef<str>>(
        &self,
        query: &str,
        documents: &[S],
        params: Bm25Params,
    ) -> LexResult<Bm25Report> {
        self.bm25_with_variant(query, documents, params, Bm25IdfVariant::Smoothed)
    }

    /// BM25 with an explicit IDF formula.
    pub fn bm25_with_variant<S: AsRef<str>>(
        &self,
        query: &str,
        documents: &[S],
        params: Bm25Params,
        variant: Bm25IdfVariant,
    ) -> LexResult<Bm25Report> {
        score(
            &self.tokenize(query),
            &self.tokenize_all(documents),
            params,
            variant,
        )
    }
}
