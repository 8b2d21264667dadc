//! Latest inputs and results of an interactive visualizer.
//!
//! Each edit recomputes every scorer from scratch and replaces the previous
//! [`Snapshot`] in one assignment. Edits with invalid parameters are refused
//! before computation, leaving the previous snapshot in place.

use serde::Serialize;

use crate::config::{Bm25IdfVariant, Bm25Params, ScoringConfig};
use crate::engine::normalizer::NormalizeOptions;
use crate::engine::ScoringEngine;
use crate::types::{
    BagOfWordsReport, Bm25Report, LexError, LexResult, NormalizationReport, TfIdfReport,
};

/// Everything the rendering layer displays after one recomputation.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Tokenization view of the query text.
    pub normalization: NormalizationReport,
    pub bag_of_words: BagOfWordsReport,
    pub tfidf: TfIdfReport,
    pub bm25: Bm25Report,
}

/// Single-writer scoring state for one visualizer instance.
pub struct ScoringSession {
    engine: ScoringEngine,
    config: ScoringConfig,
    query: String,
    documents: Vec<String>,
    snapshot: Snapshot,
}

impl ScoringSession {
    /// Create an empty session (no query, no documents).
    pub fn new(config: ScoringConfig) -> LexResult<Self> {
        Self::with_inputs(config, String::new(), Vec::new())
    }

    /// Create a session and compute its first snapshot.
    pub fn with_inputs(
        config: ScoringConfig,
        query: impl Into<String>,
        documents: Vec<String>,
    ) -> LexResult<Self> {
        config.bm25.validate()?;
        let engine = ScoringEngine::new();
        let query = query.into();
        let snapshot = compute(&engine, &config, &query, &documents)?;
        Ok(Self {
            engine,
            config,
            query,
            documents,
            snapshot,
        })
    }

    /// Results of the latest successful recomputation.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Configuration the snapshot was computed with.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current document texts, in order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Replace the query text and recompute.
    pub fn set_query(&mut self, text: impl Into<String>) -> LexResult<()> {
        self.query = text.into();
        self.recompute()
    }

    /// Replace the text of an existing document and recompute.
    pub fn set_document(&mut self, index: usize, text: impl Into<String>) -> LexResult<()> {
        let slot = self
            .documents
            .get_mut(index)
            .ok_or(LexError::DocumentNotFound(index))?;
        *slot = text.into();
        self.recompute()
    }

    /// Append a document and return its index.
    pub fn push_document(&mut self, text: impl Into<String>) -> LexResult<usize> {
        self.documents.push(text.into());
        self.recompute()?;
        Ok(self.documents.len() - 1)
    }

    /// Remove a document and return its text.
    pub fn remove_document(&mut self, index: usize) -> LexResult<String> {
        if index >= self.documents.len() {
            return Err(LexError::DocumentNotFound(index));
        }
        let removed = self.documents.remove(index);
        self.recompute()?;
        Ok(removed)
    }

    /// Update BM25 parameters. Invalid values leave the session untouched.
    pub fn set_bm25_params(&mut self, params: Bm25Params) -> LexResult<()> {
        if let Err(e) = params.validate() {
            log::warn!("refusing BM25 parameter update: {e}");
            return Err(e);
        }
        self.config.bm25 = params;
        self.recompute()
    }

    /// Update BM25 parameters from raw slider text.
    pub fn set_bm25_params_str(&mut self, k1: &str, b: &str) -> LexResult<()> {
        let params = Bm25Params::parse(k1, b).inspect_err(|e| {
            log::warn!("refusing BM25 parameter update: {e}");
        })?;
        self.set_bm25_params(params)
    }

    /// Switch the BM25 IDF formula and recompute.
    pub fn set_idf_variant(&mut self, variant: Bm25IdfVariant) -> LexResult<()> {
        self.config.idf_variant = variant;
        self.recompute()
    }

    /// Toggle lemmatization and stop-word removal for the tokenization view.
    pub fn set_normalize_options(&mut self, options: NormalizeOptions) -> LexResult<()> {
        self.config.lemmatize = options.lemmatize;
        self.config.remove_stop_words = options.remove_stop_words;
        self.recompute()
    }

    fn recompute(&mut self) -> LexResult<()> {
        self.snapshot = compute(&self.engine, &self.config, &self.query, &self.documents)?;
        Ok(())
    }
}

fn compute(
    engine: &ScoringEngine,
    config: &ScoringConfig,
    query: &str,
    documents: &[String],
) -> LexResult<Snapshot> {
    let bm25 = engine.bm25_with_variant(query, documents, config.bm25, config.idf_variant)?;
    Ok(Snapshot {
        normalization: engine.normalize(query, config.normalize_options()),
        bag_of_words: engine.bag_of_words(query, documents),
        tfidf: engine.tfidf(query, documents),
        bm25,
    })
}
