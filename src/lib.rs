//! # lexiviz
//!
//! Scoring core for classical information-retrieval visualizers.
//!
//! Raw query and document text goes in; tokens, vocabularies, frequency
//! tables and bag-of-words, TF-IDF and BM25 scores come out as plain,
//! serializable records for a rendering layer to draw.
//!
//! ```
//! use lexiviz::{Bm25Params, ScoringEngine};
//!
//! let engine = ScoringEngine::new();
//! let docs = ["a quick brown fox jumps", "lazy dogs sleep all day"];
//! let report = engine.bm25("the quick fox", &docs, Bm25Params::default()).unwrap();
//! assert!(report.documents[0].total > report.documents[1].total);
//! ```

pub mod config;
pub mod engine;
pub mod index;
pub mod session;
pub mod types;

pub use config::{Bm25IdfVariant, Bm25Params, ScoringConfig, DEFAULT_B, DEFAULT_K1};
pub use engine::normalizer::{NormalizeOptions, Normalizer};
pub use engine::tokenizer::Tokenizer;
pub use engine::ScoringEngine;
pub use index::{
    cosine_similarity, DocLengths, FrequencySummary, FrequencyTable, Vocabulary, VocabularyScope,
};
pub use session::{ScoringSession, Snapshot};
pub use types::{
    BagOfWordsReport, Bm25Report, Bm25Score, BowScore, LexError, LexResult, NormalizationReport,
    NormalizedToken, TfIdfReport, TfIdfScore, TokenSequence, TokenState,
};
