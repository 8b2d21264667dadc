//! Data types shared by the tokenizer, the statistics tables and the scorers.

pub mod error;
pub mod score;
pub mod token;

pub use error::{LexError, LexResult};
pub use score::{
    BagOfWordsReport, Bm25Report, Bm25Score, BowScore, NormalizationReport, TfIdfReport,
    TfIdfScore,
};
pub use token::{NormalizedToken, TokenSequence, TokenState};
