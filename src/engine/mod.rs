//! Scoring pipeline: tokenizer → normalizer → vocabulary → statistics → scorer.
//!
//! Every call recomputes from the raw text it is given; [`ScoringEngine`]
//! holds only the read-only tokenizer and normalizer tables.

pub mod bag_of_words;
pub mod bm25;
pub mod normalizer;
pub mod tfidf;
pub mod tokenizer;

use crate::index::{FrequencyTable, Vocabulary, VocabularyScope};
use crate::types::{NormalizationReport, TokenSequence};

use self::normalizer::{NormalizeOptions, Normalizer};
use self::tokenizer::Tokenizer;

/// Entry point used by the rendering collaborators.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    tokenizer: Tokenizer,
    normalizer: Normalizer,
}

impl ScoringEngine {
    /// Create an engine with a fresh tokenizer and normalizer tables.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            normalizer: Normalizer::new(),
        }
    }

    /// The shared tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Lemma and stop-word tables.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Tokenize one text.
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        self.tokenizer.tokenize(text)
    }

    /// Tokenize every document text.
    pub fn tokenize_all<S: AsRef<str>>(&self, documents: &[S]) -> Vec<TokenSequence> {
        documents
            .iter()
            .map(|d| self.tokenizer.tokenize(d.as_ref()))
            .collect()
    }

    /// Tokenization visualizer: tokens with their state plus the surviving vocabulary.
    pub fn normalize(&self, text: &str, options: NormalizeOptions) -> NormalizationReport {
        let tokens = self.normalizer.normalize(&self.tokenize(text), options);
        let mut vocabulary = Vocabulary::new();
        vocabulary.extend(&crate::types::NormalizedToken::surviving(&tokens));
        log::debug!(
            "normalized {} tokens, {} distinct survivors",
            tokens.len(),
            vocabulary.len()
        );
        NormalizationReport {
            tokens,
            vocabulary: vocabulary.to_vec(),
        }
    }

    /// Tokenize the inputs and build the vocabulary for `scope`.
    pub fn vocabulary<S: AsRef<str>>(
        &self,
        query: &str,
        documents: &[S],
        scope: VocabularyScope,
    ) -> Vocabulary {
        Vocabulary::build(&self.tokenize(query), &self.tokenize_all(documents), scope)
    }

    /// Frequency statistics of the documents over the scoped vocabulary.
    pub fn frequency_table<S: AsRef<str>>(
        &self,
        query: &str,
        documents: &[S],
        scope: VocabularyScope,
    ) -> FrequencyTable {
        let docs = self.tokenize_all(documents);
        let vocabulary = Vocabulary::build(&self.tokenize(query), &docs, scope);
        FrequencyTable::compute(&vocabulary, &docs)
    }
}
