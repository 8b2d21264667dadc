//! Scoring configuration: BM25 parameters, IDF mode and normalizer switches.
//!
//! All values can be supplied directly by the caller or loaded from TOML:
//!
//! ```toml
//! idf_variant = "smoothed"
//! lemmatize = true
//! remove_stop_words = true
//!
//! [bm25]
//! k1 = 1.2
//! b = 0.75
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::normalizer::NormalizeOptions;
use crate::types::{LexError, LexResult};

/// Default term-frequency saturation.
pub const DEFAULT_K1: f64 = 1.5;
/// Default length-normalization strength.
pub const DEFAULT_B: f64 = 0.75;

/// Offset keeping the Robertson IDF denominator away from zero.
const ROBERTSON_EPSILON: f64 = 1e-9;

/// BM25 free parameters.
///
/// Any finite value is accepted, including negative `k1` or `b` outside
/// `[0, 1]`; those simply yield unusual scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
}

impl Bm25Params {
    /// Validated constructor. Rejects NaN and infinities.
    pub fn new(k1: f64, b: f64) -> LexResult<Self> {
        let params = Self { k1, b };
        params.validate()?;
        Ok(params)
    }

    /// Parse raw slider/text input.
    pub fn parse(k1: &str, b: &str) -> LexResult<Self> {
        Self::new(parse_param("k1", k1)?, parse_param("b", b)?)
    }

    /// Reject NaN and infinite values.
    pub fn validate(&self) -> LexResult<()> {
        check_finite("k1", self.k1)?;
        check_finite("b", self.b)
    }
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
        }
    }
}

fn parse_param(name: &'static str, raw: &str) -> LexResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| LexError::InvalidParameter {
            name,
            value: raw.to_string(),
        })
}

fn check_finite(name: &'static str, value: f64) -> LexResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LexError::InvalidParameter {
            name,
            value: value.to_string(),
        })
    }
}

/// IDF formula used by the BM25 scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bm25IdfVariant {
    /// `ln((N + 0.5) / (df + 0.5))`, non-negative for `df <= N`.
    #[default]
    Smoothed,
    /// `ln((N - df + 0.5) / (df + 0.5 + eps))`. Negative for terms found in
    /// more than half of the documents.
    Robertson,
}

impl Bm25IdfVariant {
    /// IDF of a term found in `df` of `n_docs` documents.
    pub fn idf(self, n_docs: usize, df: usize) -> f64 {
        let n = n_docs as f64;
        let df = df as f64;
        match self {
            Bm25IdfVariant::Smoothed => ((n + 0.5) / (df + 0.5)).ln(),
            Bm25IdfVariant::Robertson => ((n - df + 0.5) / (df + 0.5 + ROBERTSON_EPSILON)).ln(),
        }
    }
}

/// Complete scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub idf_variant: Bm25IdfVariant,
    /// Tokenization visualizer only.
    pub lemmatize: bool,
    /// Tokenization visualizer only.
    pub remove_stop_words: bool,
    pub bm25: Bm25Params,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            idf_variant: Bm25IdfVariant::default(),
            lemmatize: true,
            remove_stop_words: true,
            bm25: Bm25Params::default(),
        }
    }
}

impl ScoringConfig {
    /// Parse and validate TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> LexResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| LexError::Config(e.to_string()))?;
        config.bm25.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> LexResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded scoring config from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> LexResult<String> {
        toml::to_string(self).map_err(|e| LexError::Config(e.to_string()))
    }

    /// Normalizer switches for the tokenization visualizer.
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            lemmatize: self.lemmatize,
            remove_stop_words: self.remove_stop_words,
        }
    }
}
