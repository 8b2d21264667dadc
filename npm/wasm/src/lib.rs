//! WebAssembly bindings for lexiviz.
//!
//! Exposes the scoring core to the browser visualizers. Every function is a
//! pure recomputation from its arguments; arrays and records cross the
//! boundary as plain JavaScript values.
//!
//! ```js
//! import { tokenize, scoreBm25 } from '@lexiviz/wasm';
//! const scores = scoreBm25("the quick fox", ["a quick brown fox jumps"], 1.5, 0.75);
//! console.log(scores[0].total, scores[0].per_term);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use lexiviz::{
    Bm25Params, FrequencyTable, LexError, NormalizedToken, Normalizer, ScoringEngine, Vocabulary,
    VocabularyScope,
};

/// Serializable bag-of-words row.
#[derive(Serialize)]
struct BowView {
    dot: f64,
    cosine: f64,
}

/// Serializable TF-IDF row: query vector first, then the document vector.
#[derive(Serialize)]
struct TfIdfView {
    vectors: [Vec<f64>; 2],
    dot: f64,
    cosine: f64,
}

/// Serializable stop-word filter entry.
#[derive(Serialize)]
struct TokenView {
    text: String,
    removed: bool,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn lex_err(e: LexError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Split text into lowercase tokens.
#[wasm_bindgen]
pub fn tokenize(text: &str) -> Result<JsValue, JsValue> {
    to_js(&ScoringEngine::new().tokenize(text))
}

/// Map known surface forms to their lemma.
#[wasm_bindgen]
pub fn lemmatize(tokens: JsValue) -> Result<JsValue, JsValue> {
    let tokens: Vec<String> = from_js(tokens)?;
    to_js(&Normalizer::new().lemmatize(&tokens))
}

/// Tag stop words as removed, keeping every position.
#[wasm_bindgen(js_name = filterStopWords)]
pub fn filter_stop_words(tokens: JsValue) -> Result<JsValue, JsValue> {
    let tokens: Vec<String> = from_js(tokens)?;
    let tagged: Vec<TokenView> = Normalizer::new()
        .filter_stop_words(&tokens)
        .into_iter()
        .map(|t: NormalizedToken| TokenView {
            removed: t.is_removed(),
            text: t.text,
        })
        .collect();
    to_js(&tagged)
}

/// Build a vocabulary. `sequences[0]` is the query; `scope` is
/// `"query-only"` or `"union"`.
#[wasm_bindgen(js_name = buildVocabulary)]
pub fn build_vocabulary(sequences: JsValue, scope: JsValue) -> Result<JsValue, JsValue> {
    let sequences: Vec<Vec<String>> = from_js(sequences)?;
    let scope: VocabularyScope = from_js(scope)?;
    to_js(&Vocabulary::from_sequences(&sequences, scope).to_vec())
}

/// Term counts, document frequencies and lengths of tokenized documents.
#[wasm_bindgen(js_name = computeFrequencyTable)]
pub fn compute_frequency_table(vocabulary: JsValue, documents: JsValue) -> Result<JsValue, JsValue> {
    let terms: Vec<String> = from_js(vocabulary)?;
    let documents: Vec<Vec<String>> = from_js(documents)?;
    let mut vocabulary = Vocabulary::new();
    vocabulary.extend(&terms);
    to_js(&FrequencyTable::compute(&vocabulary, &documents).summary())
}

#[wasm_bindgen(js_name = scoreBagOfWords)]
pub fn score_bag_of_words(query: &str, documents: JsValue) -> Result<JsValue, JsValue> {
    let documents: Vec<String> = from_js(documents)?;
    let report = ScoringEngine::new().bag_of_words(query, &documents);
    let rows: Vec<BowView> = report
        .documents
        .iter()
        .map(|d| BowView {
            dot: d.dot,
            cosine: d.cosine,
        })
        .collect();
    to_js(&rows)
}

#[wasm_bindgen(js_name = scoreTfIdf)]
pub fn score_tfidf(query: &str, documents: JsValue) -> Result<JsValue, JsValue> {
    let documents: Vec<String> = from_js(documents)?;
    let report = ScoringEngine::new().tfidf(query, &documents);
    let rows: Vec<TfIdfView> = report
        .documents
        .into_iter()
        .map(|d| TfIdfView {
            vectors: [report.query_vector.clone(), d.vector],
            dot: d.dot,
            cosine: d.cosine,
        })
        .collect();
    to_js(&rows)
}

/// BM25 totals and per-term contributions. Throws on non-finite `k1`/`b`.
#[wasm_bindgen(js_name = scoreBm25)]
pub fn score_bm25(query: &str, documents: JsValue, k1: f64, b: f64) -> Result<JsValue, JsValue> {
    let documents: Vec<String> = from_js(documents)?;
    let params = Bm25Params::new(k1, b).map_err(lex_err)?;
    let report = ScoringEngine::new()
        .bm25(query, &documents, params)
        .map_err(lex_err)?;
    to_js(&report.documents)
}
