//! Configuration loading and scoring session tests.

use std::io::Write;

use lexiviz::{
    Bm25IdfVariant, Bm25Params, LexError, NormalizeOptions, ScoringConfig, ScoringSession,
    DEFAULT_B, DEFAULT_K1,
};

// ==================== Config Tests ====================

#[test]
fn test_config_defaults() {
    let config = ScoringConfig::default();
    assert_eq!(config.bm25.k1, DEFAULT_K1);
    assert_eq!(config.bm25.b, DEFAULT_B);
    assert_eq!(config.idf_variant, Bm25IdfVariant::Smoothed);
    assert!(config.lemmatize);
    assert!(config.remove_stop_words);
}

#[test]
fn test_config_from_toml_partial() {
    let config = ScoringConfig::from_toml_str(
        r#"
        idf_variant = "robertson"

        [bm25]
        k1 = 2.0
        "#,
    )
    .unwrap();
    assert_eq!(config.idf_variant, Bm25IdfVariant::Robertson);
    assert_eq!(config.bm25.k1, 2.0);
    assert_eq!(config.bm25.b, DEFAULT_B, "missing key falls back to default");
    assert!(config.lemmatize);
}

#[test]
fn test_config_rejects_malformed_toml() {
    let err = ScoringConfig::from_toml_str("[bm25]\nk1 = \"fast\"").unwrap_err();
    assert!(matches!(err, LexError::Config(_)), "got {err:?}");
}

#[test]
fn test_config_rejects_nan_parameter() {
    let err = ScoringConfig::from_toml_str("[bm25]\nk1 = nan").unwrap_err();
    assert!(matches!(err, LexError::InvalidParameter { name: "k1", .. }));
}

#[test]
fn test_config_round_trip_through_file() {
    let config = ScoringConfig {
        bm25: Bm25Params::new(0.9, 0.4).unwrap(),
        idf_variant: Bm25IdfVariant::Robertson,
        lemmatize: false,
        remove_stop_words: true,
    };
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(config.to_toml_string().unwrap().as_bytes())
        .unwrap();

    let loaded = ScoringConfig::load(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScoringConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, LexError::Io(_)));
}

// ==================== Session Tests ====================

fn quick_fox_session() -> ScoringSession {
    ScoringSession::with_inputs(
        ScoringConfig::default(),
        "the quick fox",
        vec![
            "a quick brown fox jumps".to_string(),
            "lazy dogs sleep all day".to_string(),
        ],
    )
    .unwrap()
}

#[test]
fn test_session_initial_snapshot() {
    let session = quick_fox_session();
    let snapshot = session.snapshot();

    assert_eq!(snapshot.normalization.vocabulary, vec!["quick", "fox"]);
    assert_eq!(snapshot.bm25.vocabulary, vec!["the", "quick", "fox"]);
    assert_eq!(snapshot.bag_of_words.documents.len(), 2);
    assert_eq!(snapshot.tfidf.documents.len(), 2);
    assert!(snapshot.bm25.documents[0].total > snapshot.bm25.documents[1].total);
}

#[test]
fn test_session_empty() {
    let session = ScoringSession::new(ScoringConfig::default()).unwrap();
    assert!(session.snapshot().bm25.documents.is_empty());
    assert!(session.snapshot().normalization.tokens.is_empty());
}

#[test]
fn test_session_edits_recompute_everything() {
    let mut session = quick_fox_session();

    session.set_document(1, "the quick quick fox").unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.bm25.documents[1].matched_terms, vec!["the", "quick", "fox"]);
    assert!(snapshot.bag_of_words.documents[1].dot > 0.0);

    let idx = session.push_document("fox").unwrap();
    assert_eq!(idx, 2);
    assert_eq!(session.snapshot().tfidf.documents.len(), 3);

    let removed = session.remove_document(0).unwrap();
    assert_eq!(removed, "a quick brown fox jumps");
    assert_eq!(session.documents().len(), 2);
    assert_eq!(session.snapshot().bm25.documents.len(), 2);

    session.set_query("").unwrap();
    for doc in &session.snapshot().bm25.documents {
        assert_eq!(doc.total, 0.0);
    }
    for doc in &session.snapshot().bag_of_words.documents {
        assert_eq!(doc.cosine, 0.0);
    }
}

#[test]
fn test_session_missing_document() {
    let mut session = quick_fox_session();
    assert!(matches!(
        session.set_document(5, "x"),
        Err(LexError::DocumentNotFound(5))
    ));
    assert!(matches!(
        session.remove_document(2),
        Err(LexError::DocumentNotFound(2))
    ));
    assert_eq!(session.documents().len(), 2);
}

#[test]
fn test_session_invalid_params_keep_previous_snapshot() {
    let mut session = quick_fox_session();
    let before = session.snapshot().bm25.documents[0].total;

    assert!(session.set_bm25_params_str("abc", "0.75").is_err());
    assert!(session
        .set_bm25_params(Bm25Params {
            k1: f64::INFINITY,
            b: 0.75
        })
        .is_err());

    assert_eq!(session.snapshot().bm25.documents[0].total, before);
    assert_eq!(session.config().bm25, Bm25Params::default());
}

#[test]
fn test_session_param_and_mode_changes() {
    let mut session = quick_fox_session();

    session.set_bm25_params_str("0", "0.3").unwrap();
    assert_eq!(session.snapshot().bm25.params.k1, 0.0);

    session.set_idf_variant(Bm25IdfVariant::Robertson).unwrap();
    assert_eq!(session.snapshot().bm25.idf_variant, Bm25IdfVariant::Robertson);

    session
        .set_normalize_options(NormalizeOptions {
            lemmatize: false,
            remove_stop_words: false,
        })
        .unwrap();
    assert_eq!(
        session.snapshot().normalization.vocabulary,
        vec!["the", "quick", "fox"]
    );
}

#[test]
fn test_session_snapshot_serializes() {
    let session = quick_fox_session();
    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert!(json["bm25"]["documents"][0]["per_term"]["quick"].is_number());
    assert_eq!(json["normalization"]["tokens"][0]["state"], "removed");
}

// ==================== Error Tests ====================

fn render<T: serde::Serialize>(value: &T) -> lexiviz::LexResult<String> {
    Ok(serde_json::to_string(value)?)
}

#[test]
fn test_json_failure_propagates_as_lex_error() {
    let session = quick_fox_session();
    assert!(render(session.snapshot()).is_ok());

    // Non-string map keys cannot be written as JSON object keys.
    let bad = std::collections::BTreeMap::from([(vec![1u8, 2], 1u32)]);
    let err = render(&bad).unwrap_err();
    assert!(matches!(err, LexError::Json(_)), "got {err:?}");
    assert!(err.to_string().starts_with("JSON error:"));
}
