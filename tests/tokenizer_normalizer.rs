//! Tokenizer and lexical normalizer tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lexiviz::{NormalizeOptions, NormalizedToken, Normalizer, ScoringEngine, TokenState, Tokenizer};

// ==================== Helpers ====================

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Random text mixing letters, digits, apostrophes, punctuation and whitespace.
fn random_text(rng: &mut StdRng) -> String {
    const ALPHABET: &[char] = &[
        'a', 'b', 'c', 'Q', 'Z', 'é', 'Ö', '7', '0', '\'', ' ', ' ', '\t', '\n', ',', '.', '!',
        '-', '?', '"', '(', ')',
    ];
    let len = rng.gen_range(0..60);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

// ==================== Tokenizer Tests ====================

#[test]
fn test_tokenizer_basic() {
    let tokenizer = Tokenizer::new();
    assert_eq!(tokenizer.tokenize("Hello World"), vec!["hello", "world"]);
}

#[test]
fn test_tokenizer_keeps_stop_words() {
    // Stop-word handling belongs to the normalizer, not the tokenizer.
    let tokenizer = Tokenizer::new();
    assert_eq!(
        tokenizer.tokenize("the quick brown fox"),
        vec!["the", "quick", "brown", "fox"]
    );
}

#[test]
fn test_tokenizer_keeps_apostrophes() {
    let tokenizer = Tokenizer::new();
    assert_eq!(
        tokenizer.tokenize("Bob's dog didn't bark!"),
        vec!["bob's", "dog", "didn't", "bark"]
    );
}

#[test]
fn test_tokenizer_punctuation_and_whitespace_split() {
    let tokenizer = Tokenizer::new();
    assert_eq!(
        tokenizer.tokenize("  one,two;;three--four\n\tfive...  "),
        vec!["one", "two", "three", "four", "five"]
    );
}

#[test]
fn test_tokenizer_numbers_and_unicode() {
    let tokenizer = Tokenizer::new();
    assert_eq!(
        tokenizer.tokenize("Élève R2D2 naïve 42"),
        vec!["élève", "r2d2", "naïve", "42"]
    );
}

#[test]
fn test_tokenizer_empty_string() {
    let tokenizer = Tokenizer::new();
    assert!(tokenizer.tokenize("").is_empty());
    assert!(tokenizer.tokenize(" ,.;! ").is_empty());
}

#[test]
fn test_tokenizer_keeps_combining_marks_in_word() {
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize("हिंदी भाषा");
    assert_eq!(tokens, vec!["हिंदी", "भाषा"]);
    assert!(tokens[0].contains('\u{0902}'));
}

#[test]
fn test_tokenizer_typographic_apostrophe() {
    let tokenizer = Tokenizer::new();
    assert_eq!(
        tokenizer.tokenize("Don\u{2019}t stop, don't"),
        vec!["don\u{2019}t", "stop", "don't"]
    );
    // Other quotation marks still split.
    assert_eq!(tokenizer.tokenize("\u{2018}fox\u{201C}dog"), vec!["fox", "dog"]);
}

#[test]
fn test_tokenizer_idempotent_and_never_empty_tokens() {
    let tokenizer = Tokenizer::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let text = random_text(&mut rng);
        let tokens = tokenizer.tokenize(&text);
        for tok in &tokens {
            assert!(!tok.is_empty(), "empty token from {:?}", text);
        }
        let rejoined = tokens.join(" ");
        assert_eq!(
            tokenizer.tokenize(&rejoined),
            tokens,
            "tokenize must be idempotent on rejoined output of {:?}",
            text
        );
    }
}

// ==================== Lemmatizer Tests ====================

#[test]
fn test_lemmatize_known_forms() {
    let normalizer = Normalizer::new();
    let tokens = strings(&["ran", "running", "mice", "went", "foxes", "quickly"]);
    assert_eq!(
        normalizer.lemmatize(&tokens),
        vec!["run", "run", "mouse", "go", "fox", "quickly"]
    );
}

#[test]
fn test_lemmatize_unknown_words_untouched() {
    let normalizer = Normalizer::new();
    let tokens = strings(&["runner", "foxy", "bob's"]);
    assert_eq!(normalizer.lemmatize(&tokens), tokens);
    assert_eq!(normalizer.lemma_of("runner"), None);
}

#[test]
fn test_lemmatize_idempotent() {
    let normalizer = Normalizer::new();
    let tokens = strings(&[
        "ran", "is", "was", "children", "better", "jumped", "sleeping", "eaten", "cat",
    ]);
    let once = normalizer.lemmatize(&tokens);
    let twice = normalizer.lemmatize(&once);
    assert_eq!(once, twice);
}

// ==================== Stop Word Tests ====================

#[test]
fn test_filter_stop_words_soft_deletes() {
    let normalizer = Normalizer::new();
    let tokens = strings(&["the", "quick", "fox", "and", "the", "dog"]);
    let tagged = normalizer.filter_stop_words(&tokens);

    // Positions and texts are preserved.
    assert_eq!(tagged.len(), tokens.len());
    for (t, original) in tagged.iter().zip(&tokens) {
        assert_eq!(&t.text, original);
    }

    let removed: Vec<bool> = tagged.iter().map(|t| t.is_removed()).collect();
    assert_eq!(removed, vec![true, false, false, true, true, false]);
    assert_eq!(
        NormalizedToken::surviving(&tagged),
        vec!["quick", "fox", "dog"]
    );
}

#[test]
fn test_filter_stop_words_idempotent() {
    let normalizer = Normalizer::new();
    let mut tagged = normalizer.filter_stop_words(&strings(&["a", "cat", "is", "here"]));
    let before = tagged.clone();
    normalizer.remove_stop_words_in_place(&mut tagged);
    assert_eq!(tagged, before);
}

#[test]
fn test_stop_words_match_lemmatized_text() {
    let normalizer = Normalizer::new();
    // "was" lemmatizes to "be", which is itself a stop word.
    let mut tagged = NormalizedToken::from_sequence(&strings(&["was", "running"]));
    normalizer.lemmatize_in_place(&mut tagged);
    normalizer.remove_stop_words_in_place(&mut tagged);
    assert_eq!(tagged[0].text, "be");
    assert_eq!(tagged[0].state, TokenState::Removed);
    assert_eq!(tagged[1].text, "run");
    assert_eq!(tagged[1].state, TokenState::Active);
}

#[test]
fn test_lemmatize_and_stop_words_commute() {
    let normalizer = Normalizer::new();
    let tokenizer = Tokenizer::new();
    let text = "The children were running and the dogs ran after mice; it was the best day";
    let tokens = tokenizer.tokenize(text);

    let mut lemma_first = NormalizedToken::from_sequence(&tokens);
    normalizer.lemmatize_in_place(&mut lemma_first);
    normalizer.remove_stop_words_in_place(&mut lemma_first);

    let mut stop_first = NormalizedToken::from_sequence(&tokens);
    normalizer.remove_stop_words_in_place(&mut stop_first);
    normalizer.lemmatize_in_place(&mut stop_first);

    assert_eq!(lemma_first, stop_first);
    assert_eq!(
        NormalizedToken::surviving(&lemma_first),
        vec!["child", "run", "dog", "run", "after", "mouse", "good", "day"]
    );
}

#[test]
fn test_lemma_table_consistent_with_stop_words() {
    let normalizer = Normalizer::new();
    // Every surface form must share its lemma's stop-word status, otherwise
    // the two passes would not commute.
    for word in [
        "run", "runs", "ran", "jumped", "slept", "ate", "went", "gone", "am", "is", "are",
        "was", "were", "been", "being", "has", "had", "having", "dogs", "foxes", "mice",
        "children", "better", "best",
    ] {
        let lemma = normalizer.lemma_of(word).expect("known surface form");
        assert_eq!(
            normalizer.is_stop_word(word),
            normalizer.is_stop_word(lemma),
            "stop-word status of {word:?} differs from its lemma {lemma:?}"
        );
        assert_eq!(normalizer.lemma_of(lemma), Some(lemma), "lemma must map to itself");
    }
}

// ==================== Normalization Report Tests ====================

#[test]
fn test_normalize_report_options() {
    let engine = ScoringEngine::new();
    let text = "The dogs ran and the dog runs";

    let full = engine.normalize(text, NormalizeOptions::default());
    assert_eq!(full.tokens.len(), 7);
    assert_eq!(full.vocabulary, vec!["dog", "run"]);

    let lemma_only = engine.normalize(
        text,
        NormalizeOptions {
            lemmatize: true,
            remove_stop_words: false,
        },
    );
    assert_eq!(lemma_only.vocabulary, vec!["the", "dog", "run", "and"]);

    let raw = engine.normalize(
        text,
        NormalizeOptions {
            lemmatize: false,
            remove_stop_words: false,
        },
    );
    assert_eq!(raw.vocabulary, vec!["the", "dogs", "ran", "and", "dog", "runs"]);
    assert!(raw.tokens.iter().all(|t| t.state == TokenState::Active));
}

#[test]
fn test_normalize_empty_text() {
    let engine = ScoringEngine::new();
    let report = engine.normalize("", NormalizeOptions::default());
    assert!(report.tokens.is_empty());
    assert!(report.vocabulary.is_empty());
}
