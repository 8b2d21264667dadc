//! Shared tokenizer for every scorer and the tokenization visualizer.

use crate::types::TokenSequence;

/// Returns true for characters that belong inside a token.
///
/// Letters and numbers are taken from `char::is_alphanumeric`, so combining
/// marks carrying the Unicode `Alphabetic` property (Devanagari vowel signs,
/// anusvara and similar) stay inside their word: `"हिंदी"` is one token.
/// Both the ASCII apostrophe U+0027 and the typographic apostrophe U+2019
/// are kept, so `don't` and `don’t` each stay whole. The two spellings are
/// not unified.
#[inline]
fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '\u{2019}'
}

/// Deterministic tokenizer: lowercase, then split on runs of anything that
/// is not a letter, a number or an apostrophe.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a tokenizer. It holds no state.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into lowercase terms. Empty input yields no tokens.
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        text.to_lowercase()
            .split(|c: char| !is_token_char(c))
            .filter(|token| !token.is_empty())
            .map(|s| s.to_string())
            .collect()
    }
}
