//! Token representations.

use serde::{Deserialize, Serialize};

/// Ordered tokens of one input text (query or document).
pub type TokenSequence = Vec<String>;

/// Whether a token still takes part in vocabulary and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenState {
    Active,
    /// Soft-deleted stop word. Keeps its slot so positions stay stable.
    Removed,
}

/// A token as seen by the tokenization visualizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedToken {
    /// Current text (possibly lemmatized).
    pub text: String,
    pub state: TokenState,
}

impl NormalizedToken {
    /// Wrap a freshly tokenized term as an active token.
    pub fn active(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: TokenState::Active,
        }
    }

    /// True once the stop-word pass has soft-deleted this token.
    pub fn is_removed(&self) -> bool {
        self.state == TokenState::Removed
    }

    /// Wrap a whole token sequence.
    pub fn from_sequence(tokens: &[String]) -> Vec<Self> {
        tokens.iter().map(NormalizedToken::active).collect()
    }

    /// Texts of the active tokens, in order. This is the content view used
    /// for vocabulary and statistics.
    pub fn surviving(tokens: &[NormalizedToken]) -> TokenSequence {
        tokens
            .iter()
            .filter(|t| !t.is_removed())
            .map(|t| t.text.clone())
            .collect()
    }
}
