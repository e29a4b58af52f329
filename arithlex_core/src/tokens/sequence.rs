//! Append-only token sequence produced by a scan

use super::token::{Token, TokenKind};
use crate::utils::Spanned;
use serde::{Deserialize, Serialize};

/// A token together with its source span
pub type SpannedToken = Spanned<Token>;

/// Ordered collection of tokens from a single line.
///
/// Tokens are only ever appended in input order; the sequence never
/// reorders or removes entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenSequence {
    tokens: Vec<SpannedToken>,
}

impl TokenSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append a token to the end of the sequence
    pub fn push(&mut self, token: SpannedToken) {
        self.tokens.push(token);
    }

    /// Number of tokens in the sequence
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens in input order
    pub fn iter(&self) -> std::slice::Iter<'_, SpannedToken> {
        self.tokens.iter()
    }

    /// View the tokens as a slice
    pub fn as_slice(&self) -> &[SpannedToken] {
        &self.tokens
    }

    /// Get the most recently appended token
    pub fn last(&self) -> Option<&SpannedToken> {
        self.tokens.last()
    }

    /// Count tokens of a specific kind
    pub fn count_kind(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.value.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a SpannedToken;
    type IntoIter = std::slice::Iter<'a, SpannedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Span;

    #[test]
    fn test_append_preserves_order() {
        let mut seq = TokenSequence::new();
        seq.push(Spanned::new(
            Token::number("1".to_string(), 1.0),
            Span::dummy(),
        ));
        seq.push(Spanned::new(
            Token::symbol(TokenKind::Add, "+".to_string()),
            Span::dummy(),
        ));
        seq.push(Spanned::new(
            Token::number("2".to_string(), 2.0),
            Span::dummy(),
        ));

        assert_eq!(seq.len(), 3);
        let kinds: Vec<TokenKind> = seq.iter().map(|t| t.value.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Add, TokenKind::Number]);
    }

    #[test]
    fn test_count_kind() {
        let mut seq = TokenSequence::new();
        seq.push(Spanned::new(
            Token::number("1".to_string(), 1.0),
            Span::dummy(),
        ));
        seq.push(Spanned::new(
            Token::number("2".to_string(), 2.0),
            Span::dummy(),
        ));

        assert_eq!(seq.count_kind(TokenKind::Number), 2);
        assert_eq!(seq.count_kind(TokenKind::Div), 0);
    }

    #[test]
    fn test_empty_sequence() {
        let seq = TokenSequence::new();
        assert!(seq.is_empty());
        assert!(seq.last().is_none());
    }
}
