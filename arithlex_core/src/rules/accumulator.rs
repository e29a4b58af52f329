//! Transient character accumulator for in-progress tokens

use crate::tokens::TokenKind;
use crate::utils::{Position, Span};

/// Holds the characters of the token currently being built.
///
/// The accumulator is reset on every drain; it carries no state between
/// tokens other than the empty buffer.
#[derive(Debug, Default)]
pub struct Accumulator {
    kind: Option<TokenKind>,
    text: String,
    seen_decimal_point: bool,
    start: Position,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character, recording the start position on the first one
    pub fn accept(&mut self, kind: TokenKind, ch: char, pos: Position) {
        if self.text.is_empty() {
            self.start = pos;
        }
        self.kind = Some(kind);
        self.text.push(ch);
    }

    /// Record that the pending number already contains a decimal point
    pub fn mark_decimal_point(&mut self) {
        self.seen_decimal_point = true;
    }

    pub fn seen_decimal_point(&self) -> bool {
        self.seen_decimal_point
    }

    pub fn kind(&self) -> Option<TokenKind> {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Take the accumulated text and reset for the next token.
    ///
    /// The returned span covers the first accepted character up to `end`.
    pub fn drain(&mut self, end: Position) -> (String, Span) {
        let text = std::mem::take(&mut self.text);
        let span = Span::new(self.start, end);
        self.kind = None;
        self.seen_decimal_point = false;
        (text, span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_records_start() {
        let mut acc = Accumulator::new();
        let p1 = Position::new(2, 3);
        let p2 = p1.advance('1');

        acc.accept(TokenKind::Number, '1', p1);
        acc.accept(TokenKind::Number, '2', p2);

        assert_eq!(acc.text(), "12");
        assert_eq!(acc.kind(), Some(TokenKind::Number));

        let (text, span) = acc.drain(p2.advance('2'));
        assert_eq!(text, "12");
        assert_eq!(span.start, p1);
        assert_eq!(span.len(), 2);
    }

    #[test]
    fn test_drain_resets_state() {
        let mut acc = Accumulator::new();
        acc.accept(TokenKind::Number, '3', Position::start());
        acc.accept(TokenKind::Number, '.', Position::start().advance('3'));
        acc.mark_decimal_point();

        let _ = acc.drain(Position::new(2, 3));

        assert!(acc.is_empty());
        assert!(acc.kind().is_none());
        assert!(!acc.seen_decimal_point());
    }
}
