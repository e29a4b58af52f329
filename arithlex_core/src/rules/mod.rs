//! Priority-ordered rule table driving the scanner
//!
//! Each rule category answers three questions for the dispatch loop:
//! whether it claims a character (`guard`), how the character joins the
//! pending token (`select`), and whether the token is finished given one
//! character of lookahead (`complete`). The table order is the match
//! priority; the first category whose guard accepts wins.

pub mod accumulator;

pub use accumulator::Accumulator;

use crate::tokens::{SpannedToken, Token, TokenKind};
use crate::utils::{Position, Spanned};

/// Result of asking a category whether the pending token is finished
#[derive(Debug)]
pub enum Outcome {
    /// Token still in progress, keep accumulating
    Pending,
    /// Token finished, append it to the sequence
    Emit(SpannedToken),
    /// Accumulated text does not form a valid token
    Invalid {
        text: String,
        span: crate::utils::Span,
    },
    /// Unrecognized character, scanning cannot continue
    Fatal,
}

/// Rule categories in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Number,
    Add,
    Sub,
    Mul,
    Div,
    ParenOpen,
    ParenClose,
    Whitespace,
    Bad,
}

/// The rule table. Bad is last so it only claims characters no other
/// category recognizes.
pub const RULE_TABLE: [Category; 9] = [
    Category::Number,
    Category::Add,
    Category::Sub,
    Category::Mul,
    Category::Div,
    Category::ParenOpen,
    Category::ParenClose,
    Category::Whitespace,
    Category::Bad,
];

impl Category {
    /// The token kind this category produces
    pub fn token_kind(&self) -> TokenKind {
        match self {
            Category::Number => TokenKind::Number,
            Category::Add => TokenKind::Add,
            Category::Sub => TokenKind::Sub,
            Category::Mul => TokenKind::Mul,
            Category::Div => TokenKind::Div,
            Category::ParenOpen => TokenKind::ParenOpen,
            Category::ParenClose => TokenKind::ParenClose,
            Category::Whitespace | Category::Bad => TokenKind::Bad,
        }
    }

    /// The single character an operator or paren category matches
    fn own_char(&self) -> Option<char> {
        match self {
            Category::Add => Some('+'),
            Category::Sub => Some('-'),
            Category::Mul => Some('*'),
            Category::Div => Some('/'),
            Category::ParenOpen => Some('('),
            Category::ParenClose => Some(')'),
            _ => None,
        }
    }

    /// Check whether this category claims `ch` given the pending token state
    pub fn guard(&self, ch: char, acc: &Accumulator) -> bool {
        match self {
            Category::Number => {
                ch.is_ascii_digit() || (ch == '.' && !acc.seen_decimal_point())
            }
            Category::Whitespace => ch.is_ascii_whitespace(),
            Category::Bad => true,
            _ => match self.own_char() {
                Some(c) => ch == c,
                None => false,
            },
        }
    }

    /// Fold `ch` into the pending token
    pub fn select(&self, ch: char, pos: Position, acc: &mut Accumulator) {
        match self {
            // Whitespace is discarded, never accumulated
            Category::Whitespace => {}
            Category::Number => {
                acc.accept(TokenKind::Number, ch, pos);
                if ch == '.' {
                    acc.mark_decimal_point();
                }
            }
            // The offending character is recorded even though the scan
            // ends before it could ever be drained
            Category::Bad => acc.accept(TokenKind::Bad, ch, pos),
            _ => acc.accept(self.token_kind(), ch, pos),
        }
    }

    /// Decide whether the pending token is finished, given one character
    /// of lookahead. `end` is the position just past the current character.
    pub fn complete(&self, lookahead: char, end: Position, acc: &mut Accumulator) -> Outcome {
        match self {
            Category::Number => {
                // The guard must be consulted before draining, since the
                // decimal point flag is part of the continuation decision.
                if self.guard(lookahead, acc) {
                    return Outcome::Pending;
                }
                let (text, span) = acc.drain(end);
                match text.parse::<f64>() {
                    Ok(value) => Outcome::Emit(Spanned::new(Token::number(text, value), span)),
                    Err(_) => Outcome::Invalid { text, span },
                }
            }
            Category::Add | Category::Sub | Category::Mul | Category::Div => {
                // A run of the same operator collapses into one token
                if Some(lookahead) == self.own_char() {
                    return Outcome::Pending;
                }
                let (text, span) = acc.drain(end);
                Outcome::Emit(Spanned::new(Token::symbol(self.token_kind(), text), span))
            }
            Category::ParenOpen | Category::ParenClose => {
                let (text, span) = acc.drain(end);
                Outcome::Emit(Spanned::new(Token::symbol(self.token_kind(), text), span))
            }
            Category::Whitespace => Outcome::Pending,
            Category::Bad => Outcome::Fatal,
        }
    }
}

/// Find the first category in the table whose guard accepts `ch`
pub fn dispatch(ch: char, acc: &Accumulator) -> Category {
    for category in RULE_TABLE {
        if category.guard(ch, acc) {
            return category;
        }
    }
    // Unreachable since Bad accepts everything, but keep the loop total
    Category::Bad
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const END: char = '\0';

    #[test]
    fn test_dispatch_priority() {
        let acc = Accumulator::new();
        assert_eq!(dispatch('7', &acc), Category::Number);
        assert_eq!(dispatch('.', &acc), Category::Number);
        assert_eq!(dispatch('+', &acc), Category::Add);
        assert_eq!(dispatch('-', &acc), Category::Sub);
        assert_eq!(dispatch('*', &acc), Category::Mul);
        assert_eq!(dispatch('/', &acc), Category::Div);
        assert_eq!(dispatch('(', &acc), Category::ParenOpen);
        assert_eq!(dispatch(')', &acc), Category::ParenClose);
        assert_eq!(dispatch(' ', &acc), Category::Whitespace);
        assert_eq!(dispatch('#', &acc), Category::Bad);
    }

    #[test]
    fn test_second_dot_rejected_by_number_guard() {
        let mut acc = Accumulator::new();
        acc.accept(TokenKind::Number, '3', Position::start());
        acc.accept(TokenKind::Number, '.', Position::start().advance('3'));
        acc.mark_decimal_point();

        assert!(!Category::Number.guard('.', &acc));
        assert!(Category::Number.guard('4', &acc));
    }

    #[test]
    fn test_number_completes_on_non_number_lookahead() {
        let mut acc = Accumulator::new();
        acc.accept(TokenKind::Number, '1', Position::start());
        acc.accept(TokenKind::Number, '2', Position::start().advance('1'));

        let end = Position::new(2, 3);
        let outcome = Category::Number.complete('+', end, &mut acc);
        assert_matches!(outcome, Outcome::Emit(token) => {
            assert_eq!(token.value.kind, TokenKind::Number);
            assert_eq!(token.value.text, "12");
            assert_eq!(token.value.value, Some(12.0));
            assert_eq!(token.span.len(), 2);
        });
    }

    #[test]
    fn test_number_pending_on_digit_lookahead() {
        let mut acc = Accumulator::new();
        acc.accept(TokenKind::Number, '1', Position::start());

        let outcome = Category::Number.complete('2', Position::new(1, 2), &mut acc);
        assert_matches!(outcome, Outcome::Pending);
        assert_eq!(acc.text(), "1");
    }

    #[test]
    fn test_lone_dot_is_invalid() {
        let mut acc = Accumulator::new();
        acc.accept(TokenKind::Number, '.', Position::start());
        acc.mark_decimal_point();

        let outcome = Category::Number.complete(END, Position::new(1, 2), &mut acc);
        assert_matches!(outcome, Outcome::Invalid { text, .. } => {
            assert_eq!(text, ".");
        });
    }

    #[test]
    fn test_huge_digit_run_keeps_parsed_value() {
        // Enough digits to push the parsed f64 past its finite range;
        // the token still carries whatever the parse produced.
        let mut acc = Accumulator::new();
        let mut pos = Position::start();
        for _ in 0..400 {
            acc.accept(TokenKind::Number, '9', pos);
            pos = pos.advance('9');
        }

        let outcome = Category::Number.complete(END, pos, &mut acc);
        assert_matches!(outcome, Outcome::Emit(token) => {
            assert_eq!(token.value.kind, TokenKind::Number);
            assert_eq!(token.value.value, Some(f64::INFINITY));
        });
    }

    #[test]
    fn test_operator_run_collapses() {
        let mut acc = Accumulator::new();
        acc.accept(TokenKind::Add, '+', Position::start());

        let outcome = Category::Add.complete('+', Position::new(1, 2), &mut acc);
        assert_matches!(outcome, Outcome::Pending);

        acc.accept(TokenKind::Add, '+', Position::new(1, 2));
        let outcome = Category::Add.complete(END, Position::new(2, 3), &mut acc);
        assert_matches!(outcome, Outcome::Emit(token) => {
            assert_eq!(token.value.kind, TokenKind::Add);
            assert_eq!(token.value.text, "++");
        });
    }

    #[test]
    fn test_div_run_collapses() {
        let mut acc = Accumulator::new();
        acc.accept(TokenKind::Div, '/', Position::start());

        let outcome = Category::Div.complete('/', Position::new(1, 2), &mut acc);
        assert_matches!(outcome, Outcome::Pending);
    }

    #[test]
    fn test_paren_completes_immediately() {
        let mut acc = Accumulator::new();
        acc.accept(TokenKind::ParenOpen, '(', Position::start());

        // Even with another paren in the lookahead
        let outcome = Category::ParenOpen.complete('(', Position::new(1, 2), &mut acc);
        assert_matches!(outcome, Outcome::Emit(token) => {
            assert_eq!(token.value.kind, TokenKind::ParenOpen);
            assert_eq!(token.value.text, "(");
        });
    }

    #[test]
    fn test_bad_is_fatal() {
        let mut acc = Accumulator::new();
        let outcome = Category::Bad.complete(END, Position::new(1, 2), &mut acc);
        assert_matches!(outcome, Outcome::Fatal);
    }
}
