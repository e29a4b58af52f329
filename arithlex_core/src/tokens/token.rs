//! Token types produced by the line scanner

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token categories for arithmetic expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Number,
    Add,
    Sub,
    Mul,
    Div,
    ParenOpen,
    ParenClose,
    Bad,
}

impl TokenKind {
    /// Short display label for this kind
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Number => "Num",
            TokenKind::Add => "Add",
            TokenKind::Sub => "Sub",
            TokenKind::Mul => "Mul",
            TokenKind::Div => "Div",
            TokenKind::ParenOpen => "ParenOpen",
            TokenKind::ParenClose => "ParenClose",
            TokenKind::Bad => "Bad",
        }
    }

    /// Check if this kind is an arithmetic operator
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div
        )
    }

    /// Check if this kind is a parenthesis
    pub fn is_paren(&self) -> bool {
        matches!(self, TokenKind::ParenOpen | TokenKind::ParenClose)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single token with its source text and, for numbers, its parsed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub value: Option<f64>,
}

impl Token {
    /// Create a number token with its parsed value
    pub fn number(text: String, value: f64) -> Self {
        Self {
            kind: TokenKind::Number,
            text,
            value: Some(value),
        }
    }

    /// Create a non-number token
    pub fn symbol(kind: TokenKind, text: String) -> Self {
        Self {
            kind,
            text,
            value: None,
        }
    }

    /// Short display label for this token's kind
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Check if this token is a number
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
