//! Terminal scan errors

use crate::config::constants::compile_time::scan::*;
use crate::logging::codes::{self, Code};
use crate::tokens::TokenSequence;
use crate::utils::Position;
use thiserror::Error;

/// Errors that end a scan. Every variant is terminal; the scanner does
/// not resynchronize after a failure.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unrecognized character '{character}' at {position}")]
    UnrecognizedCharacter {
        character: char,
        position: Position,
        /// Tokens produced before the failure, in input order
        partial: TokenSequence,
    },

    #[error("invalid number '{text}' at {position}")]
    InvalidNumber { text: String, position: Position },

    #[error("line length {length} exceeds maximum of {MAX_LINE_LENGTH} characters")]
    LineTooLong { length: usize },

    #[error("token count {count} exceeds maximum of {MAX_TOKEN_COUNT}")]
    TooManyTokens { count: usize },
}

impl ScanError {
    /// Get the classified error code for this error
    pub fn error_code(&self) -> Code {
        match self {
            ScanError::UnrecognizedCharacter { .. } => codes::scan::UNRECOGNIZED_CHARACTER,
            ScanError::InvalidNumber { .. } => codes::scan::INVALID_NUMBER,
            ScanError::LineTooLong { .. } => codes::scan::LINE_TOO_LONG,
            ScanError::TooManyTokens { .. } => codes::scan::TOO_MANY_TOKENS,
        }
    }

    /// Position where the error occurred, if it has one
    pub fn position(&self) -> Option<Position> {
        match self {
            ScanError::UnrecognizedCharacter { position, .. }
            | ScanError::InvalidNumber { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Tokens recognized before the failure, if any were kept
    pub fn partial_tokens(&self) -> Option<&TokenSequence> {
        match self {
            ScanError::UnrecognizedCharacter { partial, .. } => Some(partial),
            _ => None,
        }
    }
}
