//! Line scanner: table-driven tokenizer for arithmetic expressions

pub mod dispatch;
pub mod error;

pub use dispatch::{Scanner, END_OF_INPUT};
pub use error::ScanError;

use crate::config::runtime::ScanPreferences;
use crate::tokens::{TokenKind, TokenSequence};
use serde::{Deserialize, Serialize};

/// Per-scan token metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanMetrics {
    pub total_tokens: usize,
    pub number_tokens: usize,
    pub operator_tokens: usize,
    pub paren_tokens: usize,
    pub whitespace_discarded: usize,
    pub bad_characters: usize,
}

impl ScanMetrics {
    pub fn record_token(&mut self, kind: TokenKind) {
        self.total_tokens += 1;
        match kind {
            TokenKind::Number => self.number_tokens += 1,
            k if k.is_operator() => self.operator_tokens += 1,
            k if k.is_paren() => self.paren_tokens += 1,
            _ => {}
        }
    }

    pub fn record_whitespace(&mut self) {
        self.whitespace_discarded += 1;
    }

    pub fn record_bad_character(&mut self) {
        self.bad_characters += 1;
    }
}

/// Scan a single line with default preferences
pub fn scan_line(line: &str) -> Result<TokenSequence, ScanError> {
    Scanner::new().scan_line(line)
}

/// Create a scanner with default preferences
pub fn create_scanner() -> Scanner {
    Scanner::new()
}

/// Create a scanner with explicit preferences
pub fn create_scanner_with_preferences(preferences: ScanPreferences) -> Scanner {
    Scanner::with_preferences(preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::compile_time::scan::MAX_LINE_LENGTH;
    use crate::config::runtime::ScanPreferences;
    use crate::logging;
    use crate::logging::{codes, LogLevel, LoggingService};
    use crate::tokens::TokenKind;
    use crate::utils::Position;
    use assert_matches::assert_matches;
    use std::sync::Arc;

    fn kinds(seq: &TokenSequence) -> Vec<TokenKind> {
        seq.iter().map(|t| t.value.kind).collect()
    }

    fn test_preferences() -> ScanPreferences {
        ScanPreferences {
            include_position_in_errors: true,
            collect_metrics: true,
            log_token_events: false,
        }
    }

    #[test]
    fn test_simple_expression() {
        let tokens = scan_line("1+2").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Number, TokenKind::Add, TokenKind::Number]
        );
        assert_eq!(tokens.as_slice()[0].value.value, Some(1.0));
        assert_eq!(tokens.as_slice()[2].value.value, Some(2.0));
    }

    #[test]
    fn test_decimal_number() {
        let tokens = scan_line("12.5").unwrap();
        assert_eq!(tokens.len(), 1);
        let token = &tokens.as_slice()[0].value;
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.text, "12.5");
        assert_eq!(token.value, Some(12.5));
    }

    #[test]
    fn test_whitespace_is_discarded() {
        let spaced = scan_line("1 + 2").unwrap();
        let dense = scan_line("1+2").unwrap();
        assert_eq!(kinds(&spaced), kinds(&dense));
        assert_eq!(spaced.len(), 3);
    }

    #[test]
    fn test_parenthesized_expression() {
        let tokens = scan_line("(3*4)").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::ParenOpen,
                TokenKind::Number,
                TokenKind::Mul,
                TokenKind::Number,
                TokenKind::ParenClose,
            ]
        );
    }

    #[test]
    fn test_division_produces_single_token() {
        let tokens = scan_line("5/2").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Number, TokenKind::Div, TokenKind::Number]
        );
        assert_eq!(tokens.count_kind(TokenKind::Div), 1);
    }

    #[test]
    fn test_all_operators() {
        let tokens = scan_line("1+2-3*4/5").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Number,
                TokenKind::Add,
                TokenKind::Number,
                TokenKind::Sub,
                TokenKind::Number,
                TokenKind::Mul,
                TokenKind::Number,
                TokenKind::Div,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_operator_run_collapses_to_one_token() {
        let tokens = scan_line("++").unwrap();
        assert_eq!(tokens.len(), 1);
        let token = &tokens.as_slice()[0].value;
        assert_eq!(token.kind, TokenKind::Add);
        assert_eq!(token.text, "++");

        let tokens = scan_line("//").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.as_slice()[0].value.kind, TokenKind::Div);
    }

    #[test]
    fn test_adjacent_parens_stay_separate() {
        let tokens = scan_line("(())").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::ParenOpen,
                TokenKind::ParenOpen,
                TokenKind::ParenClose,
                TokenKind::ParenClose,
            ]
        );
    }

    #[test]
    fn test_second_decimal_point_starts_new_number() {
        let tokens = scan_line("3.4.5").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.as_slice()[0].value.value, Some(3.4));
        assert_eq!(tokens.as_slice()[0].value.text, "3.4");
        assert_eq!(tokens.as_slice()[1].value.value, Some(0.5));
        assert_eq!(tokens.as_slice()[1].value.text, ".5");
    }

    #[test]
    fn test_leading_decimal_point() {
        let tokens = scan_line(".5").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.as_slice()[0].value.value, Some(0.5));
    }

    #[test]
    fn test_trailing_decimal_point() {
        let tokens = scan_line("12.").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.as_slice()[0].value.value, Some(12.0));
    }

    #[test]
    fn test_lone_decimal_point_is_invalid() {
        let err = scan_line(".").unwrap_err();
        assert_matches!(err, ScanError::InvalidNumber { text, position } => {
            assert_eq!(text, ".");
            assert_eq!(position, Position::start());
        });
    }

    #[test]
    fn test_unrecognized_character_keeps_partial_tokens() {
        let err = scan_line("1#2").unwrap_err();
        assert_matches!(err, ScanError::UnrecognizedCharacter { character, position, partial } => {
            assert_eq!(character, '#');
            assert_eq!(position.column, 2);
            assert_eq!(partial.len(), 1);
            assert_eq!(partial.as_slice()[0].value.value, Some(1.0));
        });
    }

    #[test]
    fn test_unrecognized_character_at_start() {
        let err = scan_line("#").unwrap_err();
        assert_matches!(err, ScanError::UnrecognizedCharacter { character, partial, .. } => {
            assert_eq!(character, '#');
            assert!(partial.is_empty());
        });
    }

    #[test]
    fn test_empty_line() {
        let tokens = scan_line("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_whitespace_only_line() {
        let tokens = scan_line("   \t ").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_oversized_line_rejected() {
        let line = "1".repeat(MAX_LINE_LENGTH + 1);
        let err = scan_line(&line).unwrap_err();
        assert_matches!(err, ScanError::LineTooLong { length } => {
            assert_eq!(length, MAX_LINE_LENGTH + 1);
        });
    }

    #[test]
    fn test_line_at_limit_accepted() {
        let line = "1".repeat(MAX_LINE_LENGTH);
        let tokens = scan_line(&line).unwrap();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_digit_run_past_float_range_saturates() {
        // A digit run longer than f64 can represent still scans as one
        // Number token; the value saturates to infinity.
        let line = "9".repeat(400);
        let tokens = scan_line(&line).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.as_slice()[0].value.value, Some(f64::INFINITY));
    }

    #[test]
    fn test_deterministic_output() {
        let first = scan_line("(1.5 + 2) * 3").unwrap();
        let second = scan_line("(1.5 + 2) * 3").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_token_spans_cover_input() {
        let input = "10+2";
        let tokens = scan_line(input).unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.span.slice(input)).collect();
        assert_eq!(texts, vec!["10", "+", "2"]);
    }

    #[test]
    fn test_metrics_collection() {
        let mut scanner = Scanner::with_preferences(test_preferences());
        scanner.scan_line("(1 + 2.5) / 3").unwrap();

        let metrics = scanner.metrics();
        assert_eq!(metrics.total_tokens, 7);
        assert_eq!(metrics.number_tokens, 3);
        assert_eq!(metrics.operator_tokens, 2);
        assert_eq!(metrics.paren_tokens, 2);
        assert_eq!(metrics.whitespace_discarded, 4);
        assert_eq!(metrics.bad_characters, 0);
    }

    #[test]
    fn test_metrics_reset_between_scans() {
        let mut scanner = Scanner::with_preferences(test_preferences());
        scanner.scan_line("1+2+3").unwrap();
        scanner.scan_line("7").unwrap();

        assert_eq!(scanner.metrics().total_tokens, 1);
    }

    #[test]
    fn test_bad_character_counted_in_metrics() {
        let mut scanner = Scanner::with_preferences(test_preferences());
        let _ = scanner.scan_line("1@").unwrap_err();
        assert_eq!(scanner.metrics().bad_characters, 1);
    }

    #[test]
    fn test_scan_failure_logged_to_memory() {
        let memory = logging::service::create_test_logger();
        let service = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));
        if logging::init_global_logging_with_service(service).is_err() {
            // Another test already installed a global logger
            return;
        }

        let _ = scan_line("1#2").unwrap_err();
        assert!(memory.has_error_with_code(codes::scan::UNRECOGNIZED_CHARACTER));

        let _ = scan_line("1+2").unwrap();
        assert!(memory.has_success_with_code(codes::success::SCAN_COMPLETE));
    }
}
