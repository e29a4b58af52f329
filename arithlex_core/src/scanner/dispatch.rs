//! Table-driven dispatch loop over a single input line

use super::error::ScanError;
use super::ScanMetrics;
use crate::config::constants::compile_time::scan::*;
use crate::config::runtime::ScanPreferences;
use crate::logging::codes;
use crate::rules::{self, Accumulator, Category, Outcome};
use crate::tokens::TokenSequence;
use crate::utils::Position;
use crate::{log_debug, log_error, log_success};

/// Sentinel appended past the last input character so every real
/// character has one character of lookahead.
pub const END_OF_INPUT: char = '\0';

/// Line scanner holding metrics and user preferences.
///
/// A scanner is reusable; each call to [`scan_line`](Scanner::scan_line)
/// starts from a fresh accumulator and fresh metrics.
pub struct Scanner {
    metrics: ScanMetrics,
    preferences: ScanPreferences,
}

impl Scanner {
    pub fn new() -> Self {
        Self::with_preferences(ScanPreferences::default())
    }

    pub fn with_preferences(preferences: ScanPreferences) -> Self {
        Self {
            metrics: ScanMetrics::default(),
            preferences,
        }
    }

    /// Metrics from the most recent scan
    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &ScanPreferences {
        &self.preferences
    }

    /// Scan one line into a token sequence.
    ///
    /// The first error ends the scan; tokens recognized before an
    /// unrecognized character travel with the error.
    pub fn scan_line(&mut self, line: &str) -> Result<TokenSequence, ScanError> {
        self.metrics = ScanMetrics::default();

        let char_count = line.chars().count();
        if char_count > MAX_LINE_LENGTH {
            log_error!(
                codes::scan::LINE_TOO_LONG,
                "Input line exceeds length limit",
                "length" => char_count,
                "limit" => MAX_LINE_LENGTH
            );
            return Err(ScanError::LineTooLong { length: char_count });
        }

        let mut chars: Vec<char> = line.chars().collect();
        chars.push(END_OF_INPUT);

        let mut tokens = TokenSequence::new();
        let mut acc = Accumulator::new();
        let mut pos = Position::start();

        // The sentinel itself is never dispatched, only seen as lookahead
        for i in 0..chars.len() - 1 {
            let ch = chars[i];
            let lookahead = chars[i + 1];
            let next = pos.advance(ch);

            let category = rules::dispatch(ch, &acc);
            category.select(ch, pos, &mut acc);

            match category.complete(lookahead, next, &mut acc) {
                Outcome::Pending => {
                    if category == Category::Whitespace && self.preferences.collect_metrics {
                        self.metrics.record_whitespace();
                    }
                }
                Outcome::Emit(token) => {
                    if tokens.len() >= MAX_TOKEN_COUNT {
                        log_error!(
                            codes::scan::TOO_MANY_TOKENS,
                            "Token limit exceeded",
                            "limit" => MAX_TOKEN_COUNT
                        );
                        return Err(ScanError::TooManyTokens {
                            count: tokens.len() + 1,
                        });
                    }
                    if self.preferences.collect_metrics {
                        self.metrics.record_token(token.value.kind);
                    }
                    if self.preferences.log_token_events {
                        log_debug!(
                            "Token produced",
                            "kind" => token.value.label(),
                            "text" => token.value.text
                        );
                    }
                    tokens.push(token);
                }
                Outcome::Invalid { text, span } => {
                    if self.preferences.include_position_in_errors {
                        log_error!(
                            codes::scan::INVALID_NUMBER,
                            "Invalid number literal",
                            span = span,
                            "text" => text
                        );
                    } else {
                        log_error!(
                            codes::scan::INVALID_NUMBER,
                            "Invalid number literal",
                            "text" => text
                        );
                    }
                    return Err(ScanError::InvalidNumber {
                        text,
                        position: span.start,
                    });
                }
                Outcome::Fatal => {
                    if self.preferences.collect_metrics {
                        self.metrics.record_bad_character();
                    }
                    log_error!(
                        codes::scan::UNRECOGNIZED_CHARACTER,
                        "Unrecognized character in input",
                        "char" => ch,
                        "column" => pos.column
                    );
                    return Err(ScanError::UnrecognizedCharacter {
                        character: ch,
                        position: pos,
                        partial: tokens,
                    });
                }
            }

            pos = next;
        }

        log_success!(
            codes::success::SCAN_COMPLETE,
            "Line scan complete",
            "tokens" => tokens.len(),
            "whitespace_discarded" => self.metrics.whitespace_discarded
        );

        Ok(tokens)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
