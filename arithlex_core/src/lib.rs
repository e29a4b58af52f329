// Internal modules
pub mod config;
#[macro_use]
pub mod logging;
pub mod rules;
pub mod scanner;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use scanner::{scan_line, ScanError, ScanMetrics, Scanner};
pub use tokens::{Token, TokenKind, TokenSequence};
