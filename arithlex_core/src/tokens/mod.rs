pub mod sequence;
pub mod token;

pub use sequence::{SpannedToken, TokenSequence};
pub use token::{Token, TokenKind};
