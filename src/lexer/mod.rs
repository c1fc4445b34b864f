mod lexer;
mod token;

pub use lexer::*;
pub use token::{Token, TokenKind};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("invalid character '{ch}' at offset {pos}")]
    InvalidCharacter { ch: char, pos: usize },
    #[error("integer literal {literal} at offset {pos} does not fit in 64 bits")]
    IntegerOutOfRange { literal: String, pos: usize },
}
