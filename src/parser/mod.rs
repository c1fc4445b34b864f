mod ast;
mod expr;
mod parser;

pub use ast::*;
pub use expr::*;
pub use parser::*;

use thiserror::Error;

use crate::lexer::TokenKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at offset {pos}")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        pos: usize,
    },
}
