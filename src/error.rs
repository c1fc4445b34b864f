use thiserror::Error;

pub use crate::analyzer::SemanticError;
pub use crate::interpreter::RuntimeError;
pub use crate::lexer::LexError;
pub use crate::parser::ParseError;

/// Any failure a compilation unit can end with.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Short classification string used when reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Lex(_) => "lexical",
            Error::Parse(_) => "syntactic",
            Error::Semantic(_) => "semantic",
            Error::Runtime(_) => "runtime",
        }
    }
}
