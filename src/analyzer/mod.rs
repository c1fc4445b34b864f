mod semantic_visitor;
mod symbol_table;
mod ty;

pub use semantic_visitor::*;
pub use symbol_table::*;
pub use ty::*;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("variable '{0}' already declared")]
    AlreadyDeclared(String),
    #[error("variable '{0}' not declared")]
    NotDeclared(String),
}
