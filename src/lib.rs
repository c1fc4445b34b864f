pub mod analyzer;
pub mod error;
pub mod interpreter;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod session;

pub use error::Error;
pub use session::{Compiled, Execution, Options, Session};

/// Compiles and runs `source` with a fresh symbol table and store, returning
/// the printed values.
pub fn run_program(source: &str) -> Result<Vec<i64>, Error> {
    Session::new().run(source)
}
