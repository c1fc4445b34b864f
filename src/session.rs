use tracing::{debug, warn};

use crate::analyzer::{SemanticVisitor, SymbolTable};
use crate::interpreter::{Interpreter, RuntimeError, Store};
use crate::ir::{optimize, Instr, IrGenerator};
use crate::lexer::{Lexer, Token};
use crate::parser::{Parser, Program};
use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Run the constant-folding pass.
    pub optimize: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { optimize: true }
    }
}

/// Everything one unit produced up to code generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compiled {
    pub tokens: Vec<Token>,
    pub program: Program,
    pub ir: Vec<Instr>,
    pub optimized: Vec<Instr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Execution {
    /// Printed values, including those printed before a runtime failure.
    pub output: Vec<i64>,
    pub result: Result<(), RuntimeError>,
}

/// Symbol table and store shared by every unit run through the session.
///
/// A unit that fails during semantic checking keeps the declarations that
/// were processed before the failing statement.
#[derive(Debug, Default)]
pub struct Session {
    symbol_table: SymbolTable,
    store: Store,
    options: Options,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Continues from state left by an earlier session.
    pub fn with_state(symbol_table: SymbolTable, store: Store) -> Self {
        Self {
            symbol_table,
            store,
            options: Options::default(),
        }
    }

    pub fn into_state(self) -> (SymbolTable, Store) {
        (self.symbol_table, self.store)
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn reset(&mut self) {
        self.symbol_table.clear();
        self.store.clear();
    }

    pub fn compile(&mut self, source: &str) -> Result<Compiled, Error> {
        let compiled = self._compile(source);
        if let Err(e) = &compiled {
            warn!(kind = e.kind(), error = %e, "unit rejected");
        }
        compiled
    }

    fn _compile(&mut self, source: &str) -> Result<Compiled, Error> {
        let tokens = Lexer::tokenize(source)?;

        let mut parser = Parser::new(tokens.clone());
        let program = parser.parse()?;

        let mut visitor = SemanticVisitor::new(&mut self.symbol_table);
        visitor.visit_program(&program)?;

        let ir = IrGenerator::new().generate(&program);
        let optimized = if self.options.optimize {
            optimize(&ir)
        } else {
            ir.clone()
        };

        Ok(Compiled {
            tokens,
            program,
            ir,
            optimized,
        })
    }

    /// Runs the optimized instructions against the session store.
    pub fn execute(&mut self, compiled: &Compiled) -> Execution {
        let mut interpreter = Interpreter::new(&mut self.store);
        let result = interpreter.run(&compiled.optimized);
        if let Err(e) = &result {
            warn!(error = %e, "execution aborted");
        }
        let output = interpreter.into_output();
        debug!(printed = output.len(), "executed unit");

        Execution { output, result }
    }

    pub fn run(&mut self, source: &str) -> Result<Vec<i64>, Error> {
        let compiled = self.compile(source)?;
        let Execution { output, result } = self.execute(&compiled);
        result?;
        Ok(output)
    }
}
