use tracing::debug;

use crate::parser::{Expr, Program, Stmt};

use super::{symbol_table::SymbolTable, SemanticError};

/// Checks declaration-before-use, writing declarations into the borrowed
/// table as it goes. Declarations seen before a failure stay in the table.
pub struct SemanticVisitor<'a> {
    symbol_table: &'a mut SymbolTable,
}

impl<'a> SemanticVisitor<'a> {
    pub fn new(symbol_table: &'a mut SymbolTable) -> Self {
        Self { symbol_table }
    }

    pub fn visit_program(&mut self, program: &Program) -> Result<(), SemanticError> {
        for stmt in program.0.iter() {
            self.visit_stmt(stmt)?;
        }
        debug!(symbols = self.symbol_table.len(), "semantic check passed");
        Ok(())
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::VarDecl { name, ty } => self.symbol_table.declare_var(name, *ty),
            Stmt::Assign { target, value } => {
                self.symbol_table.get_var_type(target)?;
                self.visit_expr(value)
            }
            Stmt::Print(expr) => self.visit_expr(expr),
        }
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), SemanticError> {
        match expr {
            Expr::Num(_) => Ok(()),
            Expr::Var(name) => self.symbol_table.get_var_type(name).map(|_| ()),
            Expr::Binary(_kind, left, right) => {
                self.visit_expr(left)?;
                self.visit_expr(right)
            }
        }
    }
}
