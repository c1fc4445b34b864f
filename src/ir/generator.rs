use tracing::debug;

use crate::parser::{Expr, Program, Stmt};

use super::{Instr, Operand};

/// Prefix of generated temporaries. Identifiers never start with it.
pub const TEMP_PREFIX: &str = "%t";

/// Lowers a checked program into three-address code.
///
/// Temporaries are numbered from 1 per generator, so two generators can hand
/// out the same names.
#[derive(Debug, Default)]
pub struct IrGenerator {
    temp_index: usize,
    instrs: Vec<Instr>,
}

impl IrGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(mut self, program: &Program) -> Vec<Instr> {
        for stmt in program.0.iter() {
            self.gen_stmt(stmt);
        }
        debug!(
            instructions = self.instrs.len(),
            temporaries = self.temp_index,
            "generated IR"
        );
        self.instrs
    }

    fn new_temp(&mut self) -> String {
        self.temp_index += 1;
        format!("{}{}", TEMP_PREFIX, self.temp_index)
    }

    fn gen_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl { .. } => (),
            Stmt::Assign { target, value } => {
                let src = self.gen_expr(value);
                self.instrs.push(Instr::Move {
                    src,
                    dest: target.clone(),
                });
            }
            Stmt::Print(expr) => {
                let src = self.gen_expr(expr);
                self.instrs.push(Instr::Print(src));
            }
        }
    }

    fn gen_expr(&mut self, expr: &Expr) -> Operand {
        match expr {
            Expr::Num(n) => Operand::Literal(*n),
            Expr::Var(name) => Operand::Name(name.clone()),
            Expr::Binary(op, left, right) => {
                let lhs = self.gen_expr(left);
                let rhs = self.gen_expr(right);
                let dest = self.new_temp();
                self.instrs.push(Instr::Binary {
                    op: *op,
                    lhs,
                    rhs,
                    dest: dest.clone(),
                });
                Operand::Name(dest)
            }
        }
    }
}
