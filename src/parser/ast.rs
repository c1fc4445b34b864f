use std::fmt;

use crate::analyzer::Ty;

use super::Expr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program(pub Vec<Stmt>);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    VarDecl { name: String, ty: Ty },
    Assign { target: String, value: Expr },
    Print(Expr),
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::VarDecl { name, ty } => write!(f, "decl {}: {}", name, ty),
            Stmt::Assign { target, value } => write!(f, "{} = {}", target, value),
            Stmt::Print(expr) => write!(f, "print {}", expr),
        }
    }
}
