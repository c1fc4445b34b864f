use std::fmt;

use crate::parser::BinOpKind;

/// Where an instruction reads a value from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Literal(i64),
    /// A declared variable or a generated temporary.
    Name(String),
}

impl Operand {
    pub fn as_literal(&self) -> Option<i64> {
        match self {
            Operand::Literal(n) => Some(*n),
            Operand::Name(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(n) => write!(f, "{}", n),
            Operand::Name(name) => f.write_str(name),
        }
    }
}

/// Three-address instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instr {
    Binary {
        op: BinOpKind,
        lhs: Operand,
        rhs: Operand,
        dest: String,
    },
    Move {
        src: Operand,
        dest: String,
    },
    Print(Operand),
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Binary { op, lhs, rhs, dest } => write!(f, "{} = {} {} {}", dest, lhs, op, rhs),
            Instr::Move { src, dest } => write!(f, "{} = {}", dest, src),
            Instr::Print(src) => write!(f, "print {}", src),
        }
    }
}
