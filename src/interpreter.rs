use std::collections::BTreeMap;

use thiserror::Error;
use tracing::trace;

use crate::ir::{Instr, Operand};
use crate::parser::BinOpKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("division by zero: {0} / 0")]
    DivisionByZero(i64),
    #[error("integer overflow: {lhs} {op} {rhs}")]
    Overflow { op: BinOpKind, lhs: i64, rhs: i64 },
}

/// Applies `op` with checked 64-bit arithmetic. Division truncates toward zero.
pub fn eval_binop(op: BinOpKind, lhs: i64, rhs: i64) -> Result<i64, RuntimeError> {
    let value = match op {
        BinOpKind::Add => lhs.checked_add(rhs),
        BinOpKind::Sub => lhs.checked_sub(rhs),
        BinOpKind::Mul => lhs.checked_mul(rhs),
        BinOpKind::Div => {
            if rhs == 0 {
                return Err(RuntimeError::DivisionByZero(lhs));
            }
            lhs.checked_div(rhs)
        }
    };
    value.ok_or(RuntimeError::Overflow { op, lhs, rhs })
}

/// Values of variables and temporaries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Store {
    values: BTreeMap<String, i64>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown names read as zero.
    pub fn get(&self, name: &str) -> i64 {
        self.values.get(name).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn set(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_string(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Runs instructions in order against a borrowed store.
pub struct Interpreter<'a> {
    store: &'a mut Store,
    output: Vec<i64>,
}

impl<'a> Interpreter<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self {
            store,
            output: vec![],
        }
    }

    /// Stops at the first failing instruction. Whatever ran before it stays
    /// in the store and in [`Interpreter::output`].
    pub fn run(&mut self, instrs: &[Instr]) -> Result<(), RuntimeError> {
        for instr in instrs {
            trace!(%instr, "executing");
            self.step(instr)?;
        }
        Ok(())
    }

    fn step(&mut self, instr: &Instr) -> Result<(), RuntimeError> {
        match instr {
            Instr::Move { src, dest } => {
                let value = self.resolve(src);
                self.store.set(dest, value);
            }
            Instr::Binary { op, lhs, rhs, dest } => {
                let value = eval_binop(*op, self.resolve(lhs), self.resolve(rhs))?;
                self.store.set(dest, value);
            }
            Instr::Print(src) => {
                let value = self.resolve(src);
                self.output.push(value);
            }
        }
        Ok(())
    }

    fn resolve(&self, operand: &Operand) -> i64 {
        match operand {
            Operand::Literal(n) => *n,
            Operand::Name(name) => self.store.get(name),
        }
    }

    /// Values printed so far, in order.
    pub fn output(&self) -> &[i64] {
        &self.output
    }

    pub fn into_output(self) -> Vec<i64> {
        self.output
    }
}
