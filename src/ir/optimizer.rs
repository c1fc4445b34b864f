use tracing::{debug, trace};

use crate::interpreter::eval_binop;

use super::{Instr, Operand};

/// Single forward constant-folding pass.
///
/// Only a binary instruction whose operands are both literals is folded.
/// Folded values are not propagated into later instructions, so
/// `(2 + 3) * 5` folds the addition and keeps the multiplication.
/// An operation that would fail at run time (division by zero, overflow)
/// is left for the interpreter to report.
pub fn optimize(instrs: &[Instr]) -> Vec<Instr> {
    let mut folded = 0;
    let optimized: Vec<_> = instrs
        .iter()
        .map(|instr| match fold(instr) {
            Some(new_instr) => {
                trace!(from = %instr, to = %new_instr, "folded");
                folded += 1;
                new_instr
            }
            None => instr.clone(),
        })
        .collect();

    debug!(folded, instructions = optimized.len(), "optimized IR");
    optimized
}

fn fold(instr: &Instr) -> Option<Instr> {
    let Instr::Binary { op, lhs, rhs, dest } = instr else {
        return None;
    };
    let value = eval_binop(*op, lhs.as_literal()?, rhs.as_literal()?).ok()?;

    Some(Instr::Move {
        src: Operand::Literal(value),
        dest: dest.clone(),
    })
}
