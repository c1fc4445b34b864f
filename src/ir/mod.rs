mod generator;
mod instruction;
mod optimizer;

pub use generator::*;
pub use instruction::*;
pub use optimizer::*;

/// One instruction per line, as shown in listings.
pub fn listing(instrs: &[Instr]) -> String {
    instrs.iter().map(|i| format!("{}\n", i)).collect()
}
