use clap::{ArgAction, Parser, ValueEnum};
use clap_stdin::FileOrStdin;

use minicalc::Options;

#[derive(Parser, Debug)]
#[command(name = "minicalc", version, about = "Compile and run MiniCalc programs")]
pub struct Cli {
    /// Source file, or `-` for stdin. Starts an interactive session when omitted.
    pub input: Option<FileOrStdin>,

    /// Keep an interactive session open (after running INPUT, if given).
    #[arg(short, long)]
    pub interactive: bool,

    /// Intermediate stages to display before the program output.
    #[arg(long, value_enum, default_value_t = Emit::Ir)]
    pub emit: Emit,

    /// Skip constant folding.
    #[arg(long)]
    pub no_optimize: bool,

    /// Raise the log level (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emit {
    /// Program output only.
    None,
    Tokens,
    Ast,
    /// IR before and after optimization.
    Ir,
    All,
}

impl Emit {
    pub fn tokens(self) -> bool {
        matches!(self, Emit::Tokens | Emit::All)
    }

    pub fn ast(self) -> bool {
        matches!(self, Emit::Ast | Emit::All)
    }

    pub fn ir(self) -> bool {
        matches!(self, Emit::Ir | Emit::All)
    }
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            optimize: !self.no_optimize,
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "error",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
