mod cli;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Emit};
use minicalc::{ir, Compiled, Error, Session};

const HELP: &str = "\
statements: int x;  x = 1 + 2;  print(x);
commands:   :symbols  :store  :reset  :help  exit";

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn show_compiled(compiled: &Compiled, emit: Emit) {
    if emit.tokens() {
        let kinds: Vec<_> = compiled.tokens.iter().map(|t| t.kind.to_string()).collect();
        println!("tokens: {}", kinds.join(" "));
    }
    if emit.ast() {
        println!("ast:");
        for stmt in compiled.program.0.iter() {
            println!("  {}", stmt);
        }
    }
    if emit.ir() {
        println!("ir:");
        print!("{}", indent(&ir::listing(&compiled.ir)));
        println!("optimized ir:");
        print!("{}", indent(&ir::listing(&compiled.optimized)));
    }
}

fn indent(s: &str) -> String {
    s.lines().map(|l| format!("  {}\n", l)).collect()
}

fn report(e: &Error) {
    eprintln!("{} error: {}", e.kind(), e);
}

/// Runs one unit through the session. Returns whether it succeeded.
fn run_unit(session: &mut Session, source: &str, emit: Emit) -> bool {
    let compiled = match session.compile(source) {
        Ok(compiled) => compiled,
        Err(e) => {
            report(&e);
            return false;
        }
    };
    show_compiled(&compiled, emit);

    let execution = session.execute(&compiled);
    for value in execution.output {
        println!("{}", value);
    }
    match execution.result {
        Ok(()) => true,
        Err(e) => {
            report(&Error::Runtime(e));
            false
        }
    }
}

fn show_symbols(session: &Session) {
    for (name, ty) in session.symbol_table().iter() {
        println!("{}: {}", name, ty);
    }
}

fn show_store(session: &Session) {
    for (name, value) in session.store().iter() {
        println!("{} = {}", name, value);
    }
}

fn repl(session: &mut Session, emit: Emit) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!(">>> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };

        match line.trim() {
            "" => continue,
            "exit" | "quit" => return Ok(()),
            ":symbols" => show_symbols(session),
            ":store" => show_store(session),
            ":reset" => session.reset(),
            ":help" => println!("{}", HELP),
            source => {
                run_unit(session, source, emit);
            }
        }
    }
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_tracing(cli.log_level());

    let interactive = cli.input.is_none() || cli.interactive;
    let mut session = Session::with_options(cli.options());
    let mut ok = true;

    if let Some(input) = cli.input.take() {
        let source = match input.contents() {
            Ok(source) => source,
            Err(e) => {
                eprintln!("failed to read input: {}", e);
                return ExitCode::FAILURE;
            }
        };
        info!(bytes = source.len(), "running program");
        ok = run_unit(&mut session, &source, cli.emit);
    }

    if interactive {
        info!("starting interactive session");
        if let Err(e) = repl(&mut session, cli.emit) {
            eprintln!("failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
