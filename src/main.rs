use std::env;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::process::exit;

use common::{EXIT_DATA, EXIT_IO, EXIT_USAGE, FAREWELL, PROMPT};
use scanner::Token;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod common;
mod error;
mod scanner;

fn main() {
    init_tracing();
    let args = env::args().collect::<Vec<String>>();

    match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: lox [path]");
            exit(EXIT_USAGE)
        }
    }
}

/// Logs go to stderr and only when `RUST_LOG` is set, e.g. `RUST_LOG=lox=trace`.
fn init_tracing() {
    if env::var_os("RUST_LOG").is_none() {
        return;
    }
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(EnvFilter::from_default_env())
        .try_init();
}

fn repl() {
    let stdin = io::stdin();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            return;
        }
        match stdin.lock().read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => (),
            Err(err) => {
                eprintln!("Could not read input: {err}");
                break;
            }
        }
        match scanner::lex_bytes(strip_line_terminator(&buf)) {
            Ok(tokens) => {
                if print_tokens(&mut io::stdout().lock(), &tokens).is_err() {
                    return;
                }
            }
            Err(err) => eprintln!("{err}"),
        }
    }
    println!();
    println!("{FAREWELL}");
}

fn run_file(path: &str) {
    let Ok(source) = std::fs::read(path) else {
        eprintln!("Could not read file.");
        exit(EXIT_IO);
    };
    let tokens = match scanner::lex_bytes(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{err}");
            exit(EXIT_DATA);
        }
    };
    if print_tokens(&mut io::stdout().lock(), &tokens).is_err() {
        exit(EXIT_IO);
    }
}

/// Drops one trailing `\n` or `\r\n`, nothing more.
fn strip_line_terminator(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => line,
    }
}

/// Stops at the first failed write, e.g. a closed pipe.
fn print_tokens(out: &mut impl Write, tokens: &[Token<'_>]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    out.flush()
}
