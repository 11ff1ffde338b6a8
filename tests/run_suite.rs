mod common;

use std::path::{Path, PathBuf};
use std::process::Output;

use common::{lex_file, lines};
use pretty_assertions::assert_eq;
use test_generator::test_resources;

struct Expected {
    out: Vec<String>,
    err: Vec<String>,
}

#[test_resources("tests/suite/*/*.lox")]
fn run_file_test(filename: &str) {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(filename);
    let expected = read_expected(&path);
    let output = lex_file(&path);
    run_assertions(expected, output);
}

/// `foo.lox` is checked against `foo.out` (stdout) and, when present,
/// `foo.err` (stderr of a failed scan).
fn read_expected(path: &Path) -> Expected {
    println!("{}", path.display());
    let read = |extension: &str| match std::fs::read(path.with_extension(extension)) {
        Ok(bytes) => lines(&bytes),
        Err(_) => vec![],
    };
    Expected {
        out: read("out"),
        err: read("err"),
    }
}

fn run_assertions(expected: Expected, output: Output) {
    let code = output
        .status
        .code()
        .expect("Process terminated by a signal.");
    match expected.err.is_empty() {
        true => assert_eq!(code, 0, "Program exited with failure, expected success"),
        false => assert_eq!(code, 65, "Lexing errors should have error code 65"),
    }
    assert_eq!(expected.err, lines(&output.stderr), "Lexing error should match");
    assert_eq!(expected.out, lines(&output.stdout), "Output should match");
}
