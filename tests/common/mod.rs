use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::{env, path::Path};

pub fn command() -> Command {
    // Create full path to binary
    let path = env::current_exe().expect("Could not get path to current executable.");
    let path = path.parent().expect("Path parent not found.");
    let mut path = path.parent().expect("Path parent not found.").to_owned();
    path.push(env!("CARGO_PKG_NAME"));
    path.set_extension(env::consts::EXE_EXTENSION);
    let mut command = Command::new(path.into_os_string());
    command.env_remove("RUST_LOG");
    command
}

pub fn lex_file(path: &Path) -> Output {
    command()
        .arg(path)
        .output()
        .expect("Command execution error.")
}

#[allow(dead_code)]
pub fn lex_prompt(input: &str) -> Output {
    lex_prompt_bytes(input.as_bytes())
}

#[allow(dead_code)]
pub fn lex_prompt_bytes(input: &[u8]) -> Output {
    let mut child = command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Command execution error.");
    child
        .stdin
        .take()
        .expect("Stdin not captured.")
        .write_all(input)
        .expect("Could not write to stdin.");
    child.wait_with_output().expect("Command execution error.")
}

pub fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8(bytes.to_vec())
        .expect("Invalid UTF-8")
        .lines()
        .map(|x| x.to_owned())
        .collect()
}
