use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use pretty_assertions::assert_eq;

/// Runs the `lox` binary with `args`, feeding `stdin` to it.
fn run_lox(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lox")).args(args)
                                                           .env_remove("RUST_LOG")
                                                           .stdin(Stdio::piped())
                                                           .stdout(Stdio::piped())
                                                           .stderr(Stdio::piped())
                                                           .spawn()
                                                           .unwrap();

    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn prompt_echoes_and_keeps_definitions() {
    let output = run_lox(&[], b"var a = 20;\na * 2 + 2;\nprint a;\n");

    assert_eq!(String::from_utf8(output.stdout).unwrap(), "> > 42\n> 20\n> ");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn prompt_reports_unreadable_input() {
    let output = run_lox(&[], b"print 1;\n\xff\xfe\nprint 2;\n");
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(String::from_utf8(output.stdout).unwrap(), "> 1\n> ");
    assert!(stderr.starts_with("Failed to read input:"), "stderr was: {stderr}");
    assert_eq!(output.status.code(), Some(74));
}

#[test]
fn exit_codes_follow_the_kind_of_error() {
    assert_eq!(run_lox(&["-e", "print 1;"], b"").status.code(), Some(0));
    assert_eq!(run_lox(&["-e", "print 1"], b"").status.code(), Some(65));
    assert_eq!(run_lox(&["-e", "print nil + 1;"], b"").status.code(), Some(70));
    assert_eq!(run_lox(&["no/such/script.lox"], b"").status.code(), Some(74));
}
