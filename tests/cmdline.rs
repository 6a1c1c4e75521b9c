// Command-line behaviour tests for the svgeq binary.

use assert_cmd::{crate_name, Command};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const INPUT: &str = r#"<svg><path d="M0 0 L10 0"/></svg>"#;
const EXPECTED: &str = "=== Path 1 ===\nx(t) = 10*t\ny(t) = 0\n";

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = String::from_utf8(cmd.arg("-h").assert().success().get_output().stdout.clone())
        .expect("non-UTF8");
    assert!(output.contains("Usage"));
}

#[test]
fn test_cmdline_stdin_stdout() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.write_stdin(INPUT).assert().success().stdout(EXPECTED);
}

#[test]
fn test_cmdline_file_to_file() {
    let mut infile = NamedTempFile::new().expect("could not create tmpfile");
    write!(infile, "{}", INPUT).expect("tmpfile write failed");
    let outfile = NamedTempFile::new().expect("could not create outfile");

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg(infile.path())
        .arg("-o")
        .arg(outfile.path())
        .assert()
        .success();

    let written = fs::read_to_string(outfile.path()).expect("output unreadable");
    assert_eq!(written, EXPECTED);
}

#[test]
fn test_cmdline_latex_format() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let assert = cmd
        .args(["--format", "latex"])
        .write_stdin(INPUT)
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).expect("non-UTF8");
    assert!(output.starts_with("\\documentclass"));
    assert!(output.contains("\\textrm{x}(t) &= 10 t"));
}

#[test]
fn test_cmdline_fuse() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg("--fuse")
        .write_stdin(r#"<svg><path d="M0 0 C1 1 2 2 3 3 C4 4 5 5 6 6"/></svg>"#)
        .assert()
        .success()
        .stdout("=== Path 1 ===\nx(t) = 6*t\ny(t) = 6*t\n");
}

#[test]
fn test_cmdline_missing_file() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg("no-such-file.svg").assert().failure();
}

#[test]
fn test_cmdline_bad_format() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["--format", "pdf"]).write_stdin(INPUT).assert().failure();
}

#[test]
fn test_cmdline_arc_fails() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.write_stdin(r#"<svg><path d="M0 0 A1 1 0 0 1 2 2"/></svg>"#)
        .assert()
        .failure();
}
