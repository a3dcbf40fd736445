//! Integration tests for the mathsplit binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn mathsplit() -> Command {
    Command::cargo_bin("mathsplit").expect("binary to build")
}

#[test]
fn test_simple_format_from_stdin() {
    mathsplit()
        .args(["--format", "simple"])
        .write_stdin("a $x$ b")
        .assert()
        .success()
        .stdout("text: \"a \"\nmath(inline): \"x\"\ntext: \" b\"\n");
}

#[test]
fn test_simple_format_reports_unterminated() {
    mathsplit()
        .args(["--format", "simple"])
        .write_stdin("price $5")
        .assert()
        .success()
        .stdout("text: \"price $5\"\nunterminated opener at byte 6\n");
}

#[test]
fn test_json_output_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "see \\[a^2\\]").unwrap();

    let output = mathsplit()
        .arg(file.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "segments": [
                {"type": "text", "content": "see "},
                {"type": "math", "content": "a^2", "raw_span": "\\[a^2\\]", "display": true}
            ],
            "outcome": {"status": "exhausted"}
        })
    );
}

#[test]
fn test_yaml_output() {
    mathsplit()
        .args(["--format", "yaml"])
        .write_stdin("$$x$$")
        .assert()
        .success()
        .stdout(predicate::str::contains("type: math"))
        .stdout(predicate::str::contains("display: true"));
}

#[test]
fn test_config_file_replaces_delimiters() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        config,
        "[[delimiters]]\nleft = '@'\nright = '@'\ndisplay = false\n\n[output]\nformat = 'simple'"
    )
    .unwrap();

    mathsplit()
        .arg("--config")
        .arg(config.path())
        .write_stdin("$a$ @b@")
        .assert()
        .success()
        .stdout("text: \"$a$ \"\nmath(inline): \"b\"\n");
}

#[test]
fn test_list_delimiters() {
    mathsplit()
        .arg("--list-delimiters")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. $$ ... $$ (display)"))
        .stdout(predicate::str::contains("4. \\( ... \\) (inline)"));
}

#[cfg(feature = "mathml")]
#[test]
fn test_render_outputs_mathml() {
    mathsplit()
        .arg("--render")
        .write_stdin("a $x$ b")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("a <math"))
        .stdout(predicate::str::ends_with(" b"));
}

#[cfg(feature = "mathml")]
#[test]
fn test_render_keeps_unsupported_math_as_source() {
    mathsplit()
        .arg("--render")
        .write_stdin("a $\\mathcal{Z}$ b")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("a $\\mathcal{Z}$ b"));
}

#[test]
fn test_unknown_format_fails() {
    mathsplit()
        .args(["--format", "xml"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format 'xml'"));
}

#[test]
fn test_missing_file_fails() {
    mathsplit()
        .arg("/nonexistent/input.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading /nonexistent/input.txt"));
}
