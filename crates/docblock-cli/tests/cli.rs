//! End-to-end tests for the `docblock` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn docblock(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docblock").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn project(file: &str, source: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(file), source).unwrap();
    temp
}

#[test]
fn generate_prints_a_snippet() {
    let temp = project("math.js", "/**\nfunction add(a, b) {\n}\n");

    docblock(temp.path())
        .args(["generate", "math.js", "--line", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("${1:[add description]}"))
        .stdout(predicate::str::contains("@param"))
        .stdout(predicate::str::contains("\n */"));
}

#[test]
fn plain_output_has_no_placeholders() {
    let temp = project("math.js", "/**\nfunction add(a, b) {\n}\n");

    docblock(temp.path())
        .args(["generate", "math.js", "-l", "1", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" * [add description]"))
        .stdout(predicate::str::contains("${").not());
}

#[test]
fn write_replaces_the_trigger_line() {
    let temp = project("math.js", "/** Sums two numbers\nfunction add(a, b) {\n}\n");

    docblock(temp.path())
        .args(["generate", "math.js", "-l", "1", "--column", "4", "--write"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote doc block"));

    let written = fs::read_to_string(temp.path().join("math.js")).unwrap();
    assert!(written.starts_with("/**\n * Sums two numbers\n * @param"));
    assert!(written.ends_with(" */\nfunction add(a, b) {\n}\n"));
    assert!(!written.contains("${"));
}

#[test]
fn inline_variable() {
    let temp = project("state.ts", "let count = 0;\n/**\nconst total = 0;\n");

    docblock(temp.path())
        .args(["generate", "state.ts", "-l", "2", "--inline", "--plain"])
        .assert()
        .success()
        .stdout(" @type {Number} [description] */\n");
}

#[test]
fn json_reports_the_declaration() {
    let temp = project("math.js", "/**\nfunction add(a, b) {\n}\n");

    docblock(temp.path())
        .args(["generate", "math.js", "-l", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "function""#))
        .stdout(predicate::str::contains(r#""name": "add""#));
}

#[test]
fn stdin_with_explicit_language() {
    let temp = TempDir::new().unwrap();

    docblock(temp.path())
        .args(["generate", "-", "-l", "1", "--lang", "coffee", "--plain"])
        .write_stdin("###*\nsquare = (x) ->\n  x * x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[square description]"))
        .stdout(predicate::str::ends_with("\n###\n"));
}

#[test]
fn rejects_a_line_without_trigger() {
    let temp = project("math.js", "function add(a, b) {\n}\n");

    docblock(temp.path())
        .args(["generate", "math.js", "-l", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not open a doc block"));
}

#[test]
fn missing_file_is_reported() {
    let temp = TempDir::new().unwrap();

    docblock(temp.path())
        .args(["generate", "nope.js", "-l", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn settings_are_discovered_next_to_the_source() {
    let temp = project("math.js", "/**\nfunction add(a, b) {\n}\n");
    fs::write(
        temp.path().join(".docblockrc.json"),
        r#"{ "returnTag": "@returns", "paramDescription": false }"#,
    )
    .unwrap();

    docblock(temp.path())
        .args(["generate", "math.js", "-l", "1", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@returns"))
        .stdout(predicate::str::contains("} a [description]").not());
}

#[test]
fn config_prints_resolved_settings() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("docblock.toml"), "alignTags = \"shallow\"\n").unwrap();

    docblock(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""alignTags": "shallow""#))
        .stdout(predicate::str::contains(r#""returnTag": "@return""#));

    docblock(temp.path())
        .args(["config", "--toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alignTags = \"shallow\""));
}

#[test]
fn invalid_settings_fail_before_running() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".docblockrc.json"), r#"{ "returnTag": "returns" }"#).unwrap();

    docblock(temp.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("returnTag"));
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();

    docblock(temp.path())
        .args(["config", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn unrecognised_declaration_warns_and_emits_a_bare_block() {
    let temp = project("end.js", "/**\n}\n");

    docblock(temp.path())
        .args(["generate", "end.js", "-l", "1"])
        .assert()
        .success()
        .stdout("\n * ${0:}\n */\n")
        .stderr(predicate::str::contains("No declaration recognised"));
}
