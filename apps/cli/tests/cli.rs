//! Binary-level tests for `claw`

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const DOC: &str = r#"{"a": {"b": 1, "s": "1", "n": null}, "list": [10, 20]}"#;

fn claw() -> Command {
    let mut cmd = Command::cargo_bin("claw").expect("claw binary is built");
    cmd.env_remove("CLAW_LOG")
        .env_remove("CLAW_LOG_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn get_prints_resolved_value() {
    claw()
        .args(["get", "a.b", "--default", "0"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn get_bracket_index() {
    claw()
        .args(["get", "list[1]", "-d", "0"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn get_missing_falls_back_and_warns() {
    claw()
        .args(["get", "a.c", "--default", "0"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("dataMissing"));
}

#[test]
fn get_type_mismatch_falls_back() {
    claw()
        .args(["get", "a.s", "--default", "0"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("typeMismatch"));
}

#[test]
fn get_without_default_returns_empty_string() {
    claw()
        .args(["get", "zzz"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("\"\"\n");
}

#[test]
fn get_empty_object_default_returns_marker() {
    claw()
        .args(["get", "x.y", "--default", "{}"])
        .write_stdin("{}")
        .assert()
        .success()
        .stdout("{\"__isEmpty\":true}\n");
}

#[test]
fn need_quiet_keeps_stderr_clean() {
    claw()
        .args(["need", "a.c", "--default", "0", "--quiet"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn need_below_filter_is_not_shown() {
    claw()
        .args(["need", "a.c", "--default", "0", "--level", "debug"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn need_error_level_is_shown() {
    claw()
        .args(["need", "a.c", "-d", "0", "-l", "error"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stderr(predicate::str::contains("ERROR").and(predicate::str::contains("dataMissing")));
}

#[test]
fn json_logs_carry_the_service_span() {
    claw()
        .args(["--log-format", "json", "get", "a.c", "-d", "0"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("0\n")
        .stderr(
            predicate::str::contains(r#""service":"claw""#)
                .and(predicate::str::contains("dataMissing")),
        );
}

#[test]
fn string_characters_and_lengths_resolve() {
    claw().args(["get", "a.s[0]"]).write_stdin(DOC).assert().success().stdout("\"1\"\n");
    claw()
        .args(["get", "list.length", "-d", "0"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::is_empty());
    claw().args(["has", "a.s.length"]).write_stdin(DOC).assert().success().stdout("true\n");
}

#[test]
fn has_reports_presence() {
    claw().args(["has", "a.b"]).write_stdin(DOC).assert().success().stdout("true\n");
    claw().args(["has", "a.n"]).write_stdin(DOC).assert().success().stdout("false\n");
    claw().args(["has", "a.zz"]).write_stdin(DOC).assert().success().stdout("false\n");
}

#[test]
fn reads_document_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOC.as_bytes()).unwrap();
    claw()
        .args(["get", "list[0]", "-d", "0", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn invalid_json_fails() {
    claw()
        .args(["get", "a"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn missing_input_file_fails() {
    claw()
        .args(["get", "a", "--input", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
