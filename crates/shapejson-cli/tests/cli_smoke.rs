use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SCHEMA: &str = r#"{
  "type": "structure",
  "members": {
    "name": {"type": "string", "serialized_name": "FullName"},
    "born": {"type": "timestamp"},
    "tags": {"type": "list", "members": {"type": "string"}}
  }
}"#;

fn temp_with(content: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", content)?;
    Ok(tmp)
}

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("shapejson-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn encodes_input_file_through_schema() -> Result<(), Box<dyn std::error::Error>> {
    let schema = temp_with(SCHEMA)?;
    let input = temp_with(r#"{"tags": ["a", "b"], "name": "John Doe", "born": "2023-01-01T02:00:00+02:00", "junk": 1}"#)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("shapejson-cli"))
        .arg("--schema")
        .arg(schema.path())
        .arg(input.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    assert_eq!(
        out.trim_end(),
        r#"{"FullName":"John Doe","born":"2023-01-01T00:00:00Z","tags":["a","b"]}"#
    );
    Ok(())
}

#[test]
fn timestamp_format_flag_sets_default() -> Result<(), Box<dyn std::error::Error>> {
    let schema = temp_with(SCHEMA)?;
    Command::new(assert_cmd::cargo::cargo_bin!("shapejson-cli"))
        .arg("--schema")
        .arg(schema.path())
        .arg("--timestamp-format")
        .arg("unixtimestamp")
        .write_stdin(r#"{"born": "2023-01-01T00:00:00Z"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"born":1672531200}"#));
    Ok(())
}

#[test]
fn unknown_schema_type_fails() -> Result<(), Box<dyn std::error::Error>> {
    let schema = temp_with(r#"{"type": "decimal"}"#)?;
    Command::new(assert_cmd::cargo::cargo_bin!("shapejson-cli"))
        .arg("--schema")
        .arg(schema.path())
        .write_stdin("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized shape type"));
    Ok(())
}

#[test]
fn strict_flag_rejects_mismatched_scalars() -> Result<(), Box<dyn std::error::Error>> {
    let schema = temp_with(r#"{"type": "integer"}"#)?;
    Command::new(assert_cmd::cargo::cargo_bin!("shapejson-cli"))
        .arg("--schema")
        .arg(schema.path())
        .arg("--strict")
        .write_stdin(r#""12""#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected integer, found string"));
    Ok(())
}
