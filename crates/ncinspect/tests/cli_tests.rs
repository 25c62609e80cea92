//! Tests that run the `ncinspect` binary and check its output and exit code.

mod common;

use std::path::Path;
use std::process::{Command, Output};

use common::{make_sounding_file, make_text_file};

fn ncinspect(args: &[&str], path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ncinspect"))
        .args(args)
        .arg(path)
        .env_remove("RUST_LOG")
        .env_remove("NCINSPECT_GROUP")
        .env_remove("NCINSPECT_VARIABLE")
        .env_remove("NCINSPECT_ATTRIBUTE")
        .output()
        .expect("failed to run ncinspect")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn success_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_sounding_file(dir.path());

    let output = ncinspect(&[], &path);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("   CAPE:units[0] = 'J/kg'\n"));
    assert!(out.ends_with(&format!(
        "*** SUCCESS reading example file {}!\n",
        path.display()
    )));
    assert!(stderr(&output).is_empty());
}

#[test]
fn output_is_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_sounding_file(dir.path());

    let first = ncinspect(&["-a", "flag_meanings"], &path);
    let second = ncinspect(&["-a", "flag_meanings"], &path);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_file_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.h5");

    let output = ncinspect(&[], &path);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error: cannot open"));
}

#[test]
fn unrecognized_format_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_text_file(dir.path());

    let output = ncinspect(&[], &path);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: cannot open"));
}

#[test]
fn missing_group_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_sounding_file(dir.path());

    let output = ncinspect(&["--group", "Missing"], &path);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error: group not found: /Missing"));
}

#[test]
fn missing_attribute_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_sounding_file(dir.path());

    let output = ncinspect(&["-a", "valid_range"], &path);
    assert_eq!(output.status.code(), Some(2));
    assert!(!stdout(&output).contains("*** attribute"));
    assert!(stderr(&output).contains("Error: attribute not found: CAPE:valid_range"));
}

#[test]
fn type_mismatch_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_sounding_file(dir.path());

    let output = ncinspect(&["-a", "_FillValue"], &path);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("expected NC_STRING"));
}

#[test]
fn names_come_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_sounding_file(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_ncinspect"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .env("NCINSPECT_GROUP", "Geolocation")
        .env("NCINSPECT_VARIABLE", "Latitude")
        .env("NCINSPECT_ATTRIBUTE", "units")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("   Latitude:units[0] = 'degrees_north'\n"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_sounding_file(dir.path());

    let quiet = ncinspect(&[], &path);
    let verbose = ncinspect(&["-vv"], &path);
    assert_eq!(verbose.status.code(), Some(0));
    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(stderr(&verbose).contains("inspection complete"));
}

#[test]
fn failed_run_closes_file_before_reporting() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_sounding_file(dir.path());

    let output = ncinspect(&["-vv", "-a", "valid_range"], &path);
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    let closed = err.find("closed file").expect("close event missing");
    let failed = err.find("inspection failed").expect("failure event missing");
    assert!(closed < failed, "stderr: {err}");
}

#[test]
fn unopened_file_is_not_closed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.h5");

    let output = ncinspect(&["-vv"], &path);
    assert_eq!(output.status.code(), Some(2));
    assert!(!stderr(&output).contains("closed file"));
}
