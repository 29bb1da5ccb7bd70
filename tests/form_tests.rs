//! Weighing form tests - piped edit sessions

mod common;

use common::weigh;
use predicates::prelude::*;

#[test]
fn test_piped_session_prints_after_each_edit() {
    let output = weigh()
        .arg("form")
        .write_stdin("actual=4.1\nactual=4.01\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "total=4.1260 mg range=4.0435 - 4.2085 mg status=Pass");
    assert_eq!(lines[1], "total=4.1260 mg range=4.0435 - 4.2085 mg status=Fail");
}

#[test]
fn test_piped_clear_all() {
    weigh()
        .arg("form")
        .write_stdin("clear\n")
        .assert()
        .success()
        .stdout("total=0.0000 mg range=0.0000 - 0.0000 mg status=-\n");
}

#[test]
fn test_piped_blank_form_awaits_input() {
    weigh()
        .args(["form", "--blank"])
        .write_stdin("weight=500\ntimes=1\ntotal-unit=g\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "total=0.50000000 g range=0.49000000 - 0.51000000 g status=Awaiting Input",
        ));
}

#[test]
fn test_piped_bad_lines_are_skipped() {
    weigh()
        .arg("form")
        .write_stdin("colour=red\nunit=kg\ntimes=4\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("line 1"))
        .stderr(predicate::str::contains("Unknown unit"))
        .stdout(predicate::str::contains("total=8.2520 mg"));
}

#[test]
fn test_piped_json_lines() {
    let output = weigh()
        .args(["form", "--format", "json"])
        .write_stdin("weight=1\ntimes=1\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["total"], "1.0000");
    assert_eq!(last["result"]["status"], "fail");
}
