//! CLI smoke tests driving the compiled binary.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::common::SAMPLE_COURSE_JSON;

fn docent() -> Command {
    Command::new(env!("CARGO_BIN_EXE_docent"))
}

fn course_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp course file");
    file.write_all(SAMPLE_COURSE_JSON.as_bytes())
        .expect("write course JSON");
    file
}

#[test]
fn ask_answers_a_one_shot_query() {
    let course = course_file();
    let output = docent()
        .args(["ask", "--course"])
        .arg(course.path())
        .args(["what", "is", "plain", "language"])
        .output()
        .expect("run docent ask");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Here's what the course says:"), "{stdout}");
}

#[test]
fn ask_json_emits_a_parseable_answer() {
    let course = course_file();
    let output = docent()
        .args(["ask", "--json", "--course"])
        .arg(course.path())
        .args(["what", "is", "passive", "voice"])
        .output()
        .expect("run docent ask --json");

    assert!(output.status.success());
    let reply: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(reply["ok"], serde_json::Value::Bool(true));
    assert!(reply["message"].as_str().unwrap().contains("Passive voice"));
}

#[test]
fn toc_prints_lesson_titles() {
    let course = course_file();
    let output = docent()
        .args(["toc", "--course"])
        .arg(course.path())
        .output()
        .expect("run docent toc");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Introduction to Plain Language"));
    assert!(stdout.contains("Key Principles"));
    assert!(stdout.contains("Which phrase is plainer?"));
}

#[test]
fn toc_reads_course_from_stdin() {
    let mut child = docent()
        .args(["toc", "--course", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn docent toc -");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(SAMPLE_COURSE_JSON.as_bytes())
        .expect("pipe course JSON");
    let output = child.wait_with_output().expect("wait for docent");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Familiar Words"));
}

#[test]
fn inspect_json_reports_a_valid_index() {
    let course = course_file();
    let output = docent()
        .args(["inspect", "--json", "--course"])
        .arg(course.path())
        .output()
        .expect("run docent inspect --json");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["valid"], serde_json::Value::Bool(true));
    assert_eq!(report["stats"]["lessons"], serde_json::json!(5));
    assert_eq!(report["stats"]["totalEntries"], serde_json::json!(13));
}

#[test]
fn missing_course_file_fails_with_context() {
    let output = docent()
        .args(["ask", "--course", "/no/such/course.json", "hello"])
        .output()
        .expect("run docent against missing file");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("/no/such/course.json"), "{stderr}");
}

#[test]
fn piped_questions_get_piped_answers() {
    let course = course_file();
    let mut child = docent()
        .args(["ask", "--course"])
        .arg(course.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn interactive docent");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"what is plain language\nexit\n")
        .expect("pipe questions");
    let output = child.wait_with_output().expect("wait for docent");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // No "? " prompt when stdin is a pipe.
    assert!(stdout.starts_with("Here's what the course says:"), "{stdout}");
}
