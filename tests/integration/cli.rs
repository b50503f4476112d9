//! CLI behaviour: stdin and file input, output formats, exit codes.

use crate::common::{input_file, run_with_stdin, stdout_lines};

#[test]
fn test_max_gap_from_stdin() {
    let output = run_with_stdin(&["max-gap"], "2\n6\n7 1 5 3 6 4\n3\n5 4 3\n");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["1 4", "0 1"]);
}

#[test]
fn test_every_subcommand_from_file() {
    let cases = [
        ("median", "1\n2\n1 3\n2 4\n", "2.5"),
        ("majority", "1\n9\n3 3 4 2 3 3 2 2 3\n", "3"),
        ("peak", "1\n6\n1 3 20 4 1 0\n", "2"),
        ("tree-min", "1\n3\n1.5 2 2.5\n", "1.5"),
        ("closest-pair", "1\n2\n0 0\n3 4\n", "0 1 5"),
        ("karatsuba", "1\n1234 5678\n", "7006652"),
    ];
    for (command, input, expected) in cases {
        let file = input_file(input);
        let path = file.path().to_str().unwrap();
        let output = run_with_stdin(&[command, "--input", path], "");
        assert!(output.status.success(), "{} failed", command);
        assert_eq!(stdout_lines(&output), vec![expected], "{}", command);
    }
}

#[test]
fn test_not_found_tokens() {
    let output = run_with_stdin(&["majority"], "1\n4\n1 2 1 2\n");
    assert_eq!(stdout_lines(&output), vec!["NO"]);

    let output = run_with_stdin(&["peak"], "1\n4\n1 2 3 4\n");
    assert_eq!(stdout_lines(&output), vec!["-1"]);
}

#[test]
fn test_malformed_input_exits_with_error() {
    let output = run_with_stdin(&["peak"], "1\n3\n1 two 3\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid input"), "stderr: {}", stderr);
}

#[test]
fn test_missing_file_exits_with_error() {
    let output = run_with_stdin(&["median", "--input", "/nonexistent/cases.txt"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn test_strict_reports_violations() {
    let output = run_with_stdin(&["median", "--strict"], "2\n2\n1 3\n2 4\n2\n3 1\n2 4\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output), vec!["2.5"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("case 2"), "stderr: {}", stderr);
    assert!(stderr.contains("not sorted"), "stderr: {}", stderr);
}

#[test]
fn test_json_output() {
    let output = run_with_stdin(&["max-gap", "--json"], "1\n6\n7 1 5 3 6 4\n");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["exercise"], "max-gap");
    assert_eq!(json[0]["answer"]["pair"]["buy"], 1);
    assert_eq!(json[0]["answer"]["pair"]["sell"], 4);
    assert_eq!(json[0]["answer"]["pair"]["diff"], 5);
}

#[test]
fn test_trace_goes_to_stderr() {
    let output = run_with_stdin(&["karatsuba", "--trace"], "1\n12 34\n");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["408"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CASE 1"), "stderr: {}", stderr);
    assert!(stderr.contains("combine"), "stderr: {}", stderr);
}

#[test]
fn test_trace_inline_with_json() {
    let output = run_with_stdin(&["closest-pair", "--trace", "--json"], "1\n4\n0 0\n5 5\n9 9\n5 6\n");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let trace = json[0]["trace"].as_array().unwrap();
    assert_eq!(trace[0]["type"], "enter");
    assert_eq!(json[0]["answer"]["pair"]["first"], 1);
    assert_eq!(json[0]["answer"]["pair"]["second"], 3);
}

#[test]
fn test_parallel_and_verbose() {
    let mut input = String::from("50\n");
    for i in 0..50 {
        input.push_str(&format!("3\n{} {} {}\n", i, i, i + 1));
    }
    let output = run_with_stdin(&["majority", "--parallel", "--verbose"], &input);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 50);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line, &i.to_string());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().filter(|l| l.contains("majority")).count(), 50);
}

#[test]
fn test_trace_flag_only_on_traced_commands() {
    let output = run_with_stdin(&["median", "--trace"], "0\n");
    assert_eq!(output.status.code(), Some(2));
}
