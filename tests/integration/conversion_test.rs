//! End-to-end tests driving the xmlconv binary
//!
//! Covers both conversion directions, direction inference, the formatting
//! and validation modes, and error reporting for malformed input.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

// ============================================================================
// Test Helpers
// ============================================================================

fn run_xmlconv(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_xmlconv"))
        .args(args)
        .output()
        .expect("Failed to execute xmlconv")
}

fn run_xmlconv_with_stdin(args: &[&str], stdin_data: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_xmlconv"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn xmlconv");

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(stdin_data.as_bytes())
            .expect("Failed to write to stdin");
    }

    child.wait_with_output().expect("Failed to wait on child")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ============================================================================
// JSON to XML
// ============================================================================

mod json_to_xml {
    use super::*;

    #[test]
    fn test_simple_object_via_stdin() {
        let output = run_xmlconv_with_stdin(&["--stdin"], r#"{"name": "Alice", "age": 30}"#);

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.contains("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(stdout.contains("<root>"));
        assert!(stdout.contains("<name>Alice</name>"));
        assert!(stdout.contains("<age>30</age>"));
    }

    #[test]
    fn test_nested_object_indented() {
        let json = r#"{"person": {"name": "John", "address": {"city": "NYC"}}}"#;
        let output = run_xmlconv_with_stdin(&["--stdin"], json);

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.contains("  <person>\n"));
        assert!(stdout.contains("    <name>John</name>"));
        assert!(stdout.contains("      <city>NYC</city>"));
    }

    #[test]
    fn test_array_becomes_repeated_siblings() {
        let json = r#"{"hobbies": ["reading", "coding", "traveling"]}"#;
        let output = run_xmlconv_with_stdin(&["--stdin"], json);

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert_eq!(stdout.matches("<hobbies>").count(), 3);
        assert!(stdout.contains("<hobbies>reading</hobbies>"));
    }

    #[test]
    fn test_custom_root_name() {
        let output =
            run_xmlconv_with_stdin(&["--stdin", "--root", "person"], r#"{"name": "Bob"}"#);

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.contains("<person>"));
        assert!(stdout.contains("</person>"));
    }

    #[test]
    fn test_sort_keys() {
        let output =
            run_xmlconv_with_stdin(&["--stdin", "--sort-keys"], r#"{"b": 1, "a": 2}"#);

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        let a = stdout.find("<a>").expect("missing <a>");
        let b = stdout.find("<b>").expect("missing <b>");
        assert!(a < b);
    }

    #[test]
    fn test_rename_keys_to_snake() {
        let output = run_xmlconv_with_stdin(
            &["--stdin", "--rename-keys", "snake"],
            r#"{"userName": "x"}"#,
        );

        assert!(output.status.success());
        assert!(stdout_of(&output).contains("<user_name>x</user_name>"));
    }

    #[test]
    fn test_invalid_json_fails_with_parse_error() {
        let output = run_xmlconv_with_stdin(&["--stdin"], "{ invalid json }");

        assert!(!output.status.success());
        assert!(stderr_of(&output).contains("JSON parse error"));
    }

    #[test]
    fn test_raw_json_argument() {
        let output = run_xmlconv(&[r#"{"a": 1}"#]);

        assert!(output.status.success());
        assert!(stdout_of(&output).contains("<a>1</a>"));
    }
}

// ============================================================================
// XML to JSON
// ============================================================================

mod xml_to_json {
    use super::*;

    #[test]
    fn test_simple_document_via_stdin() {
        let output = run_xmlconv_with_stdin(
            &["--stdin"],
            "<person><name>John</name><age>30</age></person>",
        );

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.contains("\"person\""));
        assert!(stdout.contains("\"name\": \"John\""));
        assert!(stdout.contains("\"age\": \"30\""));
    }

    #[test]
    fn test_attributes_and_siblings() {
        let xml = r#"<library><book id="1"><title>A</title></book><book id="2"><title>B</title></book></library>"#;
        let output = run_xmlconv_with_stdin(&["--stdin"], xml);

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
        let books = &value["library"]["book"];
        assert!(books.is_array());
        assert_eq!(books[0]["@attributes"]["id"], "1");
        assert_eq!(books[1]["title"], "B");
    }

    #[test]
    fn test_explicit_direction_flag() {
        let output = run_xmlconv_with_stdin(
            &["--stdin", "--direction", "xml-to-json"],
            "<a><b>1</b></a>",
        );

        assert!(output.status.success());
        assert!(stdout_of(&output).contains("\"b\": \"1\""));
    }

    #[test]
    fn test_invalid_xml_fails_with_parse_error() {
        let output = run_xmlconv_with_stdin(&["--stdin"], "<a><b>text</a>");

        assert!(!output.status.success());
        assert!(stderr_of(&output).contains("XML parse error"));
    }

    #[test]
    fn test_unclosed_tag_fails() {
        let output = run_xmlconv_with_stdin(&["--stdin"], "<a><b>text</b>");

        assert!(!output.status.success());
        assert!(stderr_of(&output).contains("unclosed element"));
    }
}

// ============================================================================
// File input and output
// ============================================================================

mod files {
    use super::*;

    #[test]
    fn test_json_file_to_xml_file() {
        let tmp = tempdir().unwrap();
        let input = tmp.path().join("data.json");
        let output_path = tmp.path().join("data.xml");
        fs::write(&input, r#"{"greeting": "hello"}"#).unwrap();

        let output = run_xmlconv(&[
            input.to_str().unwrap(),
            "--output",
            output_path.to_str().unwrap(),
            "--quiet",
        ]);

        assert!(output.status.success());
        let written = fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("<greeting>hello</greeting>"));
    }

    #[test]
    fn test_direction_inferred_from_extension() {
        let tmp = tempdir().unwrap();
        let input = tmp.path().join("data.xml");
        fs::write(&input, "<a><b>1</b></a>").unwrap();

        let output = run_xmlconv(&[input.to_str().unwrap()]);

        assert!(output.status.success());
        assert!(stdout_of(&output).contains("\"b\": \"1\""));
    }

    #[test]
    fn test_missing_input_path_fails() {
        let output = run_xmlconv(&["no/such/file.json"]);

        assert!(!output.status.success());
        assert!(stderr_of(&output).contains("does not exist"));
    }

    #[test]
    fn test_no_input_fails() {
        let output = run_xmlconv(&[]);

        assert!(!output.status.success());
        assert!(stderr_of(&output).contains("No input provided"));
    }
}

// ============================================================================
// Formatting and validation modes
// ============================================================================

mod modes {
    use super::*;

    #[test]
    fn test_format_only_xml() {
        let output = run_xmlconv_with_stdin(
            &["--stdin", "--format-only"],
            "<a><b><c>1</c></b></a>",
        );

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.contains("<a>\n  <b>\n    <c>1</c>\n  </b>\n</a>"));
    }

    #[test]
    fn test_format_only_json() {
        let output = run_xmlconv_with_stdin(&["--stdin", "--format-only"], r#"{"a":{"b":1}}"#);

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.contains("{\n  \"a\": {\n    \"b\": 1\n  }\n}"));
    }

    #[test]
    fn test_validate_only_valid_json() {
        let output = run_xmlconv_with_stdin(&["--stdin", "--validate-only"], r#"{"a": 1}"#);

        assert!(output.status.success());
        assert!(stdout_of(&output).contains("✓ Valid JSON"));
    }

    #[test]
    fn test_validate_only_valid_xml() {
        let output = run_xmlconv_with_stdin(&["--stdin", "--validate-only"], "<a>1</a>");

        assert!(output.status.success());
        assert!(stdout_of(&output).contains("✓ Valid XML"));
    }

    #[test]
    fn test_validate_only_invalid_json() {
        let output = run_xmlconv_with_stdin(&["--stdin", "--validate-only"], "{ nope");

        assert!(!output.status.success());
    }

    #[test]
    fn test_stats_are_reported() {
        let output = run_xmlconv_with_stdin(&["--stdin", "--stats"], r#"{"a": 1}"#);

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.contains("Conversion Statistics:"));
        assert!(stdout.contains("Input size:"));
        assert!(stdout.contains("Output size:"));
    }
}
