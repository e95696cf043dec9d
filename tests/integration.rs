use std::io::{Cursor, Write};
use std::process::{Command, Stdio};

use safe_input::error::handlers::status_code;
use safe_input::{InputError, LineReader, Status};

fn reader(input: &str) -> LineReader<Cursor<Vec<u8>>> {
    LineReader::new(Cursor::new(input.as_bytes().to_vec()))
}

// Run the demo binary with the given stdin and return its stdout
fn run_demo(stdin: &str, envs: &[(&str, &str)]) -> String {
    let mut command = Command::new(env!("CARGO_BIN_EXE_safe-input"));
    command
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("SAFE_INPUT_NAME_BUFFER_SIZE")
        .env_remove("SAFE_INPUT_MAX_ATTEMPTS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());
    for (key, value) in envs {
        command.env(key, value);
    }

    let mut child = command.spawn().unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_mixed_session_over_one_stream() {
    let long_name = "n".repeat(200);
    let mut reader = reader(&format!("{}\nAda\n  37\n1.5e2\nleftover line\nlast\n", long_name));
    let mut name = [0u8; 16];

    assert!(matches!(
        reader.read_line(&mut name),
        Err(InputError::BufferOverflow)
    ));
    let len = reader.read_line(&mut name).unwrap();
    assert_eq!(&name[..len], b"Ada");
    assert_eq!(reader.read_int().unwrap(), 37);
    assert_eq!(reader.read_float().unwrap(), 150.0);
    assert_eq!(reader.drain_line(), 14);

    let len = reader.read_line(&mut name).unwrap();
    assert_eq!(&name[..len], b"last");
    assert_eq!(reader.read_line(&mut name).unwrap(), 0);
}

#[test]
fn test_status_facade_matches_result_api() {
    let mut reader = reader("abc\n");
    let mut value = 0;
    let status = reader.scan_int(Some(&mut value));
    assert_eq!(status, Status::ConversionError);
    assert_eq!(status_code(status), -4);
}

#[test]
fn test_demo_happy_path() {
    let stdout = run_demo("Alice\n30\n1.754\n", &[]);
    assert!(stdout.contains("Enter your name: Hello, Alice! (5 chars read)"));
    assert!(stdout.contains("You are 30 years old"));
    assert!(stdout.contains("You are 1.75 meters tall"));
}

#[test]
fn test_demo_reports_each_failure() {
    let name = "x".repeat(60);
    let stdout = run_demo(&format!("{}\nabc\n1e400\n", name), &[]);
    assert!(stdout.contains("Error: Input exceeded buffer size."));
    assert!(stdout.contains("Error: Invalid integer format."));
    assert!(stdout.contains("Error: Double value out of range."));
}

#[test]
fn test_demo_integer_overflow_and_empty_input() {
    let stdout = run_demo("Bob\n99999999999999999999\n", &[]);
    assert!(stdout.contains("Error: Integer value out of range."));
    assert!(stdout.contains("Error: Invalid double format."));
}

#[test]
fn test_demo_retries_from_environment() {
    let stdout = run_demo(
        "Eve\nforty\n40\n1.6\n",
        &[("SAFE_INPUT_MAX_ATTEMPTS", "2")],
    );
    assert!(stdout.contains("Invalid input, please try again."));
    assert!(stdout.contains("You are 40 years old"));
    assert!(stdout.contains("You are 1.60 meters tall"));
}

#[test]
fn test_demo_name_buffer_from_environment() {
    let stdout = run_demo("Alexander\n1\n1\n", &[("SAFE_INPUT_NAME_BUFFER_SIZE", "8")]);
    assert!(stdout.contains("Error: Input exceeded buffer size."));
    assert!(stdout.contains("You are 1 years old"));
}
