//! Command handler tests

use core::fmt::Write;

use rust_uart_console::console::commands::{dispatch, list_commands, CommandDescriptor, COMMANDS};
use rust_uart_console::console::tokenizer::{tokenize, TokenTable};
use rust_uart_console::console::ConsoleError;

fn run(line: &str, output: &mut TestOutput) -> Result<(), ConsoleError> {
    dispatch(&tokenize(line), COMMANDS, output)
}

#[test]
fn test_command_registry_has_all_commands() {
    let expected = ["add", "sub", "mul", "div"];

    for name in expected {
        assert!(
            COMMANDS.iter().any(|c| c.name == name),
            "Command '{}' should be in registry",
            name
        );
    }
    assert!(COMMANDS.iter().all(|c| !c.name.contains(' ')));
}

#[test]
fn test_arithmetic_results() {
    let cases = [
        ("add 3 4", "add = 7"),
        ("sub 3 10", "sub = -7"),
        ("mul -6 7", "mul = -42"),
        ("div 7 2", "div = 3"),
        ("div -9 3", "div = -3"),
    ];

    for (line, expected) in cases {
        let mut output = TestOutput::new();
        assert_eq!(run(line, &mut output), Ok(()), "{}", line);
        assert!(output.contains(expected), "{} -> {:?}", line, output.as_str());
    }
}

#[test]
fn test_extra_arguments_ignored() {
    let mut output = TestOutput::new();
    assert_eq!(run("add 1 2 99", &mut output), Ok(()));
    assert!(output.contains("add = 3"));
}

#[test]
fn test_unknown_command() {
    let mut output = TestOutput::new();
    let result = run("zzz 1 2", &mut output);

    assert_eq!(result, Err(ConsoleError::UnknownCommand));
    assert!(!result.unwrap_err().is_param_error());
    assert_eq!(output.as_str(), "");
}

#[test]
fn test_empty_line_is_ok() {
    let mut output = TestOutput::new();
    assert_eq!(run("", &mut output), Ok(()));
    assert_eq!(output.as_str(), "");
}

#[test]
fn test_missing_argument() {
    let result = run("add 3", &mut TestOutput::new());

    assert_eq!(result, Err(ConsoleError::MissingArg));
    assert!(result.unwrap_err().is_param_error());
    assert_eq!(run("mul", &mut TestOutput::new()), Err(ConsoleError::MissingArg));
}

#[test]
fn test_invalid_argument() {
    assert_eq!(run("add x 4", &mut TestOutput::new()), Err(ConsoleError::InvalidValue));
    assert_eq!(run("sub 1 2.5", &mut TestOutput::new()), Err(ConsoleError::InvalidValue));
}

#[test]
fn test_division_by_zero() {
    let mut output = TestOutput::new();
    let result = run("div 5 0", &mut output);

    assert_eq!(result, Err(ConsoleError::DivisionByZero));
    assert!(!output.contains("div ="));
}

#[test]
fn test_overflow_reported() {
    assert_eq!(run("add 2147483647 1", &mut TestOutput::new()), Err(ConsoleError::OutOfRange));
    assert_eq!(run("mul 65536 65536", &mut TestOutput::new()), Err(ConsoleError::OutOfRange));
    assert_eq!(run("div -2147483648 -1", &mut TestOutput::new()), Err(ConsoleError::OutOfRange));
    // Operand itself out of i32 range
    assert_eq!(run("add 2147483648 0", &mut TestOutput::new()), Err(ConsoleError::InvalidValue));
}

#[test]
fn test_ls_lists_every_command() {
    let mut output = TestOutput::new();
    assert_eq!(run("ls", &mut output), Ok(()));

    for cmd in COMMANDS {
        assert!(output.contains(cmd.name));
        assert!(output.contains(cmd.brief));
    }
    assert_eq!(list_commands(COMMANDS, &mut TestOutput::new()), COMMANDS.len());
}

#[test]
fn test_ls_shadows_table_entry() {
    static TABLE: &[CommandDescriptor] = &[CommandDescriptor {
        name: "ls",
        brief: "never runs",
        handler: cmd_fail,
    }];

    let mut output = TestOutput::new();
    assert_eq!(dispatch(&tokenize("ls"), TABLE, &mut output), Ok(()));
    assert!(output.contains("never runs"));
}

#[test]
fn test_duplicate_names_all_fire() {
    static TABLE: &[CommandDescriptor] = &[
        CommandDescriptor { name: "dup", brief: "first", handler: cmd_first },
        CommandDescriptor { name: "other", brief: "", handler: cmd_fail },
        CommandDescriptor { name: "dup", brief: "second", handler: cmd_second },
    ];

    let mut output = TestOutput::new();
    assert_eq!(dispatch(&tokenize("dup"), TABLE, &mut output), Ok(()));
    assert_eq!(output.as_str(), "first\r\nsecond\r\n");
}

#[test]
fn test_duplicate_names_return_first_error() {
    static TABLE: &[CommandDescriptor] = &[
        CommandDescriptor { name: "dup", brief: "", handler: cmd_fail },
        CommandDescriptor { name: "dup", brief: "", handler: cmd_second },
    ];

    let mut output = TestOutput::new();
    let result = dispatch(&tokenize("dup"), TABLE, &mut output);

    assert_eq!(result, Err(ConsoleError::InvalidValue));
    // Later duplicate still ran
    assert!(output.contains("second"));
}

#[test]
fn test_error_display() {
    assert_eq!(ConsoleError::UnknownCommand.to_string(), "E01: command not found");
    assert_eq!(ConsoleError::DivisionByZero.to_string(), "E05: division by zero");
    assert_eq!(ConsoleError::MissingArg.code(), "E03");
    assert_eq!(ConsoleError::MissingArg.to_string(), "E03: parameter invalid: missing");
}

fn cmd_first(_: &TokenTable, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let _ = out.write_str("first\r\n");
    Ok(())
}

fn cmd_second(_: &TokenTable, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let _ = out.write_str("second\r\n");
    Ok(())
}

fn cmd_fail(_: &TokenTable, _: &mut dyn Write) -> Result<(), ConsoleError> {
    Err(ConsoleError::InvalidValue)
}

// Test output buffer
struct TestOutput {
    buf: String,
}

impl TestOutput {
    fn new() -> Self {
        Self { buf: String::new() }
    }

    fn as_str(&self) -> &str {
        &self.buf
    }

    fn contains(&self, s: &str) -> bool {
        self.buf.contains(s)
    }
}

impl core::fmt::Write for TestOutput {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}
