//! Command table and dispatcher

use core::fmt::Write;

use super::tokenizer::TokenTable;
use super::ConsoleError;
use crate::log_globals::MAIN_LOG_STREAM;
use crate::{con_debug, con_info};

/// Command handler. Reads its arguments from the token table and writes
/// results to `out`.
pub type Handler = fn(&TokenTable, &mut dyn Write) -> Result<(), ConsoleError>;

/// Command descriptor
pub struct CommandDescriptor {
    /// Lookup name; printable ASCII, no spaces.
    pub name: &'static str,
    /// Usage line shown by `ls` and on ambiguous completion.
    pub brief: &'static str,
    pub handler: Handler,
}

/// Built-in listing command, resolved before the table.
pub const LIST_COMMAND: &str = "ls";

/// All available commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "add", brief: "add [parm1] [parm2]", handler: cmd_add },
    CommandDescriptor { name: "sub", brief: "sub [parm1] [parm2]", handler: cmd_sub },
    CommandDescriptor { name: "mul", brief: "mul [parm1] [parm2]", handler: cmd_mul },
    CommandDescriptor { name: "div", brief: "div [parm1] [parm2]", handler: cmd_div },
];

/// Dispatch a tokenized line against `table`.
///
/// Every entry whose name matches fires, in table order. Handler errors do
/// not stop later duplicates; the first one is returned.
pub fn dispatch(
    tokens: &TokenTable,
    table: &[CommandDescriptor],
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let name = tokens.command();
    if name.is_empty() {
        return Ok(()); // Empty line, do nothing
    }

    if name == LIST_COMMAND {
        list_commands(table, out);
        return Ok(());
    }

    let mut found = 0usize;
    let mut first_err = None;

    for cmd in table.iter().filter(|c| c.name == name) {
        found += 1;
        if let Err(e) = (cmd.handler)(tokens, out) {
            con_debug!(MAIN_LOG_STREAM, "{}: {}", cmd.name, e);
            first_err.get_or_insert(e);
        }
    }

    if found == 0 {
        con_info!(MAIN_LOG_STREAM, "unknown command '{}'", name);
        return Err(ConsoleError::UnknownCommand);
    }

    first_err.map_or(Ok(()), Err)
}

/// Print every entry's name and description. Returns the entry count.
pub fn list_commands(table: &[CommandDescriptor], out: &mut dyn Write) -> usize {
    let _ = write!(out, "-------------------- commands --------------------\r\n");
    for c in table {
        let _ = write!(out, "  {:<10} {}\r\n", c.name, c.brief);
    }
    let _ = write!(out, "--------------------------------------------------\r\n");
    table.len()
}

/// Get all command names for completion
pub fn command_names(table: &[CommandDescriptor]) -> impl Iterator<Item = &'static str> + '_ {
    table.iter().map(|c| c.name)
}

// --- Command Implementations ---

/// Both operands of a binary arithmetic command.
fn operands(tokens: &TokenTable) -> Result<(i32, i32), ConsoleError> {
    let lhs = tokens.arg(0).ok_or(ConsoleError::MissingArg)?;
    let rhs = tokens.arg(1).ok_or(ConsoleError::MissingArg)?;

    let lhs: i32 = lhs.parse().map_err(|_| ConsoleError::InvalidValue)?;
    let rhs: i32 = rhs.parse().map_err(|_| ConsoleError::InvalidValue)?;
    Ok((lhs, rhs))
}

fn report(out: &mut dyn Write, op: &str, value: i32) -> Result<(), ConsoleError> {
    let _ = write!(out, "{} = {}\r\n", op, value);
    Ok(())
}

fn cmd_add(tokens: &TokenTable, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let (a, b) = operands(tokens)?;
    report(out, "add", a.checked_add(b).ok_or(ConsoleError::OutOfRange)?)
}

fn cmd_sub(tokens: &TokenTable, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let (a, b) = operands(tokens)?;
    report(out, "sub", a.checked_sub(b).ok_or(ConsoleError::OutOfRange)?)
}

fn cmd_mul(tokens: &TokenTable, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let (a, b) = operands(tokens)?;
    report(out, "mul", a.checked_mul(b).ok_or(ConsoleError::OutOfRange)?)
}

fn cmd_div(tokens: &TokenTable, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let (a, b) = operands(tokens)?;
    if b == 0 {
        return Err(ConsoleError::DivisionByZero);
    }
    // i32::MIN / -1 is the only remaining overflow.
    report(out, "div", a.checked_div(b).ok_or(ConsoleError::OutOfRange)?)
}
