//! Main-loop side of the console
//!
//! Polls the handoff, tokenizes the frozen line, dispatches, and re-arms
//! the byte handler by releasing the handoff.

use core::fmt::Write;

use super::{dispatch, CommandDescriptor, ConsoleError, LineHandoff, TokenTable, LIST_COMMAND};
use crate::config::{LINE_CAPACITY, VERSION};
use crate::con_debug;
use crate::log_globals::MAIN_LOG_STREAM;

/// Command processor, run from the main loop.
pub struct CommandProcessor<'a, const C: usize = LINE_CAPACITY> {
    handoff: &'a LineHandoff<C>,
    commands: &'a [CommandDescriptor],
    prompt: &'a str,
    /// Scratch table reused for every line.
    tokens: TokenTable,
}

impl<'a, const C: usize> CommandProcessor<'a, C> {
    pub const fn new(
        handoff: &'a LineHandoff<C>,
        commands: &'a [CommandDescriptor],
        prompt: &'a str,
    ) -> Self {
        Self {
            handoff,
            commands,
            prompt,
            tokens: TokenTable::new(),
        }
    }

    /// Process the pending line, if any.
    ///
    /// Returns `None` if nothing was pending, otherwise the dispatch result
    /// (already reported on `out`).
    pub fn poll(&mut self, out: &mut dyn Write) -> Option<Result<(), ConsoleError>> {
        let tokens = &mut self.tokens;
        self.handoff.with_line(|line| tokens.fill(line))?;

        let _ = out.write_str("\r\n");
        let result = dispatch(&self.tokens, self.commands, out);
        match result {
            Ok(()) => con_debug!(MAIN_LOG_STREAM, "'{}' done", self.tokens.command()),
            Err(e) => {
                let _ = write!(out, "{}\r\n", e);
            }
        }

        self.tokens.clear();
        self.handoff.release();
        self.print_prompt(out);

        Some(result)
    }

    /// Print the prompt
    pub fn print_prompt(&self, out: &mut dyn Write) {
        let _ = out.write_str(self.prompt);
    }

    /// Print welcome banner
    pub fn print_banner(&self, out: &mut dyn Write) {
        let _ = write!(out, "\r\n{}\r\n", VERSION);
        let _ = write!(out, "Type '{}' for commands.\r\n", LIST_COMMAND);
        self.print_prompt(out);
    }
}
