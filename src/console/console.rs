//! Byte input state machine (interrupt context)
//!
//! One call per received byte. Each call does a bounded amount of buffer
//! work and echo, never blocks, and leaves the terminal line, the line
//! buffer and the cursor in lock-step.

use super::completion::{self, Completion};
use super::escape::{ArrowKey, EscapeDecoder, EscapeState, EscapeStep, ESC};
use super::history::{HistoryRing, Recall};
use super::line_buffer::LineBuffer;
use super::{command_names, CommandDescriptor, LineHandoff};
use crate::config::{HISTORY_DEPTH, HISTORY_LINE_CAPACITY, LINE_CAPACITY};
use crate::hal::Echo;
use crate::log_globals::ISR_LOG_STREAM;
use crate::{con_debug, con_trace, con_warn};

const BS: u8 = 0x08;
const HT: u8 = 0x09;
const LF: u8 = 0x0A;
const CR: u8 = 0x0D;

/// Backspace, space, backspace: erase one character left of the cursor.
const ERASE: &[u8] = b"\x08 \x08";

/// Console line editor, owned by the receive interrupt.
pub struct Console<
    'a,
    const C: usize = LINE_CAPACITY,
    const H: usize = HISTORY_DEPTH,
    const W: usize = HISTORY_LINE_CAPACITY,
> {
    line: LineBuffer<C>,
    escape: EscapeDecoder,
    history: HistoryRing<H, W>,
    handoff: &'a LineHandoff<C>,
    commands: &'a [CommandDescriptor],
    prompt: &'a str,
    /// Set while input is being dropped for the current pending line.
    dropping: bool,
}

impl<'a, const C: usize, const H: usize, const W: usize> Console<'a, C, H, W> {
    /// Create new console
    pub const fn new(
        handoff: &'a LineHandoff<C>,
        commands: &'a [CommandDescriptor],
        prompt: &'a str,
    ) -> Self {
        Self {
            line: LineBuffer::new(),
            escape: EscapeDecoder::new(),
            history: HistoryRing::new(),
            handoff,
            commands,
            prompt,
            dropping: false,
        }
    }

    /// Process a single input byte
    ///
    /// While a submitted line is still pending in the handoff, the byte is
    /// dropped without touching any state.
    pub fn on_byte(&mut self, byte: u8, tx: &mut dyn Echo) {
        if self.handoff.is_pending() {
            let total = self.handoff.note_dropped();
            if !self.dropping {
                self.dropping = true;
                con_warn!(ISR_LOG_STREAM, "line pending, dropping input (total {})", total);
            }
            return;
        }
        self.dropping = false;

        if byte == ESC || self.escape.is_active() {
            match self.escape.advance(byte) {
                EscapeStep::Pending => {}
                EscapeStep::Key(key) => self.on_arrow(key, tx),
                EscapeStep::Aborted(b) => {
                    con_trace!(ISR_LOG_STREAM, "escape sequence aborted by {:#04x}", b);
                }
            }
            return;
        }

        match byte {
            CR | LF => self.submit(),
            BS => self.backspace(tx),
            HT => self.complete(tx),
            0x20..=0x7E => self.insert(byte, tx),
            _ => {}
        }
    }

    fn on_arrow(&mut self, key: ArrowKey, tx: &mut dyn Echo) {
        match key {
            ArrowKey::Up => {
                if let Some(entry) = self.history.navigate_up() {
                    redraw(&mut self.line, entry, tx);
                }
            }
            ArrowKey::Down => match self.history.navigate_down() {
                Some(Recall::Entry(entry)) => redraw(&mut self.line, entry, tx),
                Some(Recall::Blank) => redraw(&mut self.line, &[], tx),
                None => {}
            },
            ArrowKey::Right => {
                if let Some(b) = self.line.move_right() {
                    tx.echo(&[b]);
                }
            }
            ArrowKey::Left => {
                if self.line.move_left() {
                    tx.echo(&[BS]);
                }
            }
        }
    }

    fn insert(&mut self, byte: u8, tx: &mut dyn Echo) {
        if !self.line.insert(byte) {
            con_trace!(ISR_LOG_STREAM, "line full, {:#04x} ignored", byte);
            return;
        }

        // Inserted byte plus the shifted tail, then back to the cursor.
        let from = self.line.cursor() - 1;
        tx.echo(&self.line.as_bytes()[from..]);
        step_back(tx, self.line.tail().len());
    }

    fn backspace(&mut self, tx: &mut dyn Echo) {
        if !self.line.backspace() {
            return;
        }

        tx.echo(&[BS]);
        tx.echo(self.line.tail());
        tx.echo(b" ");
        step_back(tx, self.line.tail().len() + 1);
    }

    fn complete(&mut self, tx: &mut dyn Echo) {
        match completion::complete(self.line.as_str(), command_names(self.commands)) {
            Completion::NoMatch => {
                con_trace!(ISR_LOG_STREAM, "no completion for '{}'", self.line.as_str());
            }
            Completion::Unique(name) => {
                let suffix = name.as_bytes().get(self.line.len()..).unwrap_or(&[]);
                tx.echo(self.line.move_to_end());
                let appended = self.line.append(suffix);
                tx.echo(&suffix[..appended]);
            }
            Completion::Ambiguous(count) => {
                con_trace!(ISR_LOG_STREAM, "{} completions for '{}'", count, self.line.as_str());
                tx.echo(b"\r\n");
                for name in completion::matches(self.line.as_str(), command_names(self.commands)) {
                    tx.echo(name.as_bytes());
                    tx.echo(b"\r\n");
                }
                tx.echo(self.prompt.as_bytes());
                tx.echo(self.line.as_bytes());
                step_back(tx, self.line.tail().len());
            }
        }
    }

    fn submit(&mut self) {
        self.escape.reset();

        let line = self.line.as_bytes();
        if !line.is_empty() {
            self.history.push(line);
            con_trace!(ISR_LOG_STREAM, "history entry {}", self.history.write_count() - 1);
        }
        // Cannot fail: pending was checked on entry.
        let _ = self.handoff.publish(line);
        con_debug!(ISR_LOG_STREAM, "line submitted ({} bytes)", line.len());

        self.line.clear();
    }

    /// Line being edited.
    pub fn line(&self) -> &LineBuffer<C> {
        &self.line
    }

    pub fn history(&self) -> &HistoryRing<H, W> {
        &self.history
    }

    pub fn escape_state(&self) -> EscapeState {
        self.escape.state()
    }

    pub fn prompt(&self) -> &str {
        self.prompt
    }
}

/// Replace the visible line with `entry`, cursor at the end.
fn redraw<const C: usize>(line: &mut LineBuffer<C>, entry: &[u8], tx: &mut dyn Echo) {
    tx.echo(line.move_to_end());
    for _ in 0..line.len() {
        tx.echo(ERASE);
    }
    line.set(entry);
    tx.echo(line.as_bytes());
}

/// Move the terminal cursor `n` columns left.
fn step_back(tx: &mut dyn Echo, n: usize) {
    for _ in 0..n {
        tx.echo(&[BS]);
    }
}
