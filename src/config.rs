//! Module: config
//!
//! Purpose: Process-level constants for the serial console.
//!
//! Every fixed-capacity buffer in the crate takes its size as a const generic
//! parameter whose default lives here. Changing a constant resizes the whole
//! pipeline at compile time; nothing is allocated at runtime.

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Line buffer capacity `C`. One byte is reserved, so at most `C - 1`
/// printable characters can be typed on a line.
pub const LINE_CAPACITY: usize = 128;

/// Number of submitted lines the history ring keeps (`H`).
pub const HISTORY_DEPTH: usize = 10;

/// Bytes stored per history slot. Longer lines are truncated.
pub const HISTORY_LINE_CAPACITY: usize = 128;

/// Maximum number of tokens per line (`T`), command name included.
pub const MAX_TOKENS: usize = 8;

/// Token storage size (`L`). Tokens keep at most `L - 1` bytes.
pub const MAX_TOKEN_LEN: usize = 16;

/// Prompt printed before every input line.
pub const DEFAULT_PROMPT: &str = "console> ";

/// Console UART baud rate.
pub const CONSOLE_BAUD_RATE: u32 = 115_200;

/// Log UART baud rate.
pub const LOG_BAUD_RATE: u32 = 115_200;

/// Runtime console settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub prompt: &'static str,
    pub baud_rate: u32,
    pub log_baud_rate: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT,
            baud_rate: CONSOLE_BAUD_RATE,
            log_baud_rate: LOG_BAUD_RATE,
        }
    }
}
