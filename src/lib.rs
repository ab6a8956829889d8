//! # RustUartConsole
//!
//! Interactive line-editing console for byte-oriented serial links.
//!
//! ## Architecture
//!
//! ```text
//! UART RX IRQ ──▶ Console::on_byte ──echo──▶ UART TX
//!                       │
//!                 LineHandoff (ready flag)
//!                       │
//! main loop ────▶ CommandProcessor::poll ──▶ tokenize ──▶ dispatch ──▶ handler
//! ```
//!
//! - The byte handler owns the line buffer, escape decoder and history.
//! - The main loop only sees a completed line, frozen in the handoff.
//! - No locks, no heap: the ready flag is the only synchronization.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod hal;
pub mod log_globals;
pub mod logging;
pub mod uart_logger;

pub use config::{ConsoleConfig, VERSION};
pub use console::{CommandProcessor, Console, ConsoleError, LineHandoff, COMMANDS};
pub use hal::{Echo, EchoWriter};
pub use log_globals::{ISR_LOG_STREAM, MAIN_LOG_STREAM};
