//! Global log stream instances.
//!
//! One stream per execution context, so each ring has a single producer.

use crate::logging::LogStream;

/// Log stream for the byte handler (interrupt context).
///
/// Single producer (UART RX handler), single consumer (log drain).
pub static ISR_LOG_STREAM: LogStream = LogStream::new();

/// Log stream for the main loop (tokenizer, dispatcher, handlers).
pub static MAIN_LOG_STREAM: LogStream = LogStream::new();
