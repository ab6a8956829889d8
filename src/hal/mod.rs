//! Hardware Abstraction Layer for the serial console.
//!
//! Thin wrappers around ESP-IDF peripherals.
//! Line editing stays in the console modules, HAL is just I/O.

pub mod serial;

pub use serial::{Echo, EchoWriter};
