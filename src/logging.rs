//! Non-blocking logging for the serial console.
//!
//! # Architecture
//!
//! ```text
//! Byte handler           LogStream            Main loop
//! ────────────           ─────────            ─────────
//!
//! con_warn!() ─────────▶ [L0][L1][L2] ──────▶ log UART
//! interrupt context       lock-free           drain_logs()
//! never blocks            ring buffer         blocking ok
//! ```
//!
//! # Rules
//!
//! - The byte handler never formats into the console UART; it only pushes here.
//! - Push never blocks. Messages are dropped (and counted) when the ring is full.
//! - Entries carry a sequence number instead of a timestamp: the console core
//!   has no clock.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Maximum message length.
pub const MAX_MSG_LEN: usize = 96;

/// Log buffer size (number of entries).
pub const LOG_BUFFER_SIZE: usize = 64;

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    /// Convert to string for output.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// A single log entry.
#[derive(Clone, Copy)]
pub struct LogEntry {
    /// Position of the entry in its stream (wraps at `u32::MAX`).
    pub seq: u32,
    pub level: LogLevel,
    /// Message length.
    pub len: u8,
    /// Message bytes (not null-terminated).
    pub msg: [u8; MAX_MSG_LEN],
}

impl LogEntry {
    const EMPTY: Self = Self {
        seq: 0,
        level: LogLevel::Info,
        len: 0,
        msg: [0; MAX_MSG_LEN],
    };

    /// Message text, or a placeholder if the bytes were cut inside a character.
    pub fn message(&self) -> &str {
        core::str::from_utf8(&self.msg[..self.len as usize]).unwrap_or("<invalid utf8>")
    }
}

impl Default for LogEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Lock-free log stream with a single consumer.
///
/// Producers reserve a slot with a compare-exchange on `write_idx`, fill it,
/// then raise the slot's `committed` flag with Release. The consumer only
/// copies a slot whose flag it observes with Acquire, so a reserved but
/// unfinished slot is never read; draining stops there until it commits.
/// Each execution context gets its own stream (see [`crate::log_globals`]).
pub struct LogStream<const N: usize = LOG_BUFFER_SIZE> {
    entries: UnsafeCell<[LogEntry; N]>,
    committed: [AtomicBool; N],
    write_idx: AtomicU32,
    read_idx: AtomicU32,
    dropped: AtomicU32,
}

// SAFETY: a slot is written only by the producer that reserved it, and read
// only by the consumer after its committed flag is set (Release/Acquire).
// The consumer clears the flag before advancing read_idx, and producers
// reuse a slot only once read_idx has passed it.
unsafe impl<const N: usize> Sync for LogStream<N> {}
unsafe impl<const N: usize> Send for LogStream<N> {}

impl<const N: usize> LogStream<N> {
    const MASK: usize = N - 1;

    /// Create a new empty log stream.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Log buffer size must be power of 2");

        Self {
            entries: UnsafeCell::new([LogEntry::EMPTY; N]),
            committed: [const { AtomicBool::new(false) }; N],
            write_idx: AtomicU32::new(0),
            read_idx: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Push a log entry (never blocks).
    ///
    /// Returns `true` if message was queued, `false` if dropped (ring full).
    /// Messages longer than [`MAX_MSG_LEN`] are truncated.
    #[inline]
    pub fn push(&self, level: LogLevel, msg: &[u8]) -> bool {
        let mut write = self.write_idx.load(Ordering::Relaxed);
        loop {
            let read = self.read_idx.load(Ordering::Acquire);
            if write.wrapping_sub(read) >= N as u32 {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                return false;
            }
            match self.write_idx.compare_exchange_weak(
                write,
                write.wrapping_add(1),
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(current) => write = current,
            }
        }

        let idx = (write as usize) & Self::MASK;
        let len = msg.len().min(MAX_MSG_LEN);

        // SAFETY: the compare-exchange made `idx` ours alone, and the
        // consumer does not read it until `committed[idx]` is set below.
        unsafe {
            let entry = &mut (*self.entries.get())[idx];
            entry.seq = write;
            entry.level = level;
            entry.len = len as u8;
            entry.msg[..len].copy_from_slice(&msg[..len]);
        }

        self.committed[idx].store(true, Ordering::Release);
        true
    }

    /// Drain next log entry (single consumer).
    ///
    /// Returns `None` if no entries are available, or if the oldest one is
    /// reserved but not yet committed.
    #[inline]
    pub fn drain(&self) -> Option<LogEntry> {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);

        if read == write {
            return None;
        }

        let idx = (read as usize) & Self::MASK;
        if !self.committed[idx].load(Ordering::Acquire) {
            return None;
        }

        // SAFETY: single consumer, slot committed by its producer
        let entry = unsafe { (*self.entries.get())[idx] };

        self.committed[idx].store(false, Ordering::Relaxed);
        self.read_idx.store(read.wrapping_add(1), Ordering::Release);
        Some(entry)
    }

    /// Get count of dropped messages.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Reset dropped counter (e.g., after reporting).
    #[inline]
    pub fn reset_dropped(&self) {
        self.dropped.store(0, Ordering::Relaxed);
    }

    #[inline]
    pub fn has_entries(&self) -> bool {
        self.pending() != 0
    }

    /// Get number of entries waiting to be drained.
    #[inline]
    pub fn pending(&self) -> u32 {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        write.wrapping_sub(read)
    }
}

impl<const N: usize> Default for LogStream<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a message into a buffer, truncating at the buffer end.
///
/// Returns the number of bytes written.
#[inline]
pub fn format_to_buffer(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> usize {
    let mut writer = SliceWriter { buf, pos: 0 };
    let _ = core::fmt::write(&mut writer, args);
    writer.pos
}

/// `core::fmt::Write` over a byte slice that silently truncates.
pub(crate) struct SliceWriter<'a> {
    pub(crate) buf: &'a mut [u8],
    pub(crate) pos: usize,
}

impl core::fmt::Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let bytes = s.as_bytes();
        let remaining = self.buf.len() - self.pos;
        let to_write = bytes.len().min(remaining);
        self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
        self.pos += to_write;
        Ok(())
    }
}

/// Non-blocking log macro.
///
/// # Example
///
/// ```ignore
/// con_log!(LogLevel::Info, ISR_LOG_STREAM, "line ready ({} bytes)", len);
/// ```
#[macro_export]
macro_rules! con_log {
    ($level:expr, $stream:expr, $($arg:tt)*) => {{
        let mut buf = [0u8; $crate::logging::MAX_MSG_LEN];
        let len = $crate::logging::format_to_buffer(&mut buf, format_args!($($arg)*));
        $stream.push($level, &buf[..len]);
    }};
}

#[macro_export]
macro_rules! con_error {
    ($stream:expr, $($arg:tt)*) => {
        $crate::con_log!($crate::logging::LogLevel::Error, $stream, $($arg)*)
    };
}

#[macro_export]
macro_rules! con_warn {
    ($stream:expr, $($arg:tt)*) => {
        $crate::con_log!($crate::logging::LogLevel::Warn, $stream, $($arg)*)
    };
}

#[macro_export]
macro_rules! con_info {
    ($stream:expr, $($arg:tt)*) => {
        $crate::con_log!($crate::logging::LogLevel::Info, $stream, $($arg)*)
    };
}

#[macro_export]
macro_rules! con_debug {
    ($stream:expr, $($arg:tt)*) => {
        $crate::con_log!($crate::logging::LogLevel::Debug, $stream, $($arg)*)
    };
}

/// Maximum verbosity.
#[macro_export]
macro_rules! con_trace {
    ($stream:expr, $($arg:tt)*) => {
        $crate::con_log!($crate::logging::LogLevel::Trace, $stream, $($arg)*)
    };
}
