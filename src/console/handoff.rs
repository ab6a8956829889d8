//! Completed-line handoff between the byte handler and the main loop.
//!
//! # Protocol
//!
//! ```text
//! RX interrupt                 LineHandoff                 Main loop
//! ────────────                 ───────────                 ─────────
//! publish(line) ──copy──▶ [line][ready=1] ──with_line()──▶ tokenize
//!                                  ▲                           │
//! bytes dropped while ready=1      └──────── release() ◀───────┘
//! ```
//!
//! - Capacity one: a second line cannot be published until the first is
//!   released. The byte handler drops input meanwhile.
//! - `ready` is the only synchronization: Release on every store, Acquire on
//!   every load. The line bytes are owned by whichever side `ready` says.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use heapless::Vec;

use crate::config::LINE_CAPACITY;

/// Single-producer, single-consumer slot for one submitted line.
pub struct LineHandoff<const C: usize = LINE_CAPACITY> {
    line: UnsafeCell<Vec<u8, C>>,
    /// True while a line awaits processing.
    ready: AtomicBool,
    /// Bytes dropped because a line was pending (never cleared).
    dropped: AtomicU32,
    /// Lines published since boot.
    published: AtomicU32,
}

// SAFETY: `line` is written only by the producer while `ready` is false and
// read/cleared only by the consumer while `ready` is true. The flag flips
// with Release and is observed with Acquire, ordering the buffer accesses.
unsafe impl<const C: usize> Sync for LineHandoff<C> {}
unsafe impl<const C: usize> Send for LineHandoff<C> {}

impl<const C: usize> LineHandoff<C> {
    pub const fn new() -> Self {
        Self {
            line: UnsafeCell::new(Vec::new()),
            ready: AtomicBool::new(false),
            dropped: AtomicU32::new(0),
            published: AtomicU32::new(0),
        }
    }

    /// Producer: copy `line` in and raise the ready flag.
    ///
    /// Returns `false` (nothing written) if a line is still pending.
    /// Lines longer than `C` bytes are truncated.
    pub fn publish(&self, line: &[u8]) -> bool {
        if self.ready.load(Ordering::Acquire) {
            return false;
        }

        // SAFETY: ready is false, so the consumer does not touch the buffer,
        // and only the producer can set it.
        unsafe {
            let slot = &mut *self.line.get();
            slot.clear();
            let len = line.len().min(C);
            let _ = slot.extend_from_slice(&line[..len]);
        }

        self.published.fetch_add(1, Ordering::Relaxed);
        self.ready.store(true, Ordering::Release);
        true
    }

    /// Is a line waiting for the main loop?
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Consumer: run `f` on the pending line without releasing it.
    ///
    /// Returns `None` if no line is pending.
    pub fn with_line<R>(&self, f: impl FnOnce(&str) -> R) -> Option<R> {
        if !self.ready.load(Ordering::Acquire) {
            return None;
        }

        // SAFETY: ready is true, so the producer does not write until release().
        let slot = unsafe { &*self.line.get() };
        Some(f(core::str::from_utf8(slot).unwrap_or("")))
    }

    /// Consumer: clear the backing store and lower the ready flag.
    ///
    /// No-op if nothing is pending.
    pub fn release(&self) {
        if !self.ready.load(Ordering::Acquire) {
            return;
        }

        // SAFETY: ready is still true, the buffer belongs to the consumer.
        unsafe {
            (*self.line.get()).clear();
        }
        self.ready.store(false, Ordering::Release);
    }

    /// Producer: count one byte dropped under backpressure.
    ///
    /// Returns the new total.
    #[inline]
    pub fn note_dropped(&self) -> u32 {
        self.dropped.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn published(&self) -> u32 {
        self.published.load(Ordering::Relaxed)
    }
}

impl<const C: usize> Default for LineHandoff<C> {
    fn default() -> Self {
        Self::new()
    }
}
