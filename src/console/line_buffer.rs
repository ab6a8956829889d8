//! Line buffer for console input
//!
//! Fixed capacity, cursor-aware. Every edit is a single bounds-checked
//! operation so the byte handler never does index arithmetic itself.

use heapless::Vec;

use crate::config::LINE_CAPACITY;

/// Printable ASCII (0x20..=0x7E).
#[inline]
pub const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E)
}

/// Line input buffer with an insertion cursor.
///
/// Invariant: `cursor <= len <= C - 1`, and the contents are printable ASCII.
/// One slot of `C` stays unused so a full line still fits a C string
/// terminator on the wire side.
pub struct LineBuffer<const C: usize = LINE_CAPACITY> {
    buf: Vec<u8, C>,
    cursor: usize,
}

impl<const C: usize> LineBuffer<C> {
    /// Maximum number of bytes a line can hold.
    pub const LIMIT: usize = C.saturating_sub(1);

    /// Create empty buffer
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            cursor: 0,
        }
    }

    /// Insert a byte at the cursor, shifting the tail right.
    ///
    /// Returns `false` (buffer untouched) if the byte is not printable or the
    /// line is full.
    pub fn insert(&mut self, byte: u8) -> bool {
        if !is_printable(byte) || self.buf.len() >= Self::LIMIT {
            return false;
        }
        if self.buf.insert(self.cursor, byte).is_err() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Remove the byte before the cursor, shifting the tail left.
    ///
    /// Returns `false` if the cursor is at the start.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.buf.remove(self.cursor);
        true
    }

    /// Returns `true` if the cursor moved.
    pub fn move_left(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Returns the byte stepped over, if the cursor moved.
    pub fn move_right(&mut self) -> Option<u8> {
        let byte = self.buf.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(byte)
    }

    /// Move the cursor to the end. Returns the bytes it stepped over.
    pub fn move_to_end(&mut self) -> &[u8] {
        let from = self.cursor;
        self.cursor = self.buf.len();
        &self.buf[from..]
    }

    /// Append printable bytes at the end of the line, up to capacity.
    ///
    /// Stops at the first non-printable byte. The cursor ends up at the end
    /// of the line. Returns the number of bytes appended.
    pub fn append(&mut self, bytes: &[u8]) -> usize {
        let room = Self::LIMIT.saturating_sub(self.buf.len());
        let take = bytes
            .iter()
            .take(room)
            .take_while(|b| is_printable(**b))
            .count();
        // Cannot fail: `take <= room`.
        let _ = self.buf.extend_from_slice(&bytes[..take]);
        self.cursor = self.buf.len();
        take
    }

    /// Replace contents, cursor at the end.
    pub fn set(&mut self, bytes: &[u8]) {
        self.clear();
        self.append(bytes);
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf).unwrap_or("")
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Bytes from the cursor to the end of the line.
    pub fn tail(&self) -> &[u8] {
        &self.buf[self.cursor..]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buf.len() >= Self::LIMIT
    }
}

impl<const C: usize> Default for LineBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}
