//! Command history ring
//!
//! Static allocation: `H` slots of `W` bytes each.
//!
//! Positions are logical indices into an unbounded history. `write_count`
//! only ever grows; the physical slot of logical index `i` is `i % H`. Only
//! the last `H` indices are retrievable. Counters are `u64`: at one line per
//! microsecond they would take over 500 000 years to wrap.

use heapless::Vec;

use crate::config::{HISTORY_DEPTH, HISTORY_LINE_CAPACITY};

/// Result of moving towards newer entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// A stored line.
    Entry(&'a [u8]),
    /// Past the newest entry: the blank input line.
    Blank,
}

/// Bounded circular log of submitted lines.
pub struct HistoryRing<const H: usize = HISTORY_DEPTH, const W: usize = HISTORY_LINE_CAPACITY> {
    slots: [Vec<u8, W>; H],
    /// Lines pushed since creation (never reset).
    write_count: u64,
    /// Navigation position; `write_count` means "blank, newest".
    read_cursor: u64,
}

impl<const H: usize, const W: usize> HistoryRing<H, W> {
    /// Create empty history
    pub const fn new() -> Self {
        const { assert!(H > 0, "History depth must be non-zero") };

        Self {
            slots: [const { Vec::new() }; H],
            write_count: 0,
            read_cursor: 0,
        }
    }

    /// Record a submitted line and reset navigation to the blank position.
    ///
    /// Empty lines are ignored. Lines longer than `W` bytes are truncated.
    pub fn push(&mut self, line: &[u8]) {
        if line.is_empty() {
            return;
        }

        let slot = &mut self.slots[Self::slot_of(self.write_count)];
        let len = line.len().min(W);
        slot.clear();
        // Cannot fail: `len <= W`.
        let _ = slot.extend_from_slice(&line[..len]);

        self.write_count += 1;
        self.read_cursor = self.write_count;
    }

    /// Step to the next older entry.
    ///
    /// Returns `None` (no movement) when history is empty or the cursor is
    /// already at the oldest retrievable entry.
    pub fn navigate_up(&mut self) -> Option<&[u8]> {
        if self.read_cursor <= self.oldest() {
            return None;
        }

        self.read_cursor -= 1;
        Some(self.slots[Self::slot_of(self.read_cursor)].as_slice())
    }

    /// Step to the next newer entry, or to the blank line past the newest.
    ///
    /// Returns `None` (no movement) when already at the blank position.
    pub fn navigate_down(&mut self) -> Option<Recall<'_>> {
        if self.read_cursor >= self.write_count {
            return None;
        }

        self.read_cursor += 1;
        if self.read_cursor == self.write_count {
            Some(Recall::Blank)
        } else {
            Some(Recall::Entry(self.slots[Self::slot_of(self.read_cursor)].as_slice()))
        }
    }

    /// Logical index of the oldest retrievable entry.
    pub fn oldest(&self) -> u64 {
        self.write_count.saturating_sub(H as u64)
    }

    /// Entry at a logical index, if still retrievable.
    pub fn get(&self, index: u64) -> Option<&[u8]> {
        if index < self.oldest() || index >= self.write_count {
            return None;
        }
        Some(self.slots[Self::slot_of(index)].as_slice())
    }

    /// Retrievable entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (self.oldest()..self.write_count).map(move |i| self.slots[Self::slot_of(i)].as_slice())
    }

    /// Abandon navigation without pushing.
    pub fn reset_view(&mut self) {
        self.read_cursor = self.write_count;
    }

    /// Number of retrievable entries.
    pub fn len(&self) -> usize {
        (self.write_count - self.oldest()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.write_count == 0
    }

    pub fn write_count(&self) -> u64 {
        self.write_count
    }

    pub fn read_cursor(&self) -> u64 {
        self.read_cursor
    }

    #[inline]
    fn slot_of(index: u64) -> usize {
        (index % H as u64) as usize
    }
}

impl<const H: usize, const W: usize> Default for HistoryRing<H, W> {
    fn default() -> Self {
        Self::new()
    }
}
