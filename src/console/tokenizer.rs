//! Command line tokenizer
//!
//! Splits on the ASCII space into at most `T` tokens of at most `L - 1`
//! bytes. Runs of spaces count as one separator, so no empty tokens are
//! produced. Tokens past the `T`-th are dropped together with the rest of
//! the line; over-long tokens are truncated.

use heapless::{String, Vec};

use crate::config::{MAX_TOKENS, MAX_TOKEN_LEN};

/// Fixed-capacity token table, rebuilt for every submitted line.
#[derive(Debug, Clone, Default)]
pub struct TokenTable<const T: usize = MAX_TOKENS, const L: usize = MAX_TOKEN_LEN> {
    tokens: Vec<String<L>, T>,
}

impl<const T: usize, const L: usize> TokenTable<T, L> {
    /// Bytes kept per token.
    pub const TOKEN_LIMIT: usize = L.saturating_sub(1);

    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Tokenize a line into a fresh table.
    pub fn parse(line: &str) -> Self {
        let mut table = Self::new();
        table.fill(line);
        table
    }

    /// Replace the contents with the tokens of `line`.
    pub fn fill(&mut self, line: &str) {
        self.tokens.clear();

        for field in line.split(' ').filter(|f| !f.is_empty()) {
            let mut token = String::new();
            // Cannot fail: truncated to the token limit.
            let _ = token.push_str(truncate(field, Self::TOKEN_LIMIT));
            if self.tokens.push(token).is_err() {
                break;
            }
        }
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Token by index; empty string if absent.
    pub fn get(&self, idx: usize) -> &str {
        self.tokens.get(idx).map(|t| t.as_str()).unwrap_or("")
    }

    /// The command name (token 0); empty for a blank line.
    pub fn command(&self) -> &str {
        self.get(0)
    }

    /// Argument by index (0-based, after the command name).
    pub fn arg(&self, idx: usize) -> Option<&str> {
        self.tokens.get(idx + 1).map(|t| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Tokenize with the configured limits.
pub fn tokenize(line: &str) -> TokenTable {
    TokenTable::parse(line)
}

/// Longest prefix of `s` within `max` bytes that ends on a char boundary.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
