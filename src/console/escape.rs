//! Arrow-key escape sequence decoder
//!
//! Recognizes `ESC [ A|B|C|D` purely by byte pattern. There is no inter-byte
//! timeout: an unexpected byte simply returns the decoder to idle.

/// Escape character.
pub const ESC: u8 = 0x1B;

/// Decoder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeState {
    Idle,
    /// Got ESC
    SawEscape,
    /// Got ESC [
    SawBracket,
}

/// Arrow keys, by final byte of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    /// `A`: older history entry
    Up,
    /// `B`: newer history entry
    Down,
    /// `C`: cursor right
    Right,
    /// `D`: cursor left
    Left,
}

/// Outcome of feeding one byte to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeStep {
    /// Byte consumed, sequence still open.
    Pending,
    /// Sequence complete.
    Key(ArrowKey),
    /// Byte did not continue a known sequence; decoder is idle again.
    Aborted(u8),
}

pub struct EscapeDecoder {
    state: EscapeState,
}

impl EscapeDecoder {
    pub const fn new() -> Self {
        Self {
            state: EscapeState::Idle,
        }
    }

    pub fn state(&self) -> EscapeState {
        self.state
    }

    /// True while a sequence is open and owns the next byte.
    pub fn is_active(&self) -> bool {
        self.state != EscapeState::Idle
    }

    pub fn reset(&mut self) {
        self.state = EscapeState::Idle;
    }

    /// Feed one byte.
    pub fn advance(&mut self, byte: u8) -> EscapeStep {
        match (self.state, byte) {
            (EscapeState::Idle, ESC) => {
                self.state = EscapeState::SawEscape;
                EscapeStep::Pending
            }
            (EscapeState::Idle, _) => EscapeStep::Aborted(byte),
            (EscapeState::SawEscape, b'[') => {
                self.state = EscapeState::SawBracket;
                EscapeStep::Pending
            }
            (EscapeState::SawEscape, _) => {
                self.state = EscapeState::Idle;
                EscapeStep::Aborted(byte)
            }
            (EscapeState::SawBracket, _) => {
                self.state = EscapeState::Idle;
                match byte {
                    b'A' => EscapeStep::Key(ArrowKey::Up),
                    b'B' => EscapeStep::Key(ArrowKey::Down),
                    b'C' => EscapeStep::Key(ArrowKey::Right),
                    b'D' => EscapeStep::Key(ArrowKey::Left),
                    _ => EscapeStep::Aborted(byte),
                }
            }
        }
    }
}

impl Default for EscapeDecoder {
    fn default() -> Self {
        Self::new()
    }
}
