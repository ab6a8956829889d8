//! Console error types

/// Console error with code and message
///
/// Every variant is an input-shape error: reported to the user and
/// otherwise harmless. Resource limits never produce an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// E01: Unknown command
    UnknownCommand,
    /// E02: Argument present but not a valid value
    InvalidValue,
    /// E03: Missing required argument
    MissingArg,
    /// E04: Result does not fit the value range
    OutOfRange,
    /// E05: Division by zero
    DivisionByZero,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "E01",
            Self::InvalidValue => "E02",
            Self::MissingArg => "E03",
            Self::OutOfRange => "E04",
            Self::DivisionByZero => "E05",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "command not found",
            Self::InvalidValue => "parameter invalid",
            Self::MissingArg => "parameter invalid: missing",
            Self::OutOfRange => "out of range",
            Self::DivisionByZero => "division by zero",
        }
    }

    /// True for errors raised by a handler rejecting its arguments.
    pub fn is_param_error(&self) -> bool {
        !matches!(self, Self::UnknownCommand)
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
