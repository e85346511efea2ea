use std::{
    backtrace::{Backtrace, BacktraceStatus},
    error::Error,
    fmt::Display,
    io,
};

use crate::CalculatorState;

#[derive(Debug)]
pub struct TracedCalculatorError {
    pub error: CalculatorError,
    pub state: CalculatorState,
    backtrace: Backtrace,
}

impl TracedCalculatorError {
    pub fn with_state(error: CalculatorError, state: CalculatorState) -> Self {
        TracedCalculatorError {
            error,
            state,
            backtrace: Backtrace::capture(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.error.exit_code()
    }
}

#[derive(Debug)]
pub enum CalculatorError {
    Input(InputError),
    Validation(ValidationError),
    Overflow(OverflowError),
    /// Stepping was attempted after an earlier failure.
    CannotContinue,
}

impl CalculatorError {
    /// The process exit code that reports this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CalculatorError::Validation(_) => 1,
            CalculatorError::Input(_) | CalculatorError::CannotContinue => 2,
            CalculatorError::Overflow(_) => 3,
        }
    }
}

/// Failures of the underlying byte streams, as opposed to bad data.
#[derive(Debug)]
pub enum InputError {
    Read(io::Error),
    /// A read returned no bytes when an entry was still required.
    NoData,
    Interrupted,
    Write(io::Error),
}

impl InputError {
    pub fn from_read(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            InputError::Interrupted
        } else {
            InputError::Read(err)
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum ValidationError {
    /// The entry had no digits at all (empty, or just a sign).
    MissingDigits,
    /// The argument is the index, within the entry, of the first byte
    /// that isn't part of a number.
    UnexpectedCharacter(usize),
    /// The entry filled the whole read buffer of the given capacity and
    /// may have been cut off.
    InputTooLong(usize),
}

#[derive(Debug, PartialEq, Clone)]
pub enum OverflowError {
    Sum { a: i64, b: i64 },
    LiteralOutOfRange,
}

impl From<InputError> for CalculatorError {
    fn from(value: InputError) -> Self {
        CalculatorError::Input(value)
    }
}

impl From<ValidationError> for CalculatorError {
    fn from(value: ValidationError) -> Self {
        CalculatorError::Validation(value)
    }
}

impl From<OverflowError> for CalculatorError {
    fn from(value: OverflowError) -> Self {
        CalculatorError::Overflow(value)
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Read(err) => write!(f, "Failed to read input ({err})"),
            InputError::NoData => write!(f, "No input available"),
            InputError::Interrupted => write!(f, "Input interrupted"),
            InputError::Write(err) => write!(f, "Failed to write output ({err})"),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingDigits => write!(f, "expected at least one digit"),
            ValidationError::UnexpectedCharacter(i) => {
                write!(f, "unexpected character at column {}", i + 1)
            }
            ValidationError::InputTooLong(capacity) => {
                write!(f, "entry exceeds {capacity} bytes")
            }
        }
    }
}

impl Display for OverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverflowError::Sum { a, b } => write!(f, "{a} + {b} does not fit in 64 bits"),
            OverflowError::LiteralOutOfRange => write!(f, "number does not fit in 64 bits"),
        }
    }
}

impl Error for CalculatorError {}

impl Display for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculatorError::Input(err) => write!(f, "Error: {err}"),
            CalculatorError::Validation(err) => write!(f, "Error: Invalid input ({err})"),
            CalculatorError::Overflow(err) => write!(f, "Error: Integer overflow ({err})"),
            CalculatorError::CannotContinue => write!(f, "Error: Can't continue"),
        }
    }
}

impl Error for TracedCalculatorError {}

impl Display for TracedCalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        write!(f, " while {}", self.state)?;
        if self.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nBacktrace:\n{}", self.backtrace)?;
        }
        Ok(())
    }
}
