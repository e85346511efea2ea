use std::{fmt::Display, ops::Range};

use tracing::{debug, trace};

use crate::{
    calculator_error::{CalculatorError, InputError, ValidationError},
    console::Console,
    entry_cruncher::EntryCruncher,
};

pub const FIRST_PROMPT: &str = "Enter first number: ";
pub const SECOND_PROMPT: &str = "Enter second number: ";

/// The largest number of bytes accepted by each read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadLimits {
    pub first_entry: usize,
    pub second_entry: usize,
}

impl Default for ReadLimits {
    fn default() -> Self {
        ReadLimits {
            first_entry: 127,
            second_entry: 63,
        }
    }
}

/// The bytes returned by a single read, which may hold zero, one or
/// two entries.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInputChunk {
    bytes: Vec<u8>,
    capacity: usize,
}

impl RawInputChunk {
    pub fn new(bytes: Vec<u8>, capacity: usize) -> Self {
        RawInputChunk { bytes, capacity }
    }

    /// Whether the read that produced this chunk filled its whole buffer,
    /// meaning more input may have been left behind.
    pub fn is_full(&self) -> bool {
        self.bytes.len() >= self.capacity
    }

    /// Returns the span of the entry on the line beginning at `start`,
    /// skipping leading padding. The span is empty if the line is blank.
    fn token_range(&self, start: usize) -> Range<usize> {
        let mut cruncher = EntryCruncher::new(&self.bytes[start..]);
        let token_start = match cruncher.next() {
            Some((_, pos)) => start + pos - 1,
            None => self.bytes.len(),
        };
        let token_end = self.bytes[token_start..]
            .iter()
            .position(|byte| EntryCruncher::is_delimiter(*byte))
            .map_or(self.bytes.len(), |offset| token_start + offset);
        token_start..token_end
    }

    /// Extracts the entry on the line beginning at `start`, returning it
    /// along with the index immediately after it.
    pub fn token_at(&self, start: usize) -> Result<(NumberToken, usize), ValidationError> {
        let range = self.token_range(start);
        if range.end == self.bytes.len() && self.is_full() {
            return Err(ValidationError::InputTooLong(self.capacity));
        }
        let end = range.end;
        Ok((NumberToken::from(&self.bytes[range]), end))
    }

    /// Finds where the next entry begins at or after `from`, skipping
    /// every kind of delimiter including newlines.
    pub fn next_entry_start(&self, from: usize) -> Option<usize> {
        self.bytes[from..]
            .iter()
            .position(|byte| !EntryCruncher::is_delimiter(*byte))
            .map(|offset| from + offset)
    }
}

/// A delimiter-bounded span of input representing one candidate number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberToken {
    bytes: Vec<u8>,
}

impl AsRef<[u8]> for NumberToken {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<&[u8]> for NumberToken {
    fn from(value: &[u8]) -> Self {
        NumberToken {
            bytes: value.to_vec(),
        }
    }
}

impl Display for NumberToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

/// A second entry that arrived in the same chunk as the first one, so
/// no further read is needed to get it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEntry {
    chunk: RawInputChunk,
    start: usize,
}

pub struct InputReader {
    limits: ReadLimits,
}

impl InputReader {
    pub fn new(limits: ReadLimits) -> Self {
        InputReader { limits }
    }

    fn read_chunk<C: Console + ?Sized>(
        &self,
        console: &mut C,
        capacity: usize,
    ) -> Result<RawInputChunk, InputError> {
        let mut buf = vec![0; capacity];
        let len = console.read(&mut buf).map_err(InputError::from_read)?;
        trace!(len, capacity, "read chunk");
        if len == 0 {
            return Err(InputError::NoData);
        }
        buf.truncate(len);
        Ok(RawInputChunk::new(buf, capacity))
    }

    /// Prompts for and reads the first entry. If the same read also
    /// delivered the second entry, it's returned as pending.
    pub fn read_first_entry<C: Console + ?Sized>(
        &self,
        console: &mut C,
    ) -> Result<(NumberToken, Option<PendingEntry>), CalculatorError> {
        console.prompt(FIRST_PROMPT).map_err(InputError::Write)?;
        let chunk = self.read_chunk(console, self.limits.first_entry)?;
        let (token, end) = chunk.token_at(0)?;
        let pending = chunk
            .next_entry_start(end)
            .map(|start| PendingEntry { chunk, start });
        debug!(%token, buffered_second = pending.is_some(), "read first entry");
        Ok((token, pending))
    }

    /// Prompts for the second entry, then either takes it from `pending`
    /// or performs a fresh read.
    ///
    /// The prompt is shown even when nothing needs to be read, so the
    /// transcript looks the same however the input arrived.
    pub fn read_second_entry<C: Console + ?Sized>(
        &self,
        console: &mut C,
        pending: Option<PendingEntry>,
    ) -> Result<NumberToken, CalculatorError> {
        console.prompt(SECOND_PROMPT).map_err(InputError::Write)?;
        let (chunk, start) = match pending {
            Some(PendingEntry { chunk, start }) => (chunk, start),
            None => (self.read_chunk(console, self.limits.second_entry)?, 0),
        };
        let (token, end) = chunk.token_at(start)?;
        if let Some(extra) = chunk.next_entry_start(end) {
            debug!(at = extra, "ignoring input after second entry");
        }
        debug!(%token, "read second entry");
        Ok(token)
    }
}
