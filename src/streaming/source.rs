//! Seekable source capability
//!
//! The two-method interface generic consumers program against: read into a
//! caller buffer, and move the cursor. End-of-stream is part of the read
//! result, never an error.

use std::fmt;
use std::io;

/// Raw whence value for [`SeekAnchor::Start`]
pub const WHENCE_START: i32 = 0;
/// Raw whence value for [`SeekAnchor::Current`]
pub const WHENCE_CURRENT: i32 = 1;
/// Raw whence value for [`SeekAnchor::End`]
pub const WHENCE_END: i32 = 2;

/// Reference point a seek offset is relative to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeekAnchor {
    /// Logical start of the stream (offset 0)
    Start,
    /// Current cursor position
    Current,
    /// Declared logical size
    End,
}

impl SeekAnchor {
    /// Decode a raw whence selector (0 = start, 1 = current, 2 = end)
    pub fn from_whence(whence: i32) -> Result<Self, StreamError> {
        match whence {
            WHENCE_START => Ok(SeekAnchor::Start),
            WHENCE_CURRENT => Ok(SeekAnchor::Current),
            WHENCE_END => Ok(SeekAnchor::End),
            other => Err(StreamError::InvalidWhence(other)),
        }
    }

    pub fn whence(self) -> i32 {
        match self {
            SeekAnchor::Start => WHENCE_START,
            SeekAnchor::Current => WHENCE_CURRENT,
            SeekAnchor::End => WHENCE_END,
        }
    }
}

/// Result of a single read
///
/// The last chunk of a stream carries its data and the end-of-stream mark in
/// the same value: `End(n)` with `n > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// `n` bytes written, more data follows
    Data(usize),
    /// `n` bytes written (possibly zero), nothing follows
    End(usize),
}

impl ReadOutcome {
    /// Number of bytes written into the buffer
    pub fn len(self) -> usize {
        match self {
            ReadOutcome::Data(n) | ReadOutcome::End(n) => n,
        }
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn is_end(self) -> bool {
        matches!(self, ReadOutcome::End(_))
    }
}

/// Seek errors. The cursor is left untouched when one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamError {
    /// Computed target lies before the start of the stream
    NegativePosition(i64),
    /// Whence selector is not start, current or end
    InvalidWhence(i32),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::NegativePosition(pos) => write!(f, "negative position: {}", pos),
            StreamError::InvalidWhence(whence) => write!(f, "invalid whence: {}", whence),
        }
    }
}

impl std::error::Error for StreamError {}

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Readable, seekable byte source
pub trait SeekableSource {
    /// Fill the front of `buf` with the next bytes of the stream
    fn read_chunk(&mut self, buf: &mut [u8]) -> ReadOutcome;

    /// Move the cursor to `anchor + offset` and return the new position
    fn seek_to(&mut self, offset: i64, anchor: SeekAnchor) -> Result<i64, StreamError>;
}
