//! Pattern Stream
//!
//! Tiles a [`PatternBuffer`] out to a declared logical size. Memory use is
//! the pattern buffer alone, whatever the size: nothing past the pattern is
//! ever materialized. The byte at logical offset `k` is always
//! `pattern[k mod len]`, so reads may be chunked and interleaved with seeks
//! freely without perturbing content.

use std::io;

use log::Level;

use super::pattern::PatternBuffer;
use super::source::{ReadOutcome, SeekAnchor, SeekableSource, StreamError};
use crate::telemetry::{emit_with, StreamEvent, StreamEventType};

/// Deterministic, seekable synthetic byte stream
///
/// Constructed with `size = 0`, so it yields nothing until
/// [`reset_size`](Self::reset_size) declares a length. One instance is meant
/// to be reused across many logical streams without reallocating its pattern.
#[derive(Debug)]
pub struct PatternStream {
    /// Tiled content, fixed after construction
    pattern: PatternBuffer,
    /// Declared logical length; zero or negative means no data
    size: i64,
    /// Read cursor in `[0, size]`
    pos: i64,
    /// Whether state transitions are reported through `telemetry`
    log_events: bool,
}

impl PatternStream {
    /// Create a stream over the 0..255 ramp of `pattern_len` bytes
    ///
    /// `pattern_len <= 0` falls back to the 128 KiB default.
    pub fn new(pattern_len: i64) -> Self {
        Self::from_pattern(PatternBuffer::with_len(pattern_len))
    }

    /// Create a stream over an explicit pattern
    pub fn from_pattern(pattern: PatternBuffer) -> Self {
        Self {
            pattern,
            size: 0,
            pos: 0,
            log_events: true,
        }
    }

    /// Declare a new logical size and rewind to offset 0
    pub fn reset_size(&mut self, size: i64) {
        self.size = size;
        self.pos = 0;

        self.event(Level::Debug, || {
            StreamEvent::new(StreamEventType::Reset, size, 0)
        });
    }

    /// Seek using a raw whence selector (0 = start, 1 = current, 2 = end)
    pub fn seek_whence(&mut self, offset: i64, whence: i32) -> Result<i64, StreamError> {
        let anchor = match SeekAnchor::from_whence(whence) {
            Ok(anchor) => anchor,
            Err(err) => {
                self.reject(offset, whence, &err);
                return Err(err);
            }
        };
        self.seek_to(offset, anchor)
    }

    /// Current cursor position
    pub fn position(&self) -> i64 {
        self.pos
    }

    /// Declared logical size
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Bytes left before end-of-stream
    pub fn remaining(&self) -> u64 {
        if self.pattern.is_empty() {
            return 0;
        }
        self.size.saturating_sub(self.pos).max(0) as u64
    }

    /// True when the next read can only report end-of-stream
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Pattern being tiled
    pub fn pattern(&self) -> &PatternBuffer {
        &self.pattern
    }

    /// Turn structured event logging on or off
    pub fn set_log_events(&mut self, enabled: bool) {
        self.log_events = enabled;
    }

    /// Resolve `anchor + offset` against the given cursor and end, clamp to
    /// `end`, and move there. Rejections leave the cursor untouched.
    fn seek_within(
        &mut self,
        offset: i64,
        anchor: SeekAnchor,
        current: i64,
        end: i64,
    ) -> Result<i64, StreamError> {
        let base = match anchor {
            SeekAnchor::Start => 0,
            SeekAnchor::Current => current,
            SeekAnchor::End => end,
        };

        // Saturation keeps the sign: overflow clamps below, underflow is rejected
        let target = base.saturating_add(offset);
        if target < 0 {
            let err = StreamError::NegativePosition(target);
            self.reject(offset, anchor.whence(), &err);
            return Err(err);
        }

        self.pos = target.min(end);
        Ok(self.pos)
    }

    fn event<F>(&self, level: Level, build: F)
    where
        F: FnOnce() -> StreamEvent,
    {
        if self.log_events {
            emit_with(level, build);
        }
    }

    fn reject(&self, offset: i64, whence: i32, err: &StreamError) {
        self.event(Level::Warn, || {
            StreamEvent::new(StreamEventType::SeekRejected, self.size, self.pos)
                .with_offset(offset)
                .with_whence(whence)
                .with_reason(&err.to_string())
        });
    }
}

impl Default for PatternStream {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SeekableSource for PatternStream {
    fn read_chunk(&mut self, buf: &mut [u8]) -> ReadOutcome {
        if self.size <= 0 || self.pattern.is_empty() {
            return ReadOutcome::End(0);
        }

        let remaining = self.size - self.pos;
        if remaining <= 0 {
            return ReadOutcome::End(0);
        }

        let count = (buf.len() as u64).min(remaining as u64) as usize;
        self.pattern.fill_from(self.pos as u64, &mut buf[..count]);
        self.pos += count as i64;

        if self.pos >= self.size {
            self.event(Level::Debug, || {
                StreamEvent::new(StreamEventType::Exhausted, self.size, self.pos)
            });
            return ReadOutcome::End(count);
        }
        ReadOutcome::Data(count)
    }

    fn seek_to(&mut self, offset: i64, anchor: SeekAnchor) -> Result<i64, StreamError> {
        self.seek_within(offset, anchor, self.pos, self.size)
    }
}

impl io::Read for PatternStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_chunk(buf).len())
    }
}

impl io::Seek for PatternStream {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        let (offset, anchor) = match pos {
            // Anything past i64::MAX is past the end anyway
            io::SeekFrom::Start(offset) => {
                (i64::try_from(offset).unwrap_or(i64::MAX), SeekAnchor::Start)
            }
            io::SeekFrom::Current(offset) => (offset, SeekAnchor::Current),
            io::SeekFrom::End(offset) => (offset, SeekAnchor::End),
        };

        // A non-positive size is an empty stream here: the cursor stays at 0
        let pos = self.seek_within(offset, anchor, self.pos.max(0), self.size.max(0))?;
        Ok(pos as u64)
    }
}
