//! Streaming content verifier
//!
//! Checks bytes read back from a sink (a storage service, a socket peer)
//! against what a [`PatternStream`](super::PatternStream) produces at the
//! same offsets. Constant memory, chunk boundaries anywhere.

use super::pattern::PatternBuffer;

/// First byte that did not match the pattern
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Logical stream offset of the bad byte
    pub offset: u64,
    pub expected: u8,
    pub actual: u8,
}

/// Result of checking a chunk
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyResult {
    /// Everything so far matches
    Continue,
    /// Content diverged
    Mismatch(Mismatch),
}

/// Checks a byte sequence against the ramp pattern, chunk by chunk
///
/// Progress stops at the first mismatch.
pub struct PatternVerifier {
    pattern: PatternBuffer,
    /// Logical offset the next byte is expected at
    offset: u64,
    start: u64,
}

impl PatternVerifier {
    /// Verifier for the 0..255 ramp of `pattern_len` bytes (default when <= 0)
    pub fn new(pattern_len: i64) -> Self {
        Self {
            pattern: PatternBuffer::with_len(pattern_len),
            offset: 0,
            start: 0,
        }
    }

    /// Expect the first checked byte at logical offset `offset`
    pub fn starting_at(mut self, offset: u64) -> Self {
        self.offset = offset;
        self.start = offset;
        self
    }

    /// Check the next chunk of data
    pub fn check_chunk(&mut self, chunk: &[u8]) -> VerifyResult {
        for &actual in chunk {
            let expected = self.pattern.byte_at(self.offset).unwrap_or_default();
            if expected != actual {
                return VerifyResult::Mismatch(Mismatch {
                    offset: self.offset,
                    expected,
                    actual,
                });
            }
            self.offset += 1;
        }
        VerifyResult::Continue
    }

    /// Bytes that matched so far
    pub fn bytes_verified(&self) -> u64 {
        self.offset - self.start
    }
}
