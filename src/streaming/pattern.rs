//! Pattern Buffer
//!
//! The small immutable byte sequence that gets tiled out to form a stream.
//! The standard ramp is `pattern[i] = i mod 256`, so any byte at logical
//! offset `k` can be recomputed without looking at the stream.

/// Pattern length used when a non-positive length is requested (128 KiB)
pub const DEFAULT_PATTERN_LEN: usize = 128 << 10;

/// Immutable byte pattern tiled by [`PatternStream`](super::PatternStream)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternBuffer {
    bytes: Vec<u8>,
}

impl PatternBuffer {
    /// Build the 0..255 ramp of `len` bytes, or of [`DEFAULT_PATTERN_LEN`]
    /// bytes when `len <= 0`
    pub fn with_len(len: i64) -> Self {
        let len = if len <= 0 {
            DEFAULT_PATTERN_LEN
        } else {
            len as usize
        };

        Self {
            bytes: (0..len).map(|i| (i % 256) as u8).collect(),
        }
    }

    /// Use an explicit pattern. An empty pattern yields a stream that is
    /// permanently exhausted.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Byte found at logical stream offset `offset`
    #[inline]
    pub fn byte_at(&self, offset: u64) -> Option<u8> {
        if self.bytes.is_empty() {
            return None;
        }
        Some(self.bytes[(offset % self.bytes.len() as u64) as usize])
    }

    /// Fill `buf` with the bytes starting at logical offset `offset`
    ///
    /// Copies whole runs of the pattern instead of going byte by byte.
    /// Does nothing on an empty pattern.
    pub fn fill_from(&self, offset: u64, buf: &mut [u8]) {
        if self.bytes.is_empty() {
            return;
        }

        let mut index = (offset % self.bytes.len() as u64) as usize;
        let mut written = 0;
        while written < buf.len() {
            let run = (self.bytes.len() - index).min(buf.len() - written);
            buf[written..written + run].copy_from_slice(&self.bytes[index..index + run]);
            written += run;
            index = (index + run) % self.bytes.len();
        }
    }

    /// Pattern length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for an explicitly empty pattern
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// One period of the pattern
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for PatternBuffer {
    fn default() -> Self {
        Self::with_len(0)
    }
}
