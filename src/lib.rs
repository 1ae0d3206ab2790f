//! Deterministic, seekable synthetic byte streams
//!
//! A [`PatternStream`] serves an arbitrarily long logical stream of bytes
//! without storing it: a small ramp pattern (`0, 1, ..., 255, 0, 1, ...`) is
//! tiled out to a declared size. Throughput and protocol tests get a cheap,
//! reproducible, randomly-seekable body of any length, and a
//! [`PatternVerifier`] to check what comes back.
//!
//! ```
//! use std::io::{Read, Seek, SeekFrom};
//! use pattern_stream::PatternStream;
//!
//! let mut stream = PatternStream::new(4);
//! stream.reset_size(10);
//!
//! let mut body = Vec::new();
//! stream.read_to_end(&mut body).unwrap();
//! assert_eq!(body, [0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
//!
//! stream.seek(SeekFrom::Start(2)).unwrap();
//! let mut buf = [0u8; 3];
//! stream.read_exact(&mut buf).unwrap();
//! assert_eq!(buf, [2, 3, 0]);
//! ```

pub mod config;
pub mod streaming;
pub mod telemetry;

pub use config::{ConfigError, GeneratorConfig};
pub use streaming::{
    Mismatch, PatternBuffer, PatternStream, PatternVerifier, ReadOutcome, SeekAnchor,
    SeekableSource, StreamError, VerifyResult, DEFAULT_PATTERN_LEN, WHENCE_CURRENT, WHENCE_END,
    WHENCE_START,
};
pub use telemetry::{StreamEvent, StreamEventType};
