//! Streaming module for synthetic test data
//!
//! This module provides streaming primitives that:
//! - Use a fixed memory allocation (the pattern buffer)
//! - Serve any logical size with random access
//! - Verify data read back without buffering it

pub mod pattern;
pub mod pattern_stream;
pub mod source;
pub mod verifier;

pub use pattern::{PatternBuffer, DEFAULT_PATTERN_LEN};
pub use pattern_stream::PatternStream;
pub use source::{
    ReadOutcome, SeekAnchor, SeekableSource, StreamError, WHENCE_CURRENT, WHENCE_END, WHENCE_START,
};
pub use verifier::{Mismatch, PatternVerifier, VerifyResult};
