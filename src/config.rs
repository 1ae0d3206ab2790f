//! Configuration module for pattern streams
//!
//! Harnesses describe the stream they want as a small JSON document, e.g.
//! `{"pattern_len": 4096, "size": 1048576}`. Every field is optional.

use serde::Deserialize;

use crate::streaming::{PatternStream, DEFAULT_PATTERN_LEN};

/// Stream generator configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Length of the tiled pattern; non-positive means the 128 KiB default
    #[serde(default = "default_pattern_len")]
    pub pattern_len: i64,

    /// Logical stream size; non-positive means no data
    #[serde(default)]
    pub size: i64,

    /// Whether to log stream state transitions
    #[serde(default = "default_log_events")]
    pub log_events: bool,
}

fn default_pattern_len() -> i64 {
    DEFAULT_PATTERN_LEN as i64
}

fn default_log_events() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pattern_len: default_pattern_len(),
            size: 0,
            log_events: default_log_events(),
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config_str =
            std::str::from_utf8(bytes).map_err(|e| ConfigError::InvalidUtf8(e.to_string()))?;

        serde_json::from_str(config_str).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }

    /// Build a stream already reset to the configured size
    pub fn build_stream(&self) -> PatternStream {
        let mut stream = PatternStream::new(self.pattern_len);
        stream.set_log_events(self.log_events);
        stream.reset_size(self.size);
        stream
    }
}

/// Configuration parsing errors
#[derive(Debug)]
pub enum ConfigError {
    InvalidUtf8(String),
    InvalidJson(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {}", e),
            ConfigError::InvalidJson(e) => write!(f, "Invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaming::{ReadOutcome, SeekableSource};

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.pattern_len, 131072);
        assert_eq!(config.size, 0);
        assert!(config.log_events);
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{"pattern_len": 4, "size": 10, "log_events": false}"#;
        let config = GeneratorConfig::from_bytes(json.as_bytes()).unwrap();
        assert_eq!(config.pattern_len, 4);
        assert_eq!(config.size, 10);
        assert!(!config.log_events);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = GeneratorConfig::from_bytes(b"{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_invalid_input() {
        let err = GeneratorConfig::from_bytes(&[0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUtf8(_)));

        let err = GeneratorConfig::from_bytes(br#"{"size": "big"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_build_stream() {
        let config = GeneratorConfig::from_bytes(br#"{"pattern_len": 4, "size": 10}"#).unwrap();
        let mut stream = config.build_stream();
        assert_eq!(stream.size(), 10);
        assert_eq!(stream.pattern().len(), 4);

        let mut buf = [0u8; 16];
        assert_eq!(stream.read_chunk(&mut buf), ReadOutcome::End(10));
        assert_eq!(&buf[..10], &[0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
    }
}
