//! Structured event logging of stream state transitions
//!
//! Runs in its own binary: it installs a process-wide logger.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use pattern_stream::{PatternStream, SeekAnchor, SeekableSource, WHENCE_START};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn take_records() -> Vec<(Level, String)> {
    std::mem::take(&mut *LOGGER.records.lock().unwrap())
}

fn find<'a>(records: &'a [(Level, String)], event_type: &str) -> Option<&'a (Level, String)> {
    let needle = format!("\"event_type\":\"{}\"", event_type);
    records.iter().find(|(_, line)| line.contains(&needle))
}

// Single test so the shared logger never sees interleaved streams
#[test]
fn test_stream_event_logging() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut stream = PatternStream::new(4);
    stream.reset_size(10);

    let records = take_records();
    let (level, line) = find(&records, "reset").expect("reset event");
    assert_eq!(*level, Level::Debug);
    assert!(line.starts_with("[PATTERN-STREAM] "));
    assert!(line.contains("\"size\":10"));

    // Plain data reads stay quiet; only the read reaching the end logs
    let mut buf = [0u8; 6];
    stream.read_chunk(&mut buf);
    assert!(take_records().is_empty());
    stream.read_chunk(&mut buf);
    let records = take_records();
    assert_eq!(records.len(), 1);
    let (level, line) = find(&records, "exhausted").expect("exhausted event");
    assert_eq!(*level, Level::Debug);
    assert!(line.contains("\"position\":10"));

    assert_eq!(stream.seek_whence(0, WHENCE_START), Ok(0));
    assert!(stream.seek_to(-1, SeekAnchor::Current).is_err());
    let records = take_records();
    let (level, line) = find(&records, "seek_rejected").expect("seek_rejected event");
    assert_eq!(*level, Level::Warn);
    assert!(line.contains("\"offset\":-1"));
    assert!(line.contains("\"whence\":1"));
    assert!(line.contains("negative position: -1"));

    assert!(stream.seek_whence(0, 7).is_err());
    let records = take_records();
    let (level, line) = find(&records, "seek_rejected").expect("invalid whence event");
    assert_eq!(*level, Level::Warn);
    assert!(line.contains("\"whence\":7"));
    assert!(line.contains("invalid whence: 7"));

    stream.set_log_events(false);
    stream.reset_size(4);
    stream.read_chunk(&mut buf);
    assert!(stream.seek_to(-1, SeekAnchor::Start).is_err());
    assert!(take_records().is_empty());
}
