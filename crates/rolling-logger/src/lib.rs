//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to stderr and to one log file
//! per day (`<app>.<YYYY-MM-DD>.log`). `tracing-appender` rotates the files
//! and keeps only the newest [`MAX_LOG_FILES`]. The most recent lines are also
//! kept in a circular buffer in memory. `log` records are bridged into the
//! same subscriber.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Daily files kept on disk
pub const MAX_LOG_FILES: usize = 7;
/// Lines kept in memory
pub const RECENT_CAPACITY: usize = 200;

static RECENT: OnceLock<Arc<Mutex<RecentLines>>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("log file error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

/// Fixed-capacity buffer of the latest log lines; the oldest line is dropped first
#[derive(Debug)]
pub struct RecentLines {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Split a formatted event into lines and keep the non-empty ones
    pub fn push_event(&mut self, buf: &[u8]) {
        let text = String::from_utf8_lossy(buf);
        for line in text.lines().filter(|line| !line.is_empty()) {
            self.push(line.to_string());
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// Daily appender named `<app_name>.<YYYY-MM-DD>.log` inside `dir`
pub fn daily_appender(dir: &Path, app_name: &str, max_files: usize) -> Result<RollingFileAppender, LoggerError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .max_log_files(max_files.max(1))
        .build(dir)?;
    Ok(appender)
}

/// Destination shared by every writer the file layer creates
struct LogSink<W> {
    file: Arc<W>,
    recent: Arc<Mutex<RecentLines>>,
}

impl<W> Clone for LogSink<W> {
    fn clone(&self) -> Self {
        Self {
            file: self.file.clone(),
            recent: self.recent.clone(),
        }
    }
}

/// Buffers one formatted event and hands it to the sink on drop
struct SinkWriter<W: for<'w> MakeWriter<'w>> {
    sink: LogSink<W>,
    buf: Vec<u8>,
}

impl<W: for<'w> MakeWriter<'w>> Write for SinkWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<W: for<'w> MakeWriter<'w>> Drop for SinkWriter<W> {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }

        if let Err(e) = self.sink.file.make_writer().write_all(&self.buf) {
            eprintln!("rolling-logger: {}", e);
        }

        self.sink
            .recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_event(&self.buf);
    }
}

impl<'a, W: for<'w> MakeWriter<'w>> MakeWriter<'a> for LogSink<W> {
    type Writer = SinkWriter<W>;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter {
            sink: self.clone(),
            buf: Vec::new(),
        }
    }
}

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    let log_dir = log_dir.as_ref();
    let recent = Arc::new(Mutex::new(RecentLines::new(RECENT_CAPACITY)));
    let sink = LogSink {
        file: Arc::new(daily_appender(log_dir, app_name, MAX_LOG_FILES)?),
        recent: recent.clone(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(sink),
        )
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    RECENT.set(recent).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::info!("Logging to {}", log_dir.display());
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    RECENT.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}

/// Latest lines written to the log file, oldest first
pub fn recent_lines() -> Vec<String> {
    RECENT
        .get()
        .map(|recent| recent.lock().unwrap_or_else(PoisonError::into_inner).snapshot())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// In-memory stand-in for the file appender
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            BufferWriter(self.0.clone())
        }
    }

    #[test]
    fn test_recent_lines_drop_oldest() {
        let mut recent = RecentLines::new(2);
        recent.push("a".into());
        recent.push("b".into());
        recent.push("c".into());
        assert_eq!(recent.snapshot(), vec!["b", "c"]);
    }

    #[test]
    fn test_push_event_skips_blank_lines() {
        let mut recent = RecentLines::new(10);
        recent.push_event(b"first\n\nsecond\n");
        assert_eq!(recent.snapshot(), vec!["first", "second"]);
    }

    #[test]
    fn test_sink_writer_feeds_file_and_buffer() {
        let file = SharedBuffer::default();
        let sink = LogSink {
            file: Arc::new(file.clone()),
            recent: Arc::new(Mutex::new(RecentLines::new(10))),
        };

        {
            let mut writer = sink.make_writer();
            writer.write_all(b"INFO ").unwrap();
            writer.write_all(b"started\n").unwrap();
            // Nothing reaches the file until the event is complete
            assert!(file.0.lock().unwrap().is_empty());
        }

        assert_eq!(file.0.lock().unwrap().as_slice(), b"INFO started\n");
        assert_eq!(sink.recent.lock().unwrap().snapshot(), vec!["INFO started"]);
    }

    #[test]
    fn test_daily_appender_names_files_by_app() {
        let dir = tempfile::tempdir().unwrap();
        let appender = daily_appender(dir.path(), "app", 3).unwrap();
        let sink = LogSink {
            file: Arc::new(appender),
            recent: Arc::new(Mutex::new(RecentLines::new(10))),
        };
        sink.make_writer().write_all(b"line\n").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("app."));
        assert!(names[0].ends_with(".log"));
        let content = fs::read_to_string(dir.path().join(&names[0])).unwrap();
        assert_eq!(content, "line\n");
    }

    #[test]
    fn test_helpers_need_init() {
        // The global logger is never installed in this test binary
        assert!(matches!(info("x"), Err(LoggerError::NotInitialized)));
        assert!(recent_lines().is_empty());
    }
}
