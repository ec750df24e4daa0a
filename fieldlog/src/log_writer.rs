use std::{
    io::Write,
    sync::{Arc, Mutex, PoisonError},
};

/// Destination of formatted log lines.
pub trait LogWriter: Send {
    fn regular(&mut self, line: &str);
    fn flush(&mut self);
}

/// Writes each line to stdout.
#[derive(Default, Debug)]
pub struct LogStdout;

impl LogWriter for LogStdout {
    fn regular(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}").ok();
        stdout.flush().ok();
    }

    fn flush(&mut self) {
        std::io::stdout().flush().ok();
    }
}

/// Keeps lines in memory. Clones share the same lines, so a clone handed to
/// the logger can be read back from the original.
#[derive(Clone, Default, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogWriter for LogBuffer {
    fn regular(&mut self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
    }

    fn flush(&mut self) {}
}

#[test]
fn test_log_buffer_shares_lines() {
    let buffer = LogBuffer::new();
    let mut writer = buffer.clone();
    writer.regular("Hello, world!");
    writer.regular("rust is awesome !");
    writer.flush();
    assert_eq!(buffer.lines(), vec!["Hello, world!", "rust is awesome !"]);
    buffer.clear();
    assert!(writer.lines().is_empty());
}

#[test]
fn test_log_stdout() {
    let mut log_stdout = LogStdout;
    log_stdout.regular("Hello, world!");
    log_stdout.flush();
}
