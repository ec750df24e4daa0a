use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use fieldlog_core::{Field, FieldBuilder, Fields};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::{config::Preset, format::format_record, log_writer::LogWriter};

pub(crate) const DEFAULT_TARGET: &str = "fieldlog";
pub(crate) const FALLBACK_WARNING: &str =
    "Unknown logger environment config, using default logger config...";

/// `log` backend that formats records with a [`Preset`] and hands the lines to a [`LogWriter`].
pub struct FieldLogger {
    preset: Preset,
    level: LevelFilter,
    writer: Mutex<Box<dyn LogWriter>>,
}

impl FieldLogger {
    pub(crate) fn new(preset: Preset, level: LevelFilter, writer: Box<dyn LogWriter>) -> Self {
        Self {
            preset,
            level,
            writer: Mutex::new(writer),
        }
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Formats and writes `record` whatever its level.
    fn write(&self, record: &Record) {
        let line = format_record(record, &self.preset, Local::now().naive_local());
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .regular(&line);
    }
}

impl Log for FieldLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.write(record);
    }

    fn flush(&self) {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush();
    }
}

/// Routes the `log` facade to a shared [`FieldLogger`].
pub(crate) struct GlobalLogger(pub(crate) Arc<FieldLogger>);

impl Log for GlobalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.0.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.0.log(record)
    }

    fn flush(&self) {
        self.0.flush()
    }
}

/// Handle used to emit structured records.
///
/// Cloning is cheap: clones share the backend. A logger carries base fields
/// that are attached to every record it emits; [`Logger::with_fields`]
/// derives a child with more of them.
#[derive(Clone)]
pub struct Logger {
    backend: Arc<FieldLogger>,
    target: Arc<str>,
    fields: Fields,
}

impl Logger {
    pub(crate) fn new(backend: Arc<FieldLogger>, target: &str) -> Self {
        Self {
            backend,
            target: target.into(),
            fields: Fields::new(),
        }
    }

    pub fn backend(&self) -> &FieldLogger {
        &self.backend
    }

    /// Base fields attached to every record.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// A child logger whose base fields are this logger's plus `fields`.
    ///
    /// Keys already present keep their position and take the new value.
    pub fn with_fields(&self, fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            target: Arc::clone(&self.target),
            fields: self.merged(fields),
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.backend.level
    }

    /// Emits `message` with the base fields followed by `fields`.
    pub fn log(&self, level: Level, message: &str, fields: impl IntoIterator<Item = Field>) {
        if !self.enabled(level) {
            return;
        }
        let fields = self.merged(fields);
        self.backend.log(
            &Record::builder()
                .args(format_args!("{message}"))
                .level(level)
                .target(&self.target)
                .key_values(&fields)
                .build(),
        );
    }

    pub fn trace(&self, message: &str, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Trace, message, fields)
    }

    pub fn debug(&self, message: &str, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Debug, message, fields)
    }

    pub fn info(&self, message: &str, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Info, message, fields)
    }

    pub fn warn(&self, message: &str, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Warn, message, fields)
    }

    pub fn error(&self, message: &str, fields: impl IntoIterator<Item = Field>) {
        self.log(Level::Error, message, fields)
    }

    pub fn flush(&self) {
        self.backend.flush()
    }

    fn merged(&self, fields: impl IntoIterator<Item = Field>) -> Fields {
        FieldBuilder::from(self.fields.clone()).merge(fields).build()
    }

    /// Reports a fallback preset. Written past the level filter so that an
    /// `error`-only logger still shows it.
    pub(crate) fn warn_if_fallback(&self) {
        if !self.backend.preset.is_fallback() {
            return;
        }
        self.backend.write(
            &Record::builder()
                .args(format_args!("{FALLBACK_WARNING}"))
                .level(Level::Warn)
                .target(&self.target)
                .build(),
        );
    }
}

/// Request-scoped logging state, passed explicitly along a request.
///
/// Holds a child logger once fields were attached; until then lookups fall
/// back to the root logger supplied by the caller.
#[derive(Clone, Default)]
pub struct RequestContext {
    logger: Option<Logger>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose logger carries `fields` on top of the current one.
    pub fn with_fields(&self, root: &Logger, fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            logger: Some(self.logger(root).with_fields(fields)),
        }
    }

    /// The request logger, or `root` if none was attached.
    pub fn logger<'a>(&'a self, root: &'a Logger) -> &'a Logger {
        self.logger.as_ref().unwrap_or(root)
    }
}

#[cfg(test)]
mod tests {
    use fieldlog_core::{FieldBuilder, Value};

    use super::*;
    use crate::log_writer::LogBuffer;

    fn buffered(preset: Preset, level: LevelFilter) -> (Logger, LogBuffer) {
        let buffer = LogBuffer::new();
        let backend = FieldLogger::new(preset, level, Box::new(buffer.clone()));
        (Logger::new(Arc::new(backend), "test"), buffer)
    }

    fn tail(line: &str) -> &str {
        line.split_once("\t[INFO]\t")
            .or_else(|| line.split_once("\t[WARN]\t"))
            .map(|(_, rest)| rest)
            .unwrap_or(line)
    }

    #[test]
    fn test_level_filter() {
        let (logger, buffer) = buffered(Preset::production(), LevelFilter::Info);
        logger.debug("hidden", Fields::new());
        logger.info("shown", Fields::new());
        assert!(!logger.enabled(Level::Debug));
        assert_eq!(buffer.lines().len(), 1);
        assert_eq!(tail(&buffer.lines()[0]), "shown");
    }

    #[test]
    fn test_call_fields_replace_base_fields_in_place() {
        let (root, buffer) = buffered(Preset::production(), LevelFilter::Debug);
        let logger = root.with_fields(FieldBuilder::new().request_id("r-1").status(0).build());
        logger.info("done", FieldBuilder::new().status(404).path("/a").build());
        assert_eq!(
            tail(&buffer.lines()[0]),
            "done\trequest-id=\"r-1\" status=404 path=\"/a\""
        );
        assert_eq!(logger.fields().value("status"), Some(&Value::U64(0)));
        assert!(root.fields().is_empty());
    }

    #[test]
    fn test_request_context_falls_back_to_root() {
        let (root, buffer) = buffered(Preset::production(), LevelFilter::Debug);
        let ctx = RequestContext::new();
        assert!(ctx.logger(&root).fields().is_empty());

        let ctx = ctx.with_fields(&root, FieldBuilder::new().request_id("r-2").build());
        let ctx = ctx.with_fields(&root, FieldBuilder::new().method("GET").build());
        ctx.logger(&root).info("handled", Fields::new());
        assert_eq!(
            tail(&buffer.lines()[0]),
            "handled\trequest-id=\"r-2\" method=\"GET\""
        );
    }

    #[test]
    fn test_fallback_warning() {
        let (logger, buffer) = buffered(
            Preset::for_environment(crate::Environment::Unknown),
            LevelFilter::Debug,
        );
        logger.warn_if_fallback();
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].ends_with(FALLBACK_WARNING));
    }

    #[test]
    fn test_fallback_warning_ignores_level_filter() {
        let (logger, buffer) = buffered(
            Preset::for_environment(crate::Environment::Unknown),
            LevelFilter::Error,
        );
        logger.warn_if_fallback();
        logger.warn("filtered", Fields::new());
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(FALLBACK_WARNING));
    }
}
