//! # fieldlog
//! Structured console logger with environment presets.
//!
//! Records are built with [`FieldBuilder`] and emitted through a [`Logger`].
//! The logger's encoders are picked from the deployment environment:
//! development colors levels and prints the record target, production prints
//! plain lines.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! fieldlog = "0.1.0"
//! ```
//!
//! ```rust
//! use fieldlog::{Environment, FieldBuilder, logger_config};
//!
//! let logger = logger_config()
//!     .with_environment(Environment::Production)
//!     .with_level("info")
//!     .build()
//!     .expect("Unable to build logger");
//!
//! let request = FieldBuilder::new().request_id("7f1c").method("GET");
//! logger.debug("Sending request", request.build()); // filtered out
//!
//! let response = request.status(200).duration_ms(15);
//! logger.info("Request completed", response.build());
//! ```
//!
//! ## Request-scoped loggers
//! ```rust
//! use fieldlog::{FieldBuilder, LogBuffer, RequestContext, logger_config};
//!
//! let buffer = LogBuffer::new();
//! let root = logger_config()
//!     .with_environment(fieldlog::Environment::Production)
//!     .with_level("debug")
//!     .with_writer(buffer.clone())
//!     .build()
//!     .unwrap();
//!
//! let ctx = RequestContext::new().with_fields(&root, FieldBuilder::new().request_id("r-1").build());
//! ctx.logger(&root).info("handled", FieldBuilder::new().status(204).build());
//! assert!(buffer.lines()[0].ends_with("handled\trequest-id=\"r-1\" status=204"));
//! ```
//!
//! ## Environment
//! Without explicit settings, `FIELDLOG_ENV` and `FIELDLOG_LEVEL` are read
//! once when the logger is built. `FIELDLOG_ENV` values containing `dev`,
//! `local` or `test` select development, values containing `prod` select
//! production. Anything else falls back to development and the logger
//! reports it with a warning.

mod config;
mod error;
mod format;
mod log_writer;
mod logger;

use std::sync::Arc;

use log::LevelFilter;

pub use config::{Environment, Preset, Settings, parse_level};
pub use error::{Error, Result};
pub use fieldlog_core::{Field, FieldBuilder, Fields, Value, keys};
pub use format::{TIME_FORMAT, format_record};
pub use log_writer::{LogBuffer, LogStdout, LogWriter};
pub use logger::{FieldLogger, Logger, RequestContext};

use logger::{DEFAULT_TARGET, GlobalLogger};

/// Builder for configuring and initializing a [`Logger`].
pub struct ConfigBuilder {
    settings: Option<Settings>,
    environment: Option<Environment>,
    level: Option<LevelFilter>,
    writer: Option<Box<dyn LogWriter>>,
    name: Option<String>,
    no_target: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            settings: None,
            environment: None,
            level: None,
            writer: None,
            name: None,
            no_target: false,
        }
    }
}

impl ConfigBuilder {
    fn build_backend(self) -> Result<(Arc<FieldLogger>, String)> {
        let Self {
            settings,
            environment,
            level,
            writer,
            name,
            no_target,
        } = self;
        let (environment, level) = match (environment, level) {
            (Some(environment), Some(level)) => (environment, level),
            (environment, level) => {
                let settings = match settings {
                    Some(settings) => settings,
                    None => Settings::load()?,
                };
                (
                    environment.unwrap_or_else(|| settings.environment()),
                    level.unwrap_or_else(|| settings.level()),
                )
            }
        };
        let mut preset = Preset::for_environment(environment);
        if no_target {
            preset.show_target = false;
        }
        let writer = writer.unwrap_or_else(|| Box::new(LogStdout));
        let backend = Arc::new(FieldLogger::new(preset, level, writer));
        Ok((backend, name.unwrap_or_else(|| DEFAULT_TARGET.into())))
    }

    /// Uses `settings` instead of reading them from the environment.
    pub fn with_settings(self, settings: Settings) -> Self {
        Self {
            settings: Some(settings),
            ..self
        }
    }
    /// Sets the environment, overriding `FIELDLOG_ENV`.
    pub fn with_environment(self, environment: Environment) -> Self {
        Self {
            environment: Some(environment),
            ..self
        }
    }
    /// Sets the maximum level by name, overriding `FIELDLOG_LEVEL`.
    pub fn with_level(self, level: &str) -> Self {
        Self {
            level: Some(parse_level(level)),
            ..self
        }
    }
    pub fn with_level_filter(self, level: LevelFilter) -> Self {
        Self {
            level: Some(level),
            ..self
        }
    }
    /// Sends lines to `writer` instead of stdout.
    pub fn with_writer<W: LogWriter + 'static>(self, writer: W) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            ..self
        }
    }
    /// Sets the target of records emitted through the [`Logger`].
    pub fn with_name(self, name: &str) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
    /// Never print record targets.
    pub fn no_target(self) -> Self {
        Self {
            no_target: true,
            ..self
        }
    }
    /// Builds a logger without touching global state.
    pub fn build(self) -> Result<Logger> {
        let (backend, name) = self.build_backend()?;
        let logger = Logger::new(backend, &name);
        logger.warn_if_fallback();
        Ok(logger)
    }
    /// Builds a logger and installs its backend behind the `log` facade,
    /// so `log::info!` and friends use the same encoders.
    /// Fails if a global logger is already installed.
    pub fn init_global(self) -> Result<Logger> {
        let (backend, name) = self.build_backend()?;
        let level = backend.level();
        log::set_boxed_logger(Box::new(GlobalLogger(Arc::clone(&backend))))?;
        log::set_max_level(level);
        let logger = Logger::new(backend, &name);
        logger.warn_if_fallback();
        Ok(logger)
    }
}

/// Returns a default ConfigBuilder for configuring the logger.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}
