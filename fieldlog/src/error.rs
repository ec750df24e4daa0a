use thiserror::Error;

/// Errors raised while setting up a logger.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read logger settings from the environment: {0}")]
    Settings(String),

    #[error("a global logger is already installed")]
    SetLogger(#[from] log::SetLoggerError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
