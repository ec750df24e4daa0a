use std::sync::LazyLock;

use derive_from_env::FromEnv;
use log::LevelFilter;
use regex::Regex;

use crate::error::{Error, Result};

/// Raw logger settings, read once from `FIELDLOG_ENV` and `FIELDLOG_LEVEL`.
#[derive(FromEnv)]
#[from_env(prefix = "FIELDLOG")]
#[allow(non_snake_case)]
pub struct Settings {
    #[from_env(default = "")]
    pub ENV: String,
    #[from_env(default = "debug")]
    pub LEVEL: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env().map_err(|e| Error::Settings(format!("{e:?}")))
    }

    pub fn environment(&self) -> Environment {
        Environment::detect(&self.ENV)
    }

    pub fn level(&self) -> LevelFilter {
        parse_level(&self.LEVEL)
    }
}

/// Deployment environment a logger is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    /// Nothing recognizable was configured.
    Unknown,
}

fn one_of(tokens: &[&str]) -> Regex {
    let alternation = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("escaped alternation is a valid regex")
}

static DEVELOPMENT: LazyLock<Regex> = LazyLock::new(|| one_of(&["dev", "local", "test"]));
static PRODUCTION: LazyLock<Regex> = LazyLock::new(|| one_of(&["prod"]));

impl Environment {
    /// Resolves a raw environment name.
    ///
    /// A name matches when it contains one of the tokens, so `test-local`,
    /// `development` and `dev` are all development. Development tokens are
    /// checked before production ones.
    pub fn detect(name: &str) -> Self {
        if DEVELOPMENT.is_match(name) {
            Environment::Development
        } else if PRODUCTION.is_match(name) {
            Environment::Production
        } else {
            Environment::Unknown
        }
    }
}

/// Encoder settings selected by environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Environment this preset was resolved from.
    pub environment: Environment,
    pub colored_level: bool,
    pub show_target: bool,
}

impl Preset {
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            colored_level: true,
            show_target: true,
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            colored_level: false,
            show_target: false,
        }
    }

    /// Unknown environments get the development encoders.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
            Environment::Unknown => Self {
                environment,
                ..Self::development()
            },
        }
    }

    /// Whether this preset stands in for an unrecognized environment.
    pub fn is_fallback(&self) -> bool {
        self.environment == Environment::Unknown
    }
}

/// Parses a level name; `fatal` maps to `error` and anything unknown to `info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" | "fatal" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}
