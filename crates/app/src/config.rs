//! Runtime configuration: defaults, then environment, then command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

pub const DATA_DIR_NAME: &str = ".catv";
pub const DATABASE_FILE: &str = "flashcards.db";
pub const LOG_FILE: &str = "catv.log";
pub const DEFAULT_QUESTION_SECS: u64 = 30;
pub const MAX_QUESTION_SECS: u64 = 60 * 60;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_DATA_DIR: &str = "CATV_DATA_DIR";
pub const ENV_DB_URL: &str = "CATV_DB_URL";
pub const ENV_QUESTION_SECS: &str = "CATV_QUESTION_SECS";
pub const ENV_LOG: &str = "CATV_LOG";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid question time: {raw}")]
    InvalidQuestionSecs { raw: String },
    #[error("question time must be at least one second")]
    ZeroQuestionTime,
    #[error("question time cannot exceed 3600 seconds, got {secs}")]
    QuestionTimeTooLong { secs: u64 },
    #[error("database URL cannot be empty")]
    EmptyDatabaseUrl,
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub database_url: Option<String>,
    pub question_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub database_url: String,
    pub question_time: Duration,
    pub log_filter: String,
}

impl AppConfig {
    /// Resolve configuration from the process environment and `overrides`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed or fails validation.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok(), dirs::home_dir(), overrides)
    }

    /// Resolve configuration from an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed or fails validation.
    pub fn resolve(
        env: impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
        overrides: &Overrides,
    ) -> Result<Self, ConfigError> {
        let lookup = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let data_dir = overrides
            .data_dir
            .clone()
            .or_else(|| lookup(ENV_DATA_DIR).map(PathBuf::from))
            .unwrap_or_else(|| home.unwrap_or_else(|| PathBuf::from(".")).join(DATA_DIR_NAME));

        let database_url = match overrides.database_url.clone().or_else(|| lookup(ENV_DB_URL)) {
            Some(raw) => normalize_sqlite_url(&raw),
            None => sqlite_url_for(&data_dir.join(DATABASE_FILE)),
        };

        let question_secs = match overrides.question_secs {
            Some(secs) => secs,
            None => match lookup(ENV_QUESTION_SECS) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidQuestionSecs { raw })?,
                None => DEFAULT_QUESTION_SECS,
            },
        };

        let config = Self {
            data_dir,
            database_url,
            question_time: Duration::from_secs(question_secs),
            log_filter: lookup(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` for a question time outside one second to one
    /// hour, or for an empty database URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.question_time.is_zero() {
            return Err(ConfigError::ZeroQuestionTime);
        }
        if self.question_time > Duration::from_secs(MAX_QUESTION_SECS) {
            return Err(ConfigError::QuestionTimeTooLong {
                secs: self.question_time.as_secs(),
            });
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }
        Ok(())
    }

    /// Create the data directory (owner-only on unix) if it is missing.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> std::io::Result<()> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }
        builder.create(&self.data_dir)
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

fn sqlite_url_for(path: &Path) -> String {
    format!("sqlite://{}", path.display())
}

/// Accept bare paths and `sqlite:` URLs; relative paths are anchored at the
/// current directory.
fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("sqlite://") || trimmed.starts_with("sqlite::memory:") {
        return trimmed.to_owned();
    }
    if trimmed.starts_with("sqlite:file:") {
        return trimmed.to_owned();
    }

    let path = Path::new(trimmed.strip_prefix("sqlite:").unwrap_or(trimmed));
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    sqlite_url_for(&absolute)
}
