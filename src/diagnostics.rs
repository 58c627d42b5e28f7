//! Daily diagnostics log.
//!
//! Entries go to `<dir>/DD-MM-YYYY.log`, one line each:
//! `DD-MM-YYYY HH:MM:SS LEVEL MESSAGE`. Files are only ever appended to.

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "ERROR"),
            Level::Warning => write!(f, "WARNING"),
            Level::Info => write!(f, "INFO"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    #[error("Failed to create log directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write log file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Append-only sink keyed by calendar day.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    dir: PathBuf,
}

impl DiagnosticsLog {
    /// Opens the sink, creating `dir` if it does not exist yet.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, DiagnosticsError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| DiagnosticsError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name, relative to the log directory, for entries made on `date`.
    pub fn file_name(date: NaiveDate) -> String {
        format!("{}.log", date.format("%d-%m-%Y"))
    }

    /// Log file that holds the entries for `date`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(Self::file_name(date))
    }

    pub fn log(&self, level: Level, message: &str) -> Result<(), DiagnosticsError> {
        self.log_at(Local::now().naive_local(), level, message)
    }

    pub fn log_at(
        &self,
        timestamp: NaiveDateTime,
        level: Level,
        message: &str,
    ) -> Result<(), DiagnosticsError> {
        match level {
            Level::Error => tracing::error!("{}", message),
            Level::Warning => tracing::warn!("{}", message),
            Level::Info => tracing::info!("{}", message),
        }

        let path = self.path_for(timestamp.date());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| DiagnosticsError::Write {
                path: path.clone(),
                source,
            })?;

        writeln!(
            file,
            "{} {} {}",
            timestamp.format("%d-%m-%Y %H:%M:%S"),
            level,
            message
        )
        .map_err(|source| DiagnosticsError::Write { path, source })
    }

    /// Like [`log`](Self::log), but a failure of the sink is only reported on the console.
    pub fn record(&self, level: Level, message: &str) {
        if let Err(e) = self.log(level, message) {
            tracing::error!("Diagnostic not recorded ({}): {}", e, message);
        }
    }
}
