//! Saving and loading menu files.
//!
//! Loading is best-effort: every bad line is collected as a [`LineFailure`]
//! and skipped, and only a file that cannot be opened or read fails the load.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::codec::{self, DecodeError, LineOutcome};
use crate::diagnostics::{DiagnosticsLog, Level};
use crate::models::Dish;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A line that was skipped during a load.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFailure {
    /// 1-based line number in the source file.
    pub line_number: usize,
    pub line: String,
    pub error: DecodeError,
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to parse line {}: {}. Error: {}",
            self.line_number, self.line, self.error
        )
    }
}

/// Everything a load produced: the dishes that parsed and the lines that did not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub dishes: Vec<Dish>,
    pub failures: Vec<LineFailure>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Overwrites `path` with one line per dish.
pub fn save(dishes: &[Dish], path: &Path) -> Result<(), PersistenceError> {
    let file = File::create(path).map_err(|source| PersistenceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let write_err = |source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };
    for dish in dishes {
        writeln!(writer, "{}", codec::encode(dish)).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    tracing::debug!("Saved {} dish(es) to {}", dishes.len(), path.display());
    Ok(())
}

/// Reads `path`, decoding each non-blank line independently.
pub fn read_menu(path: &Path) -> Result<LoadReport, PersistenceError> {
    let file = File::open(path).map_err(|source| PersistenceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut report = LoadReport::default();
    for (index, bytes) in BufReader::new(file).split(b'\n').enumerate() {
        let bytes = bytes.map_err(|source| PersistenceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (line, outcome) = match String::from_utf8(bytes) {
            Ok(line) => {
                let outcome = codec::decode_line(&line);
                (line, outcome)
            }
            Err(e) => (
                String::from_utf8_lossy(e.as_bytes()).into_owned(),
                LineOutcome::Failed(DecodeError::InvalidEncoding),
            ),
        };

        match outcome {
            LineOutcome::Blank => {}
            LineOutcome::Parsed(dish) => report.dishes.push(dish),
            LineOutcome::Failed(error) => report.failures.push(LineFailure {
                line_number: index + 1,
                line: line.trim().to_string(),
                error,
            }),
        }
    }

    tracing::debug!(
        "Read {} dish(es) from {} ({} line(s) skipped)",
        report.dishes.len(),
        path.display(),
        report.failures.len()
    );
    Ok(report)
}

/// Menu file operations that report skipped lines to the diagnostics log.
pub struct MenuFileHandler<'a> {
    log: &'a DiagnosticsLog,
}

impl<'a> MenuFileHandler<'a> {
    pub fn new(log: &'a DiagnosticsLog) -> Self {
        Self { log }
    }

    pub fn save(&self, dishes: &[Dish], path: &Path) -> Result<(), PersistenceError> {
        save(dishes, path)
    }

    /// Loads `path`, writing one `ERROR` entry per skipped line.
    pub fn load(&self, path: &Path) -> Result<LoadReport, PersistenceError> {
        let report = read_menu(path)?;
        for failure in &report.failures {
            self.log.record(Level::Error, &failure.to_string());
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn log_lines(log: &DiagnosticsLog) -> Vec<String> {
        let mut lines = Vec::new();
        for entry in std::fs::read_dir(log.dir()).unwrap() {
            let contents = std::fs::read_to_string(entry.unwrap().path()).unwrap();
            lines.extend(contents.lines().map(String::from));
        }
        lines
    }

    #[test]
    fn test_save_writes_one_line_per_dish() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("menu.txt");
        let dishes = vec![
            Dish::new("Pasta Carbonara", 450.0, 0, 20).unwrap(),
            Dish::new("Tea", 50.5, 0, 5).unwrap(),
        ];

        save(&dishes, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Pasta Carbonara,450.0,00:20\nTea,50.5,00:05\n");
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("menu.txt");
        std::fs::write(&path, "old,1.0,00:01\nolder,2.0,00:02\n").unwrap();

        save(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("menu.txt");
        let dish = Dish::new("Паста Карбонара", 450.0, 0, 20).unwrap();

        save(std::slice::from_ref(&dish), &path).unwrap();
        let report = read_menu(&path).unwrap();

        assert_eq!(report.dishes, vec![dish]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("menu.txt");

        let err = save(&[], &path).unwrap_err();
        assert!(matches!(err, PersistenceError::Open { .. }));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = tempdir().unwrap();
        let err = read_menu(&temp_dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, PersistenceError::Open { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("menu.txt");
        std::fs::write(&path, "\nPasta,450.0,00:20\n   \n\t\nSoup,200.0,00:10\n").unwrap();

        let report = read_menu(&path).unwrap();
        assert_eq!(report.dishes.len(), 2);
        assert!(report.is_clean());
    }

    #[test]
    fn test_load_collects_failures_with_line_numbers() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("menu.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Pasta,450.0,00:20").unwrap();
        writeln!(file).unwrap();
        writeln!(file, ",450.0,00:20").unwrap();
        writeln!(file, "Pasta,-450.0,00:20").unwrap();
        writeln!(file, "Soup,200.0,00:10").unwrap();
        writeln!(file, "Pasta,450.0,25:20").unwrap();
        writeln!(file, "Pasta,lots,00:20").unwrap();
        writeln!(file, "just a name").unwrap();

        let report = read_menu(&path).unwrap();

        assert_eq!(report.dishes.len(), 2);
        let failures: Vec<(usize, &DecodeError)> = report
            .failures
            .iter()
            .map(|f| (f.line_number, &f.error))
            .collect();
        assert_eq!(
            failures,
            vec![
                (3, &DecodeError::EmptyName),
                (4, &DecodeError::NonPositivePrice("-450.0".to_string())),
                (6, &DecodeError::InvalidTime("25:20".to_string())),
                (7, &DecodeError::NotANumber("lots".to_string())),
                (8, &DecodeError::MalformedLine(1)),
            ]
        );
        assert_eq!(report.failures[0].line, ",450.0,00:20");
    }

    #[test]
    fn test_load_skips_line_with_invalid_utf8() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("menu.txt");
        std::fs::write(
            &path,
            b"Pasta,450.0,00:20\nBad\xff\xfe,1.0,00:01\nSoup,200.0,00:10\n",
        )
        .unwrap();

        let report = read_menu(&path).unwrap();

        assert_eq!(report.dishes.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].line_number, 2);
        assert_eq!(report.failures[0].error, DecodeError::InvalidEncoding);
        assert!(report.failures[0].line.starts_with("Bad"));
    }

    #[test]
    fn test_load_handles_crlf_and_missing_final_newline() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("menu.txt");
        std::fs::write(&path, "Pasta,450.0,00:20\r\nSoup,200.0,00:10").unwrap();

        let report = read_menu(&path).unwrap();
        assert_eq!(report.dishes.len(), 2);
        assert!(report.is_clean());
    }

    #[test]
    fn test_line_failure_display() {
        let failure = LineFailure {
            line_number: 3,
            line: ",450.0,00:20".to_string(),
            error: DecodeError::EmptyName,
        };
        assert_eq!(
            failure.to_string(),
            "Failed to parse line 3: ,450.0,00:20. Error: Dish name cannot be empty"
        );
    }

    #[test]
    fn test_handler_logs_one_entry_per_bad_line() {
        let temp_dir = tempdir().unwrap();
        let log = DiagnosticsLog::open(temp_dir.path().join("logs")).unwrap();
        let handler = MenuFileHandler::new(&log);
        let path = temp_dir.path().join("menu.txt");
        std::fs::write(
            &path,
            "Pasta,450.0,00:20\n,450.0,00:20\n\nSoup,x,00:10\nTea,30.0,00:03\n",
        )
        .unwrap();

        let report = handler.load(&path).unwrap();

        assert_eq!(report.dishes.len(), 2);
        let lines = log_lines(&log);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" ERROR Failed to parse line 2: ,450.0,00:20."));
        assert!(lines[1].contains("line 4: Soup,x,00:10"));
    }

    #[test]
    fn test_handler_clean_load_logs_nothing() {
        let temp_dir = tempdir().unwrap();
        let log = DiagnosticsLog::open(temp_dir.path().join("logs")).unwrap();
        let handler = MenuFileHandler::new(&log);
        let path = temp_dir.path().join("menu.txt");
        let dishes = vec![Dish::new("Pasta", 450.0, 0, 20).unwrap()];

        handler.save(&dishes, &path).unwrap();
        let report = handler.load(&path).unwrap();

        assert_eq!(report.dishes, dishes);
        assert!(log_lines(&log).is_empty());
    }
}
