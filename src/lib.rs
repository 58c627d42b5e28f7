//! Restaurant menu core.
//!
//! Dishes, the in-memory menu, the `name,price,HH:MM` line format, best-effort
//! menu file loading and the daily diagnostics log. Everything runs on the
//! caller's thread; `MenuStore` is mutated through `&mut self` only and hands
//! out copies, so no locking is involved.

pub mod codec;
pub mod config;
pub mod diagnostics;
pub mod models;
pub mod persistence;
pub mod store;
pub mod table;

pub use codec::{DecodeError, LineOutcome};
pub use diagnostics::{DiagnosticsError, DiagnosticsLog, Level};
pub use models::{Dish, Locale, ValidationError};
pub use persistence::{LineFailure, LoadReport, MenuFileHandler, PersistenceError};
pub use store::MenuStore;
pub use table::{MenuRow, MenuTable};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_load_replaces_store_contents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log = DiagnosticsLog::open(temp_dir.path().join("logs")).unwrap();
        let handler = MenuFileHandler::new(&log);
        let path = temp_dir.path().join("menu.txt");
        std::fs::write(&path, "Pasta,450.0,00:20\nbroken line\nSoup,200.0,00:10\n").unwrap();

        let mut store = MenuStore::new();
        store.add(Dish::new("Stale", 1.0, 0, 1).unwrap());
        let report = handler.load(&path).unwrap();
        store.replace(report.dishes);

        let names: Vec<String> = store
            .snapshot()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["Pasta", "Soup"]);
        assert_eq!(report.failures.len(), 1);
    }
}
