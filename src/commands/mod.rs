mod config_cmd;
mod dish;
mod menu;

pub use config_cmd::ConfigCommand;
pub use dish::DishCommand;
pub use menu::MenuCommand;

use std::io::{self, Write};

use menu_manager::config::Config;
use menu_manager::{persistence, DiagnosticsLog, MenuFileHandler, MenuStore};

/// Working menu file plus the log that load failures are reported to.
pub struct Workspace<'a> {
    pub config: &'a Config,
    pub log: &'a DiagnosticsLog,
}

impl<'a> Workspace<'a> {
    pub fn new(config: &'a Config, log: &'a DiagnosticsLog) -> Self {
        Self { config, log }
    }

    pub fn handler(&self) -> MenuFileHandler<'a> {
        MenuFileHandler::new(self.log)
    }

    /// Loads the configured menu file for editing, or an empty menu if it does not
    /// exist yet. Unreadable lines are logged and dropped on the next save.
    pub fn open_store(&self) -> Result<MenuStore, Box<dyn std::error::Error>> {
        let path = &self.config.menu_file.value;
        if !path.exists() {
            tracing::debug!("Menu file {} not found, starting empty", path.display());
            return Ok(MenuStore::new());
        }

        let report = self.handler().load(path)?;
        if !report.is_clean() {
            eprintln!(
                "Warning: {} unreadable line(s) in {} will be removed when the menu is saved (details in {})",
                report.failures.len(),
                path.display(),
                self.log.dir().display()
            );
        }
        Ok(MenuStore::from(report.dishes))
    }

    /// Loads the configured menu file for display only. Nothing is logged;
    /// `menu check` reports the unreadable lines.
    pub fn read_store(&self) -> Result<MenuStore, Box<dyn std::error::Error>> {
        let path = &self.config.menu_file.value;
        if !path.exists() {
            return Ok(MenuStore::new());
        }

        let report = persistence::read_menu(path)?;
        if !report.is_clean() {
            eprintln!(
                "Warning: {} unreadable line(s) in {} not shown (run `menu check`)",
                report.failures.len(),
                path.display()
            );
        }
        Ok(MenuStore::from(report.dishes))
    }

    pub fn persist(&self, store: &MenuStore) -> Result<(), Box<dyn std::error::Error>> {
        let path = &self.config.menu_file.value;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.handler().save(&store.snapshot(), path)?;
        Ok(())
    }
}

/// Asks a yes/no question on stdin; anything but `y` is a no.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
