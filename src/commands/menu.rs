use clap::{Args, Subcommand};
use std::path::PathBuf;

use menu_manager::{persistence, Level, MenuStore};

use super::Workspace;

#[derive(Args)]
pub struct MenuCommand {
    #[command(subcommand)]
    pub command: MenuSubcommand,
}

#[derive(Subcommand)]
pub enum MenuSubcommand {
    /// Replace the working menu with the dishes read from a file
    Load {
        /// Menu file to read
        source: PathBuf,
    },

    /// Write the working menu to a file
    Save {
        /// Destination file, overwritten if it exists
        destination: PathBuf,
    },

    /// Report the lines of a menu file that cannot be read, without changing anything
    Check {
        /// Menu file to check (defaults to the working menu)
        file: Option<PathBuf>,
    },
}

impl MenuCommand {
    pub fn run(&self, workspace: &Workspace<'_>) -> Result<(), Box<dyn std::error::Error>> {
        let locale = workspace.config.locale.value;

        match &self.command {
            MenuSubcommand::Load { source } => {
                let report = match workspace.handler().load(source) {
                    Ok(report) => report,
                    Err(e) => {
                        workspace
                            .log
                            .record(Level::Error, &format!("Failed to load file: {}", e));
                        return Err(e.into());
                    }
                };

                let mut store = MenuStore::new();
                let skipped = report.failures.len();
                store.replace(report.dishes);
                workspace.persist(&store)?;

                println!("{} ({} dish(es))", locale.load_succeeded(), store.len());
                if skipped > 0 {
                    println!(
                        "Skipped {} line(s); details in {}",
                        skipped,
                        workspace.log.dir().display()
                    );
                }
                Ok(())
            }

            MenuSubcommand::Save { destination } => {
                let store = workspace.read_store()?;
                if let Err(e) = workspace.handler().save(&store.snapshot(), destination) {
                    workspace
                        .log
                        .record(Level::Error, &format!("Failed to save file: {}", e));
                    return Err(e.into());
                }

                println!(
                    "Saved {} dish(es) to {}",
                    store.len(),
                    destination.display()
                );
                Ok(())
            }

            MenuSubcommand::Check { file } => {
                let path = file
                    .clone()
                    .unwrap_or_else(|| workspace.config.menu_file.value.clone());
                let report = persistence::read_menu(&path)?;

                for failure in &report.failures {
                    println!("{}", failure);
                }
                println!(
                    "{}: {} dish(es), {} bad line(s)",
                    path.display(),
                    report.dishes.len(),
                    report.failures.len()
                );

                if report.is_clean() {
                    Ok(())
                } else {
                    Err(format!("{} line(s) could not be read", report.failures.len()).into())
                }
            }
        }
    }
}
