use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use menu_manager::config::{Config, ConfigSource};
use menu_manager::DiagnosticsLog;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values and the files they resolve to
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// One displayed setting.
#[derive(Debug, Serialize)]
struct Setting {
    key: &'static str,
    value: String,
    source: ConfigSource,
}

/// Effective configuration plus the files it points at today.
#[derive(Debug, Serialize)]
struct ConfigReport {
    config_file: Option<PathBuf>,
    settings: Vec<Setting>,
    menu_file_exists: bool,
    todays_log: PathBuf,
}

impl ConfigReport {
    fn build(config: &Config, today: NaiveDate) -> Self {
        let settings = vec![
            Setting {
                key: "menu_file",
                value: config.menu_file.value.display().to_string(),
                source: config.menu_file.source.clone(),
            },
            Setting {
                key: "log_dir",
                value: config.log_dir.value.display().to_string(),
                source: config.log_dir.source.clone(),
            },
            Setting {
                key: "locale",
                value: config.locale.value.to_string(),
                source: config.locale.source.clone(),
            },
        ];

        Self {
            config_file: config.config_file.clone(),
            settings,
            menu_file_exists: config.menu_file.value.exists(),
            todays_log: config.log_dir.value.join(DiagnosticsLog::file_name(today)),
        }
    }
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                let report = ConfigReport::build(config, Local::now().date_naive());

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    }
                    OutputFormat::Text => {
                        match &report.config_file {
                            Some(path) => println!("Config file: {}", path.display()),
                            None => println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            ),
                        }
                        println!();

                        println!("{:<10}  {:<12}  VALUE", "KEY", "SOURCE");
                        for setting in &report.settings {
                            println!(
                                "{:<10}  {:<12}  {}",
                                setting.key,
                                setting.source.to_string(),
                                setting.value
                            );
                        }
                        println!();

                        if !report.menu_file_exists {
                            println!("Menu file does not exist yet; `dish add` creates it.");
                        }
                        println!("Today's log: {}", report.todays_log.display());
                    }
                }
                Ok(())
            }
        }
    }
}
