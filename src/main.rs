use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{ConfigCommand, DishCommand, MenuCommand, Workspace};
use menu_manager::config::Config;
use menu_manager::DiagnosticsLog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "menu")]
#[command(version)]
#[command(about = "Maintain a restaurant menu", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add, list and delete dishes
    Dish(DishCommand),

    /// Load, save and check menu files
    Menu(MenuCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_manager=warn,menu=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;

    match &cli.command {
        Some(Commands::Dish(cmd)) => {
            let log = DiagnosticsLog::open(&config.log_dir.value)?;
            cmd.run(&Workspace::new(&config, &log))?;
        }
        Some(Commands::Menu(cmd)) => {
            let log = DiagnosticsLog::open(&config.log_dir.value)?;
            cmd.run(&Workspace::new(&config, &log))?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
