use clap::{Args, Subcommand, ValueEnum};

use menu_manager::codec;
use menu_manager::{Dish, Level, MenuTable, ValidationError};

use super::{confirm, Workspace};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct DishCommand {
    #[command(subcommand)]
    pub command: DishSubcommand,
}

#[derive(Subcommand)]
pub enum DishSubcommand {
    /// Add a dish to the end of the menu
    Add {
        /// Name of the dish
        name: String,

        /// Price, must be positive
        #[arg(long, allow_negative_numbers = true)]
        price: f64,

        /// Preparation time
        #[arg(long, value_name = "HH:MM")]
        prep_time: String,
    },

    /// Show the menu
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete the dish at a position shown by `list`
    Delete {
        /// 1-based position in the menu
        position: usize,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Remove every dish from the menu
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl DishCommand {
    pub fn run(&self, workspace: &Workspace<'_>) -> Result<(), Box<dyn std::error::Error>> {
        let locale = workspace.config.locale.value;

        match &self.command {
            DishSubcommand::Add {
                name,
                price,
                prep_time,
            } => {
                let dish = match validate_entry(name, *price, prep_time) {
                    Ok(dish) => dish,
                    Err(message) => {
                        workspace.log.record(Level::Warning, &message);
                        return Err(message.into());
                    }
                };

                if dish.name().contains(',') {
                    workspace.log.record(
                        Level::Warning,
                        &format!(
                            "Dish name '{}' contains a comma and will not load back from the menu file",
                            dish.name()
                        ),
                    );
                }

                let mut store = workspace.open_store()?;
                store.add(dish.clone());
                workspace.persist(&store)?;

                println!("Added dish: {}", dish);
                Ok(())
            }

            DishSubcommand::List { format } => {
                let store = workspace.read_store()?;
                let table = MenuTable::from_snapshot(&store.snapshot(), locale);

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(table.rows())?);
                    }
                    OutputFormat::Text => {
                        println!("{}", table);
                    }
                }
                Ok(())
            }

            DishSubcommand::Delete { position, force } => {
                let mut store = workspace.open_store()?;

                let selected = position
                    .checked_sub(1)
                    .and_then(|index| store.get(index).map(|dish| (index, dish.name().to_string())));
                let Some((index, name)) = selected else {
                    workspace.log.record(
                        Level::Warning,
                        &format!("Attempt to delete a dish without a selection (position {})", position),
                    );
                    println!("{}", locale.no_selection());
                    return Ok(());
                };

                if !force && !confirm(&locale.confirm_delete(&name))? {
                    println!("{}", locale.cancelled());
                    return Ok(());
                }

                store.delete_at(index);
                workspace.persist(&store)?;
                println!("Deleted dish: {}", name);
                Ok(())
            }

            DishSubcommand::Clear { force } => {
                let mut store = workspace.open_store()?;
                if store.is_empty() {
                    println!("{}", locale.empty_menu());
                    return Ok(());
                }

                if !force && !confirm(&locale.confirm_clear(store.len()))? {
                    println!("{}", locale.cancelled());
                    return Ok(());
                }

                let count = store.len();
                store.clear();
                workspace.persist(&store)?;
                println!("Removed {} dish(es)", count);
                Ok(())
            }
        }
    }
}

/// Turns raw form input into a dish, or a message describing what is wrong with it.
fn validate_entry(name: &str, price: f64, prep_time: &str) -> Result<Dish, String> {
    let (hour, minute) = codec::parse_time(prep_time)
        .ok_or_else(|| format!("Invalid preparation time: {}", prep_time))?;

    Dish::new(name, price, hour, minute).map_err(|e| match e {
        ValidationError::EmptyName => "Attempt to add a dish with an empty name".to_string(),
        ValidationError::NonPositivePrice(price) => format!("Invalid price: {}", price),
        other => other.to_string(),
    })
}
