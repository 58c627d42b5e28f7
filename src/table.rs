use serde::Serialize;
use std::fmt;

use crate::codec;
use crate::models::{Dish, Locale};

const NAME_WIDTH: usize = 32;

/// One displayed row. Prices are shown with two decimals, times as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuRow {
    /// 1-based position, as used by `dish delete`.
    pub position: usize,
    pub name: String,
    pub price: String,
    pub prep_time: String,
}

impl MenuRow {
    fn from_dish(position: usize, dish: &Dish) -> Self {
        Self {
            position,
            name: dish.name().to_string(),
            price: format!("{:.2}", dish.price()),
            prep_time: codec::format_time(dish),
        }
    }
}

/// Table built from a menu snapshot. Rebuild it after every change to the store.
#[derive(Debug, Clone)]
pub struct MenuTable {
    locale: Locale,
    rows: Vec<MenuRow>,
}

impl MenuTable {
    pub fn from_snapshot(dishes: &[Dish], locale: Locale) -> Self {
        let rows = dishes
            .iter()
            .enumerate()
            .map(|(i, dish)| MenuRow::from_dish(i + 1, dish))
            .collect();
        Self { locale, rows }
    }

    pub fn headers(&self) -> [&'static str; 3] {
        self.locale.headers()
    }

    pub fn rows(&self) -> &[MenuRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers().len()
    }
}

impl fmt::Display for MenuTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "{}", self.locale.empty_menu());
        }

        let [name, price, prep_time] = self.headers();
        writeln!(
            f,
            "{:>3}  {:<NAME_WIDTH$}  {:>10}  {}",
            "#", name, price, prep_time
        )?;
        writeln!(f, "{}", "-".repeat(NAME_WIDTH + 40))?;

        for row in &self.rows {
            let name = if row.name.chars().count() > NAME_WIDTH {
                let truncated: String = row.name.chars().take(NAME_WIDTH - 3).collect();
                format!("{}...", truncated)
            } else {
                row.name.clone()
            };
            writeln!(
                f,
                "{:>3}  {:<NAME_WIDTH$}  {:>10}  {}",
                row.position, name, row.price, row.prep_time
            )?;
        }

        write!(f, "\n{}", self.locale.total(self.rows.len()))
    }
}
