use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for table headers and user-facing prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Column headers: name, price, preparation time.
    pub fn headers(&self) -> [&'static str; 3] {
        match self {
            Locale::En => ["Name", "Price", "Preparation time"],
            Locale::Ru => ["Название", "Цена", "Время приготовления"],
        }
    }

    pub fn empty_menu(&self) -> &'static str {
        match self {
            Locale::En => "The menu is empty",
            Locale::Ru => "Меню пусто",
        }
    }

    pub fn total(&self, count: usize) -> String {
        match self {
            Locale::En => format!("Total: {} dish(es)", count),
            Locale::Ru => format!("Всего блюд: {}", count),
        }
    }

    pub fn confirm_delete(&self, name: &str) -> String {
        match self {
            Locale::En => format!("Delete dish '{}'? [y/N] ", name),
            Locale::Ru => format!("Удалить блюдо '{}'? [y/N] ", name),
        }
    }

    pub fn confirm_clear(&self, count: usize) -> String {
        match self {
            Locale::En => format!("Remove all {} dish(es) from the menu? [y/N] ", count),
            Locale::Ru => format!("Удалить все блюда из меню ({})? [y/N] ", count),
        }
    }

    pub fn cancelled(&self) -> &'static str {
        match self {
            Locale::En => "Cancelled.",
            Locale::Ru => "Отменено.",
        }
    }

    pub fn no_selection(&self) -> &'static str {
        match self {
            Locale::En => "Select a dish to delete",
            Locale::Ru => "Выберите блюдо для удаления",
        }
    }

    pub fn load_succeeded(&self) -> &'static str {
        match self {
            Locale::En => "Menu loaded successfully",
            Locale::Ru => "Меню успешно загружено",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ru => write!(f, "ru"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(format!("Invalid locale '{}'. Valid options: en, ru", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_headers() {
        assert_eq!(
            Locale::Ru.headers(),
            ["Название", "Цена", "Время приготовления"]
        );
        assert_eq!(Locale::En.headers()[1], "Price");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
        assert_eq!(Locale::from_str("RU").unwrap(), Locale::Ru);
        assert!(Locale::from_str("de").is_err());
        assert!(Locale::from_str("").is_err());
    }

    #[test]
    fn test_locale_yaml_roundtrip() {
        let yaml = serde_yaml::to_string(&Locale::Ru).unwrap();
        assert_eq!(yaml.trim(), "ru");

        let parsed: Locale = serde_yaml::from_str("en").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
