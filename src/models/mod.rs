mod dish;
mod locale;

pub use dish::{Dish, ValidationError};
pub use locale::Locale;
