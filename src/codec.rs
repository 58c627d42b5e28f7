//! One-dish-per-line text format: `name,price,HH:MM`.
//!
//! No quoting or escaping is applied, so a name containing a comma produces a
//! line that will not decode.

use thiserror::Error;

use crate::models::{Dish, ValidationError};

/// Why a single menu line could not be turned into a dish.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("expected 3 comma-separated fields, found {0}")]
    MalformedLine(usize),

    #[error("Dish name cannot be empty")]
    EmptyName,

    #[error("Price is not a number: {0}")]
    NotANumber(String),

    #[error("Price must be positive: {0}")]
    NonPositivePrice(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("line is not valid UTF-8")]
    InvalidEncoding,
}

impl From<ValidationError> for DecodeError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => DecodeError::EmptyName,
            ValidationError::NonPositivePrice(price) => {
                DecodeError::NonPositivePrice(price.to_string())
            }
            ValidationError::InvalidTime { hour, minute } => {
                DecodeError::InvalidTime(format!("{:02}:{:02}", hour, minute))
            }
        }
    }
}

/// Result of decoding one line of a menu file.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Empty or whitespace-only line; not a record and not a failure.
    Blank,
    Parsed(Dish),
    Failed(DecodeError),
}

/// Formats a dish as one menu line, without a trailing newline.
pub fn encode(dish: &Dish) -> String {
    format!(
        "{},{},{}",
        dish.name(),
        format_price(dish.price()),
        format_time(dish)
    )
}

/// Decodes one raw line, classifying blank lines separately from failures.
pub fn decode_line(line: &str) -> LineOutcome {
    if line.trim().is_empty() {
        return LineOutcome::Blank;
    }
    match decode(line) {
        Ok(dish) => LineOutcome::Parsed(dish),
        Err(err) => LineOutcome::Failed(err),
    }
}

/// Decodes a non-blank line. A blank line yields `MalformedLine`.
pub fn decode(line: &str) -> Result<Dish, DecodeError> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    let [name, price, time] = fields.as_slice() else {
        return Err(DecodeError::MalformedLine(fields.len()));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(DecodeError::EmptyName);
    }

    let price_text = price.trim();
    let price: f64 = price_text
        .parse()
        .map_err(|_| DecodeError::NotANumber(price_text.to_string()))?;
    if !price.is_finite() {
        return Err(DecodeError::NotANumber(price_text.to_string()));
    }
    if price <= 0.0 {
        return Err(DecodeError::NonPositivePrice(price_text.to_string()));
    }

    let time_text = time.trim();
    let (hour, minute) =
        parse_time(time_text).ok_or_else(|| DecodeError::InvalidTime(time_text.to_string()))?;

    Ok(Dish::new(name, price, hour, minute)?)
}

/// Parses `H:M` into an in-range hour and minute.
pub fn parse_time(text: &str) -> Option<(u32, u32)> {
    let (hour, minute) = text.trim().split_once(':')?;
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// Shortest representation that reads back to the same value, keeping a
/// fractional part on whole numbers (`450.0`, not `450`). From `1e16` up the
/// exponent form is used, written without a sign (`1e16`).
fn format_price(price: f64) -> String {
    format!("{:?}", price)
}

/// `HH:MM` for a dish's preparation time.
pub fn format_time(dish: &Dish) -> String {
    dish.prep_time().format("%H:%M").to_string()
}
