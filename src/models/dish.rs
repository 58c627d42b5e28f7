use chrono::{NaiveTime, Timelike};
use std::fmt;
use thiserror::Error;

use crate::codec;

/// Reasons a dish cannot be constructed from user-supplied values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Dish name cannot be empty")]
    EmptyName,

    #[error("Price must be a positive number: {0}")]
    NonPositivePrice(f64),

    #[error("Invalid preparation time: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
}

/// One menu entry. Fields are validated on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    name: String,
    price: f64,
    prep_time: NaiveTime,
}

impl Dish {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        hour: u32,
        minute: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        // NaN fails this comparison too
        if !(price.is_finite() && price > 0.0) {
            return Err(ValidationError::NonPositivePrice(price));
        }

        if hour >= 24 || minute >= 60 {
            return Err(ValidationError::InvalidTime { hour, minute });
        }
        let prep_time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(ValidationError::InvalidTime { hour, minute })?;

        Ok(Self {
            name: name.to_string(),
            price,
            prep_time,
        })
    }

    /// Builds a dish from a time value; seconds are dropped.
    pub fn with_time(
        name: impl Into<String>,
        price: f64,
        prep_time: NaiveTime,
    ) -> Result<Self, ValidationError> {
        Self::new(name, price, prep_time.hour(), prep_time.minute())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn prep_time(&self) -> NaiveTime {
        self.prep_time
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(self))
    }
}
