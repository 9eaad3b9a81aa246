//! Value objects shared by the entities

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ValidationError;

/// Largest amount a `DECIMAL(10,2)` column holds.
const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Money value object: a non-negative amount with two decimal places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal, field: &'static str) -> Result<Self, ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::Negative(field));
        }
        let amount = amount.round_dp(2);
        if amount > MAX_AMOUNT {
            return Err(ValidationError::TooLarge(field));
        }
        Ok(Self(amount))
    }
    pub fn amount(&self) -> Decimal { self.0 }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:.2}", self.0) }
}

/// Trimmed, non-empty string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredText(String);

impl RequiredText {
    pub fn new(value: impl AsRef<str>, field: &'static str) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim();
        if value.is_empty() { return Err(ValidationError::Empty(field)); }
        Ok(Self(value.to_string()))
    }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// Store-assigned identifier, always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    pub fn new(value: i64, field: &'static str) -> Result<Self, ValidationError> {
        if value <= 0 { return Err(ValidationError::NotPositive(field)); }
        Ok(Self(value))
    }
    pub fn value(&self) -> i64 { self.0 }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Blank variations are stored as NULL.
pub fn normalize_variation(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
