//! Domain layer: validated entities and their value objects.

pub mod aggregates;
pub mod value_objects;

use thiserror::Error;

/// Raised by entity constructors and setters when a field invariant fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{0} must not exceed 99999999.99")]
    TooLarge(&'static str),

    #[error("invalid order status '{0}' (expected pending, cancelled or completed)")]
    InvalidStatus(String),
}
