//! Product Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::value_objects::{EntityId, Money, RequiredText};
use crate::domain::ValidationError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Product {
    id: Option<EntityId>,
    name: RequiredText,
    price: Money,
    created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn create(name: &str, price: Decimal) -> Result<Self, ValidationError> {
        Ok(Self { id: None, name: RequiredText::new(name, "name")?, price: Money::new(price, "price")?, created_at: None })
    }

    /// Rebuilds a product from a stored row, re-checking every invariant.
    pub fn restore(id: i64, name: &str, price: Decimal, created_at: Option<DateTime<Utc>>) -> Result<Self, ValidationError> {
        let mut product = Self::create(name, price)?;
        product.set_id(id)?;
        product.created_at = created_at;
        Ok(product)
    }

    pub fn id(&self) -> Option<EntityId> { self.id }
    pub fn name(&self) -> &str { self.name.as_str() }
    pub fn price(&self) -> Money { self.price }
    pub fn created_at(&self) -> Option<DateTime<Utc>> { self.created_at }

    pub fn set_id(&mut self, id: i64) -> Result<(), ValidationError> {
        self.id = Some(EntityId::new(id, "id")?);
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = RequiredText::new(name, "name")?;
        Ok(())
    }

    pub fn set_price(&mut self, price: Decimal) -> Result<(), ValidationError> {
        self.price = Money::new(price, "price")?;
        Ok(())
    }
}
