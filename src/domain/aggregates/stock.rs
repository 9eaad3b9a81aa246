//! Stock Aggregate: quantity on hand for one product variation.

use serde::Serialize;

use crate::domain::value_objects::{normalize_variation, EntityId};
use crate::domain::ValidationError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Stock {
    id: Option<EntityId>,
    product_id: EntityId,
    variation: Option<String>,
    quantity: i32,
}

impl Stock {
    pub fn create(product_id: i64, variation: Option<&str>, quantity: i32) -> Result<Self, ValidationError> {
        let mut stock = Self { id: None, product_id: EntityId::new(product_id, "product_id")?, variation: None, quantity: 0 };
        stock.set_variation(variation);
        stock.set_quantity(quantity)?;
        Ok(stock)
    }

    pub fn restore(id: i64, product_id: i64, variation: Option<&str>, quantity: i32) -> Result<Self, ValidationError> {
        let mut stock = Self::create(product_id, variation, quantity)?;
        stock.set_id(id)?;
        Ok(stock)
    }

    pub fn id(&self) -> Option<EntityId> { self.id }
    pub fn product_id(&self) -> EntityId { self.product_id }
    pub fn variation(&self) -> Option<&str> { self.variation.as_deref() }
    pub fn quantity(&self) -> i32 { self.quantity }

    pub fn set_id(&mut self, id: i64) -> Result<(), ValidationError> {
        self.id = Some(EntityId::new(id, "id")?);
        Ok(())
    }

    pub fn set_product_id(&mut self, product_id: i64) -> Result<(), ValidationError> {
        self.product_id = EntityId::new(product_id, "product_id")?;
        Ok(())
    }

    pub fn set_variation(&mut self, variation: Option<&str>) { self.variation = normalize_variation(variation); }

    pub fn set_quantity(&mut self, quantity: i32) -> Result<(), ValidationError> {
        if quantity < 0 { return Err(ValidationError::Negative("quantity")); }
        self.quantity = quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_create() {
        let s = Stock::create(3, Some(" Red / M "), 12).unwrap();
        assert_eq!(s.product_id().value(), 3);
        assert_eq!(s.variation(), Some("Red / M"));
        assert_eq!(s.quantity(), 12);
    }

    #[test]
    fn test_blank_variation_is_null() {
        assert_eq!(Stock::create(1, Some("   "), 0).unwrap().variation(), None);
        assert_eq!(Stock::create(1, Some(""), 0).unwrap().variation(), None);
    }

    #[test]
    fn test_invalid_fields_rejected() {
        assert_eq!(Stock::create(0, None, 1).unwrap_err(), ValidationError::NotPositive("product_id"));
        assert_eq!(Stock::create(1, None, -1).unwrap_err(), ValidationError::Negative("quantity"));
        let mut s = Stock::create(1, None, 5).unwrap();
        assert!(s.set_quantity(-3).is_err());
        assert_eq!(s.quantity(), 5);
    }
}
