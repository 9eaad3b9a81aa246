//! Order line item

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::value_objects::{normalize_variation, EntityId, Money};
use crate::domain::ValidationError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderItem {
    id: Option<EntityId>,
    order_id: EntityId,
    product_id: EntityId,
    variation: Option<String>,
    quantity: i32,
    unit_price: Money,
}

impl OrderItem {
    pub fn create(order_id: i64, product_id: i64, variation: Option<&str>, quantity: i32, unit_price: Decimal) -> Result<Self, ValidationError> {
        let mut item = Self {
            id: None,
            order_id: EntityId::new(order_id, "order_id")?,
            product_id: EntityId::new(product_id, "product_id")?,
            variation: normalize_variation(variation),
            quantity: 1,
            unit_price: Money::new(unit_price, "unit_price")?,
        };
        item.set_quantity(quantity)?;
        Ok(item)
    }

    pub fn restore(id: i64, order_id: i64, product_id: i64, variation: Option<&str>, quantity: i32, unit_price: Decimal) -> Result<Self, ValidationError> {
        let mut item = Self::create(order_id, product_id, variation, quantity, unit_price)?;
        item.set_id(id)?;
        Ok(item)
    }

    pub fn id(&self) -> Option<EntityId> { self.id }
    pub fn order_id(&self) -> EntityId { self.order_id }
    pub fn product_id(&self) -> EntityId { self.product_id }
    pub fn variation(&self) -> Option<&str> { self.variation.as_deref() }
    pub fn quantity(&self) -> i32 { self.quantity }
    pub fn unit_price(&self) -> Money { self.unit_price }

    pub fn set_id(&mut self, id: i64) -> Result<(), ValidationError> {
        self.id = Some(EntityId::new(id, "id")?);
        Ok(())
    }

    pub fn set_order_id(&mut self, order_id: i64) -> Result<(), ValidationError> {
        self.order_id = EntityId::new(order_id, "order_id")?;
        Ok(())
    }

    pub fn set_product_id(&mut self, product_id: i64) -> Result<(), ValidationError> {
        self.product_id = EntityId::new(product_id, "product_id")?;
        Ok(())
    }

    pub fn set_variation(&mut self, variation: Option<&str>) { self.variation = normalize_variation(variation); }

    // Unlike stock, a line item may not hold zero units.
    pub fn set_quantity(&mut self, quantity: i32) -> Result<(), ValidationError> {
        if quantity <= 0 { return Err(ValidationError::NotPositive("quantity")); }
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_unit_price(&mut self, unit_price: Decimal) -> Result<(), ValidationError> {
        self.unit_price = Money::new(unit_price, "unit_price")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_create() {
        let i = OrderItem::create(1, 2, Some(""), 3, Decimal::new(999, 2)).unwrap();
        assert_eq!(i.order_id().value(), 1);
        assert_eq!(i.product_id().value(), 2);
        assert_eq!(i.variation(), None);
        assert_eq!(i.quantity(), 3);
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert_eq!(OrderItem::create(1, 2, None, 0, Decimal::ONE).unwrap_err(), ValidationError::NotPositive("quantity"));
        assert!(OrderItem::create(1, 2, None, -4, Decimal::ONE).is_err());
    }

    #[test]
    fn test_references_and_price() {
        assert_eq!(OrderItem::create(0, 2, None, 1, Decimal::ONE).unwrap_err(), ValidationError::NotPositive("order_id"));
        assert_eq!(OrderItem::create(1, -2, None, 1, Decimal::ONE).unwrap_err(), ValidationError::NotPositive("product_id"));
        assert_eq!(OrderItem::create(1, 2, None, 1, Decimal::new(-1, 2)).unwrap_err(), ValidationError::Negative("unit_price"));
    }
}
