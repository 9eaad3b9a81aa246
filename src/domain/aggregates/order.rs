//! Order Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::value_objects::{EntityId, Money, RequiredText};
use crate::domain::ValidationError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Order {
    id: Option<EntityId>,
    total: Money,
    shipping: Money,
    address: RequiredText,
    zip: RequiredText,
    status: OrderStatus,
    created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus { #[default] Pending, Cancelled, Completed }

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self { Self::Pending => "pending", Self::Cancelled => "cancelled", Self::Completed => "completed" }
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(ValidationError::InvalidStatus(s.trim().to_string())),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl Order {
    pub fn create(total: Decimal, shipping: Decimal, address: &str, zip: &str, status: Option<&str>) -> Result<Self, ValidationError> {
        let status = match status { Some(s) => s.parse()?, None => OrderStatus::default() };
        Ok(Self {
            id: None,
            total: Money::new(total, "total")?,
            shipping: Money::new(shipping, "shipping")?,
            address: RequiredText::new(address, "address")?,
            zip: RequiredText::new(zip, "zip")?,
            status,
            created_at: None,
        })
    }

    pub fn restore(id: i64, total: Decimal, shipping: Decimal, address: &str, zip: &str, status: &str, created_at: Option<DateTime<Utc>>) -> Result<Self, ValidationError> {
        let mut order = Self::create(total, shipping, address, zip, Some(status))?;
        order.set_id(id)?;
        order.created_at = created_at;
        Ok(order)
    }

    pub fn id(&self) -> Option<EntityId> { self.id }
    pub fn total(&self) -> Money { self.total }
    pub fn shipping(&self) -> Money { self.shipping }
    pub fn address(&self) -> &str { self.address.as_str() }
    pub fn zip(&self) -> &str { self.zip.as_str() }
    pub fn status(&self) -> OrderStatus { self.status }
    pub fn created_at(&self) -> Option<DateTime<Utc>> { self.created_at }

    pub fn set_id(&mut self, id: i64) -> Result<(), ValidationError> {
        self.id = Some(EntityId::new(id, "id")?);
        Ok(())
    }

    pub fn set_total(&mut self, total: Decimal) -> Result<(), ValidationError> {
        self.total = Money::new(total, "total")?;
        Ok(())
    }

    pub fn set_shipping(&mut self, shipping: Decimal) -> Result<(), ValidationError> {
        self.shipping = Money::new(shipping, "shipping")?;
        Ok(())
    }

    pub fn set_address(&mut self, address: &str) -> Result<(), ValidationError> {
        self.address = RequiredText::new(address, "address")?;
        Ok(())
    }

    pub fn set_zip(&mut self, zip: &str) -> Result<(), ValidationError> {
        self.zip = RequiredText::new(zip, "zip")?;
        Ok(())
    }

    pub fn set_status(&mut self, status: &str) -> Result<(), ValidationError> {
        self.status = status.parse()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order { Order::create(Decimal::new(12050, 2), Decimal::new(15, 0), "Rua A, 100", "01001-000", None).unwrap() }

    #[test]
    fn test_order_defaults_to_pending() {
        let o = order();
        assert_eq!(o.status(), OrderStatus::Pending);
        assert_eq!(o.total().amount(), Decimal::new(12050, 2));
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(" Completed ".parse::<OrderStatus>().unwrap(), OrderStatus::Completed);
        assert_eq!("CANCELLED".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert_eq!("shipped".parse::<OrderStatus>().unwrap_err(), ValidationError::InvalidStatus("shipped".into()));
    }

    #[test]
    fn test_invalid_status_rejected() {
        let mut o = order();
        assert!(o.set_status("refunded").is_err());
        assert_eq!(o.status(), OrderStatus::Pending);
        o.set_status("completed").unwrap();
        assert_eq!(o.status(), OrderStatus::Completed);
        assert!(Order::create(Decimal::ONE, Decimal::ZERO, "A", "1", Some("")).is_err());
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(Order::create(Decimal::ONE, Decimal::ZERO, " ", "1", None).unwrap_err(), ValidationError::Empty("address"));
        assert_eq!(Order::create(Decimal::ONE, Decimal::ZERO, "A", "", None).unwrap_err(), ValidationError::Empty("zip"));
        assert_eq!(Order::create(Decimal::new(-1, 0), Decimal::ZERO, "A", "1", None).unwrap_err(), ValidationError::Negative("total"));
        assert_eq!(Order::create(Decimal::ONE, Decimal::new(-1, 0), "A", "1", None).unwrap_err(), ValidationError::Negative("shipping"));
    }
}
