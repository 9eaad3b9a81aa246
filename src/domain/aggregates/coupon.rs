//! Coupon Aggregate

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::value_objects::{EntityId, Money, RequiredText};
use crate::domain::ValidationError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Coupon {
    id: Option<EntityId>,
    code: RequiredText,
    discount: Money,
    minimum_subtotal: Money,
    validity_date: NaiveDate,
}

impl Coupon {
    pub fn create(code: &str, discount: Decimal, minimum_subtotal: Decimal, validity_date: NaiveDate) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            code: RequiredText::new(code, "code")?,
            discount: Money::new(discount, "discount")?,
            minimum_subtotal: Money::new(minimum_subtotal, "minimum_subtotal")?,
            validity_date,
        })
    }

    pub fn restore(id: i64, code: &str, discount: Decimal, minimum_subtotal: Decimal, validity_date: NaiveDate) -> Result<Self, ValidationError> {
        let mut coupon = Self::create(code, discount, minimum_subtotal, validity_date)?;
        coupon.set_id(id)?;
        Ok(coupon)
    }

    pub fn id(&self) -> Option<EntityId> { self.id }
    pub fn code(&self) -> &str { self.code.as_str() }
    pub fn discount(&self) -> Money { self.discount }
    pub fn minimum_subtotal(&self) -> Money { self.minimum_subtotal }
    pub fn validity_date(&self) -> NaiveDate { self.validity_date }

    /// A coupon stays usable through the whole of its validity date.
    pub fn is_valid_on(&self, today: NaiveDate) -> bool { self.validity_date >= today }

    pub fn set_id(&mut self, id: i64) -> Result<(), ValidationError> {
        self.id = Some(EntityId::new(id, "id")?);
        Ok(())
    }

    pub fn set_discount(&mut self, discount: Decimal) -> Result<(), ValidationError> {
        self.discount = Money::new(discount, "discount")?;
        Ok(())
    }

    pub fn set_minimum_subtotal(&mut self, minimum_subtotal: Decimal) -> Result<(), ValidationError> {
        self.minimum_subtotal = Money::new(minimum_subtotal, "minimum_subtotal")?;
        Ok(())
    }

    pub fn set_validity_date(&mut self, validity_date: NaiveDate) { self.validity_date = validity_date; }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

    #[test]
    fn test_coupon_create() {
        let c = Coupon::create(" SAVE10 ", Decimal::new(10, 0), Decimal::new(50, 0), date(2030, 1, 31)).unwrap();
        assert_eq!(c.code(), "SAVE10");
        assert_eq!(c.discount().amount(), Decimal::new(10, 0));
    }

    #[test]
    fn test_negative_money_rejected() {
        let d = date(2030, 1, 1);
        assert_eq!(Coupon::create("X", Decimal::new(-1, 0), Decimal::ZERO, d).unwrap_err(), ValidationError::Negative("discount"));
        assert_eq!(Coupon::create("X", Decimal::ZERO, Decimal::new(-1, 0), d).unwrap_err(), ValidationError::Negative("minimum_subtotal"));
        assert_eq!(Coupon::create(" ", Decimal::ZERO, Decimal::ZERO, d).unwrap_err(), ValidationError::Empty("code"));
    }

    #[test]
    fn test_validity_is_inclusive() {
        let c = Coupon::create("X", Decimal::ONE, Decimal::ZERO, date(2025, 6, 30)).unwrap();
        assert!(c.is_valid_on(date(2025, 6, 29)));
        assert!(c.is_valid_on(date(2025, 6, 30)));
        assert!(!c.is_valid_on(date(2025, 7, 1)));
    }
}
