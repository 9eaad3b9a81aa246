//! Coupon repository.
//!
//! The coupon code is fixed once inserted: updates only touch the discount,
//! the minimum subtotal and the validity date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use super::{corrupt, inserted_id, write_error, RepositoryError};
use crate::domain::aggregates::Coupon;

#[derive(Debug, sqlx::FromRow)]
struct CouponRow {
    id: i64,
    code: String,
    discount: Decimal,
    minimum_subtotal: Decimal,
    validity_date: NaiveDate,
}

impl TryFrom<CouponRow> for Coupon {
    type Error = RepositoryError;

    fn try_from(row: CouponRow) -> Result<Self, Self::Error> {
        Coupon::restore(row.id, &row.code, row.discount, row.minimum_subtotal, row.validity_date)
            .map_err(corrupt("coupons", row.id))
    }
}

pub struct CouponRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CouponRepository<'a> {
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn save(&self, coupon: &mut Coupon) -> Result<bool, RepositoryError> {
        if let Some(id) = coupon.id() {
            let result = sqlx::query("UPDATE coupons SET discount = ?, minimum_subtotal = ?, validity_date = ? WHERE id = ?")
                .bind(coupon.discount().amount())
                .bind(coupon.minimum_subtotal().amount())
                .bind(coupon.validity_date())
                .bind(id.value())
                .execute(self.pool)
                .await
                .map_err(|e| write_error(e, "coupon"))?;
            return Ok(result.rows_affected() > 0);
        }

        let result = sqlx::query("INSERT INTO coupons (code, discount, minimum_subtotal, validity_date) VALUES (?, ?, ?, ?)")
            .bind(coupon.code())
            .bind(coupon.discount().amount())
            .bind(coupon.minimum_subtotal().amount())
            .bind(coupon.validity_date())
            .execute(self.pool)
            .await
            .map_err(|e| write_error(e, "coupon code"))?;
        let id = inserted_id(&result)?;
        coupon.set_id(id).map_err(corrupt("coupons", id))?;
        tracing::info!(coupon_id = id, code = coupon.code(), "coupon created");
        Ok(true)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Coupon>, RepositoryError> {
        sqlx::query_as::<_, CouponRow>("SELECT id, code, discount, minimum_subtotal, validity_date FROM coupons WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .map(Coupon::try_from)
            .transpose()
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, RepositoryError> {
        sqlx::query_as::<_, CouponRow>("SELECT id, code, discount, minimum_subtotal, validity_date FROM coupons WHERE code = ?")
            .bind(code.trim())
            .fetch_optional(self.pool)
            .await?
            .map(Coupon::try_from)
            .transpose()
    }

    /// All coupons, longest-lived first.
    pub async fn list_all(&self) -> Result<Vec<Coupon>, RepositoryError> {
        sqlx::query_as::<_, CouponRow>("SELECT id, code, discount, minimum_subtotal, validity_date FROM coupons ORDER BY validity_date DESC, id DESC")
            .fetch_all(self.pool)
            .await?
            .into_iter()
            .map(Coupon::try_from)
            .collect()
    }

    pub async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM coupons WHERE id = ?").bind(id).execute(self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
