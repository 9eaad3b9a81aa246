//! Order repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use super::{corrupt, inserted_id, write_error, RepositoryError};
use crate::domain::aggregates::Order;

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    total: Decimal,
    shipping: Decimal,
    address: String,
    zip: String,
    status: String,
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Order::restore(row.id, row.total, row.shipping, &row.address, &row.zip, &row.status, row.created_at)
            .map_err(corrupt("orders", row.id))
    }
}

pub struct OrderRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> OrderRepository<'a> {
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn save(&self, order: &mut Order) -> Result<bool, RepositoryError> {
        if let Some(id) = order.id() {
            let result = sqlx::query("UPDATE orders SET total = ?, shipping = ?, address = ?, zip = ?, status = ? WHERE id = ?")
                .bind(order.total().amount())
                .bind(order.shipping().amount())
                .bind(order.address())
                .bind(order.zip())
                .bind(order.status().as_str())
                .bind(id.value())
                .execute(self.pool)
                .await
                .map_err(|e| write_error(e, "order"))?;
            tracing::info!(order_id = id.value(), status = %order.status(), "order updated");
            return Ok(result.rows_affected() > 0);
        }

        let result = sqlx::query("INSERT INTO orders (total, shipping, address, zip, status, created_at) VALUES (?, ?, ?, ?, ?, NOW())")
            .bind(order.total().amount())
            .bind(order.shipping().amount())
            .bind(order.address())
            .bind(order.zip())
            .bind(order.status().as_str())
            .execute(self.pool)
            .await
            .map_err(|e| write_error(e, "order"))?;
        let id = inserted_id(&result)?;
        order.set_id(id).map_err(corrupt("orders", id))?;
        tracing::info!(order_id = id, total = %order.total(), "order created");
        Ok(true)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError> {
        sqlx::query_as::<_, OrderRow>("SELECT id, total, shipping, address, zip, status, created_at FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .map(Order::try_from)
            .transpose()
    }

    /// All orders, newest first.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        sqlx::query_as::<_, OrderRow>("SELECT id, total, shipping, address, zip, status, created_at FROM orders ORDER BY created_at DESC, id DESC")
            .fetch_all(self.pool)
            .await?
            .into_iter()
            .map(Order::try_from)
            .collect()
    }

    /// Line items go with the order (ON DELETE CASCADE).
    pub async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?").bind(id).execute(self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
