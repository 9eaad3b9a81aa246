//! Order line item repository.

use rust_decimal::Decimal;
use sqlx::MySqlPool;

use super::{corrupt, inserted_id, write_error, RepositoryError};
use crate::domain::aggregates::OrderItem;

#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    order_id: i64,
    product_id: i64,
    variation: Option<String>,
    quantity: i32,
    unit_price: Decimal,
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = RepositoryError;

    fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
        OrderItem::restore(row.id, row.order_id, row.product_id, row.variation.as_deref(), row.quantity, row.unit_price)
            .map_err(corrupt("order_items", row.id))
    }
}

pub struct OrderItemRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> OrderItemRepository<'a> {
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn save(&self, item: &mut OrderItem) -> Result<bool, RepositoryError> {
        if let Some(id) = item.id() {
            let result = sqlx::query(
                "UPDATE order_items SET order_id = ?, product_id = ?, variation = ?, quantity = ?, unit_price = ? WHERE id = ?",
            )
            .bind(item.order_id().value())
            .bind(item.product_id().value())
            .bind(item.variation())
            .bind(item.quantity())
            .bind(item.unit_price().amount())
            .bind(id.value())
            .execute(self.pool)
            .await
            .map_err(|e| write_error(e, "order item"))?;
            return Ok(result.rows_affected() > 0);
        }

        let result = sqlx::query(
            "INSERT INTO order_items (order_id, product_id, variation, quantity, unit_price) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(item.order_id().value())
        .bind(item.product_id().value())
        .bind(item.variation())
        .bind(item.quantity())
        .bind(item.unit_price().amount())
        .execute(self.pool)
        .await
        .map_err(|e| write_error(e, "order item"))?;
        let id = inserted_id(&result)?;
        item.set_id(id).map_err(corrupt("order_items", id))?;
        tracing::info!(order_item_id = id, order_id = item.order_id().value(), "order item created");
        Ok(true)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<OrderItem>, RepositoryError> {
        sqlx::query_as::<_, OrderItemRow>(
            "SELECT id, order_id, product_id, variation, quantity, unit_price FROM order_items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .map(OrderItem::try_from)
        .transpose()
    }

    pub async fn list_by_order(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError> {
        sqlx::query_as::<_, OrderItemRow>(
            "SELECT id, order_id, product_id, variation, quantity, unit_price FROM order_items WHERE order_id = ? ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?
        .into_iter()
        .map(OrderItem::try_from)
        .collect()
    }

    pub async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM order_items WHERE id = ?").bind(id).execute(self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
