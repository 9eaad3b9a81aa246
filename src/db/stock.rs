//! Stock repository.

use sqlx::MySqlPool;

use super::{corrupt, inserted_id, write_error, RepositoryError};
use crate::domain::aggregates::Stock;

#[derive(Debug, sqlx::FromRow)]
struct StockRow {
    id: i64,
    product_id: i64,
    variation: Option<String>,
    quantity: i32,
}

impl TryFrom<StockRow> for Stock {
    type Error = RepositoryError;

    fn try_from(row: StockRow) -> Result<Self, Self::Error> {
        Stock::restore(row.id, row.product_id, row.variation.as_deref(), row.quantity).map_err(corrupt("stock", row.id))
    }
}

pub struct StockRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> StockRepository<'a> {
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn save(&self, stock: &mut Stock) -> Result<bool, RepositoryError> {
        if let Some(id) = stock.id() {
            let result = sqlx::query("UPDATE stock SET product_id = ?, variation = ?, quantity = ? WHERE id = ?")
                .bind(stock.product_id().value())
                .bind(stock.variation())
                .bind(stock.quantity())
                .bind(id.value())
                .execute(self.pool)
                .await
                .map_err(|e| write_error(e, "stock"))?;
            return Ok(result.rows_affected() > 0);
        }

        let result = sqlx::query("INSERT INTO stock (product_id, variation, quantity) VALUES (?, ?, ?)")
            .bind(stock.product_id().value())
            .bind(stock.variation())
            .bind(stock.quantity())
            .execute(self.pool)
            .await
            .map_err(|e| write_error(e, "stock"))?;
        let id = inserted_id(&result)?;
        stock.set_id(id).map_err(corrupt("stock", id))?;
        tracing::info!(stock_id = id, product_id = stock.product_id().value(), "stock created");
        Ok(true)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Stock>, RepositoryError> {
        sqlx::query_as::<_, StockRow>("SELECT id, product_id, variation, quantity FROM stock WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .map(Stock::try_from)
            .transpose()
    }

    pub async fn list_by_product(&self, product_id: i64) -> Result<Vec<Stock>, RepositoryError> {
        sqlx::query_as::<_, StockRow>("SELECT id, product_id, variation, quantity FROM stock WHERE product_id = ? ORDER BY id")
            .bind(product_id)
            .fetch_all(self.pool)
            .await?
            .into_iter()
            .map(Stock::try_from)
            .collect()
    }

    pub async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM stock WHERE id = ?").bind(id).execute(self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
