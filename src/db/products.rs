//! Product repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use super::{corrupt, delete_error, inserted_id, write_error, RepositoryError};
use crate::domain::aggregates::Product;

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: Decimal,
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Product::restore(row.id, &row.name, row.price, row.created_at).map_err(corrupt("products", row.id))
    }
}

/// Repository for the `products` table.
pub struct ProductRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ProductRepository<'a> {
    pub const fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert when the product has no id yet (assigning the generated one),
    /// otherwise update the row with that id.
    ///
    /// Returns `false` when an update matched no row.
    pub async fn save(&self, product: &mut Product) -> Result<bool, RepositoryError> {
        if let Some(id) = product.id() {
            let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
                .bind(product.name())
                .bind(product.price().amount())
                .bind(id.value())
                .execute(self.pool)
                .await
                .map_err(|e| write_error(e, "product"))?;
            return Ok(result.rows_affected() > 0);
        }

        let result = sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
            .bind(product.name())
            .bind(product.price().amount())
            .execute(self.pool)
            .await
            .map_err(|e| write_error(e, "product"))?;
        let id = inserted_id(&result)?;
        product.set_id(id).map_err(corrupt("products", id))?;
        tracing::info!(product_id = id, "product created");
        Ok(true)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        sqlx::query_as::<_, ProductRow>("SELECT id, name, price, created_at FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .map(Product::try_from)
            .transpose()
    }

    /// All products, newest first.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        sqlx::query_as::<_, ProductRow>("SELECT id, name, price, created_at FROM products ORDER BY created_at DESC, id DESC")
            .fetch_all(self.pool)
            .await?
            .into_iter()
            .map(Product::try_from)
            .collect()
    }

    /// Removing a product also removes its stock rows (ON DELETE CASCADE).
    /// Products that appear on an order cannot be removed.
    pub async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| delete_error(e, "product"))?;
        Ok(result.rows_affected() > 0)
    }
}
