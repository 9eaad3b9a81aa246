//! Database operations for the back office MySQL schema.
//!
//! ## Tables
//!
//! - `products` - sellable items
//! - `stock` - quantity per product variation (cascades with the product)
//! - `coupons` - discount codes, unique by `code`
//! - `orders` - placed orders
//! - `order_items` - order lines (cascade with the order)
//!
//! Migrations live in `migrations/` and are embedded into the binary.
//! Every statement is a single round-trip; nothing here opens a transaction.

pub mod coupons;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod stock;

use std::time::Duration;

use sqlx::mysql::{MySqlPoolOptions, MySqlQueryResult};
use sqlx::MySqlPool;
use thiserror::Error;

use crate::config::Config;
use crate::domain::ValidationError;

pub use coupons::CouponRepository;
pub use order_items::OrderItemRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use stock::StockRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row no longer satisfies the entity invariants.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Unique constraint violation (e.g. coupon code).
    #[error("{0}")]
    Conflict(String),

    /// Foreign key points at a row that does not exist.
    #[error("{0}")]
    MissingReference(String),
}

/// Create a MySQL connection pool.
pub async fn create_pool(config: &Config) -> Result<MySqlPool, RepositoryError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Apply the embedded schema migrations.
pub async fn migrate(pool: &MySqlPool) -> Result<(), RepositoryError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Maps constraint violations raised by INSERT/UPDATE onto typed errors.
fn write_error(err: sqlx::Error, entity: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(format!("{entity} already exists"));
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::MissingReference(format!("{entity} references a record that does not exist"));
        }
    }
    RepositoryError::Database(err)
}

/// DELETE only trips a foreign key when other rows still point at the target.
fn delete_error(err: sqlx::Error, entity: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_foreign_key_violation() {
            return RepositoryError::Conflict(format!("{entity} is still referenced by other records"));
        }
    }
    RepositoryError::Database(err)
}

fn inserted_id(result: &MySqlQueryResult) -> Result<i64, RepositoryError> {
    i64::try_from(result.last_insert_id())
        .map_err(|_| RepositoryError::DataCorruption(format!("generated id {} out of range", result.last_insert_id())))
}

fn corrupt(table: &'static str, id: i64) -> impl FnOnce(ValidationError) -> RepositoryError {
    move |e| RepositoryError::DataCorruption(format!("{table} row {id}: {e}"))
}
