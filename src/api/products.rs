//! `/api/products`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use super::error::AppError;
use super::extract::{ApiJson, ApiPath};
use super::limits::name_width;
use super::AppState;
use crate::db::ProductRepository;
use crate::domain::aggregates::Product;

#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(custom = "name_width")]
    pub name: String,
    pub price: Decimal,
}

pub async fn list_products(State(s): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(ProductRepository::new(&s.db).list_all().await?))
}

pub async fn get_product(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<Product>, AppError> {
    ProductRepository::new(&s.db).find_by_id(id).await?.map(Json).ok_or_else(|| AppError::not_found("product"))
}

pub async fn create_product(State(s): State<AppState>, ApiJson(r): ApiJson<ProductRequest>) -> Result<(StatusCode, Json<Product>), AppError> {
    r.validate()?;
    let mut product = Product::create(&r.name, r.price)?;
    let repo = ProductRepository::new(&s.db);
    repo.save(&mut product).await?;
    // Re-read so the response carries the database-assigned `created_at`.
    let id = product.id().map_or(0, |id| id.value());
    let stored = repo.find_by_id(id).await?.ok_or_else(|| AppError::not_found("product"))?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn update_product(State(s): State<AppState>, ApiPath(id): ApiPath<i64>, ApiJson(r): ApiJson<ProductRequest>) -> Result<Json<Product>, AppError> {
    r.validate()?;
    let repo = ProductRepository::new(&s.db);
    let mut product = repo.find_by_id(id).await?.ok_or_else(|| AppError::not_found("product"))?;
    product.set_name(&r.name)?;
    product.set_price(r.price)?;
    if !repo.save(&mut product).await? {
        return Err(AppError::not_found("product"));
    }
    Ok(Json(product))
}

pub async fn delete_product(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<Value>, AppError> {
    if !ProductRepository::new(&s.db).delete(id).await? {
        return Err(AppError::not_found("product"));
    }
    tracing::info!(product_id = id, "product deleted");
    Ok(Json(json!({ "message": "product deleted" })))
}
