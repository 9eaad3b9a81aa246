//! `/api/stock`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use super::error::AppError;
use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::limits::variation_width;
use super::AppState;
use crate::db::StockRepository;
use crate::domain::aggregates::Stock;

#[derive(Debug, Deserialize, Validate)]
pub struct StockRequest {
    pub product_id: i64,
    #[serde(default)]
    #[validate(custom = "variation_width")]
    pub variation: Option<String>,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct StockFilter {
    pub product_id: Option<i64>,
}

/// Stock is only listed per product.
pub async fn list_stock(State(s): State<AppState>, ApiQuery(f): ApiQuery<StockFilter>) -> Result<Json<Vec<Stock>>, AppError> {
    let product_id = f.product_id.ok_or_else(|| AppError::BadRequest("product_id query parameter is required".into()))?;
    Ok(Json(StockRepository::new(&s.db).list_by_product(product_id).await?))
}

pub async fn get_stock(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<Stock>, AppError> {
    StockRepository::new(&s.db).find_by_id(id).await?.map(Json).ok_or_else(|| AppError::not_found("stock"))
}

pub async fn create_stock(State(s): State<AppState>, ApiJson(r): ApiJson<StockRequest>) -> Result<(StatusCode, Json<Stock>), AppError> {
    r.validate()?;
    let mut stock = Stock::create(r.product_id, r.variation.as_deref(), r.quantity)?;
    StockRepository::new(&s.db).save(&mut stock).await?;
    Ok((StatusCode::CREATED, Json(stock)))
}

pub async fn update_stock(State(s): State<AppState>, ApiPath(id): ApiPath<i64>, ApiJson(r): ApiJson<StockRequest>) -> Result<Json<Stock>, AppError> {
    r.validate()?;
    let repo = StockRepository::new(&s.db);
    let mut stock = repo.find_by_id(id).await?.ok_or_else(|| AppError::not_found("stock"))?;
    stock.set_product_id(r.product_id)?;
    stock.set_variation(r.variation.as_deref());
    stock.set_quantity(r.quantity)?;
    if !repo.save(&mut stock).await? {
        return Err(AppError::not_found("stock"));
    }
    Ok(Json(stock))
}

pub async fn delete_stock(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<Value>, AppError> {
    if !StockRepository::new(&s.db).delete(id).await? {
        return Err(AppError::not_found("stock"));
    }
    Ok(Json(json!({ "message": "stock deleted" })))
}
