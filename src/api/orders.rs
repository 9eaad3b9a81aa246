//! `/api/orders`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use super::error::AppError;
use super::extract::{ApiJson, ApiPath};
use super::limits::zip_width;
use super::AppState;
use crate::db::{OrderItemRepository, OrderRepository};
use crate::domain::aggregates::{Order, OrderItem};

#[derive(Debug, Deserialize, Validate)]
pub struct OrderRequest {
    pub total: Decimal,
    #[serde(default)]
    pub shipping: Decimal,
    pub address: String,
    #[validate(custom = "zip_width")]
    pub zip: String,
    /// Defaults to `pending` on create; kept as-is on update when omitted.
    pub status: Option<String>,
}

pub async fn list_orders(State(s): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    Ok(Json(OrderRepository::new(&s.db).list_all().await?))
}

pub async fn get_order(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<Order>, AppError> {
    OrderRepository::new(&s.db).find_by_id(id).await?.map(Json).ok_or_else(|| AppError::not_found("order"))
}

pub async fn list_order_items(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<Vec<OrderItem>>, AppError> {
    if OrderRepository::new(&s.db).find_by_id(id).await?.is_none() {
        return Err(AppError::not_found("order"));
    }
    Ok(Json(OrderItemRepository::new(&s.db).list_by_order(id).await?))
}

pub async fn create_order(State(s): State<AppState>, ApiJson(r): ApiJson<OrderRequest>) -> Result<(StatusCode, Json<Order>), AppError> {
    r.validate()?;
    let mut order = Order::create(r.total, r.shipping, &r.address, &r.zip, r.status.as_deref())?;
    let repo = OrderRepository::new(&s.db);
    repo.save(&mut order).await?;
    let id = order.id().map_or(0, |id| id.value());
    let stored = repo.find_by_id(id).await?.ok_or_else(|| AppError::not_found("order"))?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn update_order(State(s): State<AppState>, ApiPath(id): ApiPath<i64>, ApiJson(r): ApiJson<OrderRequest>) -> Result<Json<Order>, AppError> {
    r.validate()?;
    let repo = OrderRepository::new(&s.db);
    let mut order = repo.find_by_id(id).await?.ok_or_else(|| AppError::not_found("order"))?;
    order.set_total(r.total)?;
    order.set_shipping(r.shipping)?;
    order.set_address(&r.address)?;
    order.set_zip(&r.zip)?;
    if let Some(status) = r.status.as_deref() {
        order.set_status(status)?;
    }
    if !repo.save(&mut order).await? {
        return Err(AppError::not_found("order"));
    }
    Ok(Json(order))
}

pub async fn delete_order(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<Value>, AppError> {
    if !OrderRepository::new(&s.db).delete(id).await? {
        return Err(AppError::not_found("order"));
    }
    tracing::info!(order_id = id, "order deleted");
    Ok(Json(json!({ "message": "order deleted" })))
}
