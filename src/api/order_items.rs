//! `/api/order-items`
//!
//! Items are written one request at a time after their order exists; a
//! failure part way through leaves the earlier items in place.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use super::error::AppError;
use super::extract::{ApiJson, ApiPath, ApiQuery};
use super::limits::variation_width;
use super::AppState;
use crate::db::OrderItemRepository;
use crate::domain::aggregates::OrderItem;

#[derive(Debug, Deserialize, Validate)]
pub struct OrderItemRequest {
    pub order_id: i64,
    pub product_id: i64,
    #[serde(default)]
    #[validate(custom = "variation_width")]
    pub variation: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct OrderItemFilter {
    pub order_id: Option<i64>,
}

pub async fn list_items(State(s): State<AppState>, ApiQuery(f): ApiQuery<OrderItemFilter>) -> Result<Json<Vec<OrderItem>>, AppError> {
    let order_id = f.order_id.ok_or_else(|| AppError::BadRequest("order_id query parameter is required".into()))?;
    Ok(Json(OrderItemRepository::new(&s.db).list_by_order(order_id).await?))
}

pub async fn get_item(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<OrderItem>, AppError> {
    OrderItemRepository::new(&s.db).find_by_id(id).await?.map(Json).ok_or_else(|| AppError::not_found("order item"))
}

pub async fn create_item(State(s): State<AppState>, ApiJson(r): ApiJson<OrderItemRequest>) -> Result<(StatusCode, Json<OrderItem>), AppError> {
    r.validate()?;
    let mut item = OrderItem::create(r.order_id, r.product_id, r.variation.as_deref(), r.quantity, r.unit_price)?;
    OrderItemRepository::new(&s.db).save(&mut item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update_item(State(s): State<AppState>, ApiPath(id): ApiPath<i64>, ApiJson(r): ApiJson<OrderItemRequest>) -> Result<Json<OrderItem>, AppError> {
    r.validate()?;
    let repo = OrderItemRepository::new(&s.db);
    let mut item = repo.find_by_id(id).await?.ok_or_else(|| AppError::not_found("order item"))?;
    item.set_order_id(r.order_id)?;
    item.set_product_id(r.product_id)?;
    item.set_variation(r.variation.as_deref());
    item.set_quantity(r.quantity)?;
    item.set_unit_price(r.unit_price)?;
    if !repo.save(&mut item).await? {
        return Err(AppError::not_found("order item"));
    }
    Ok(Json(item))
}

pub async fn delete_item(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<Value>, AppError> {
    if !OrderItemRepository::new(&s.db).delete(id).await? {
        return Err(AppError::not_found("order item"));
    }
    Ok(Json(json!({ "message": "order item deleted" })))
}
