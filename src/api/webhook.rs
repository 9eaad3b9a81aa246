//! `POST /api/webhook/order-status`
//!
//! External status notifications. A `cancelled` notification removes the
//! order (and its items) instead of storing the status.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::AppError;
use super::extract::ApiJson;
use super::AppState;
use crate::db::OrderRepository;
use crate::domain::aggregates::OrderStatus;

#[derive(Debug, Deserialize)]
pub struct StatusNotification {
    pub id: i64,
    pub status: String,
}

pub async fn order_status(State(s): State<AppState>, ApiJson(n): ApiJson<StatusNotification>) -> Result<Json<Value>, AppError> {
    let status: OrderStatus = n.status.parse()?;
    let repo = OrderRepository::new(&s.db);
    let mut order = repo.find_by_id(n.id).await?.ok_or_else(|| AppError::not_found("order"))?;

    if status == OrderStatus::Cancelled {
        if !repo.delete(n.id).await? {
            return Err(AppError::not_found("order"));
        }
        tracing::info!(order_id = n.id, "order cancelled by webhook");
        return Ok(Json(json!({ "message": "order cancelled and removed" })));
    }

    order.set_status(status.as_str())?;
    if !repo.save(&mut order).await? {
        return Err(AppError::not_found("order"));
    }
    Ok(Json(json!({ "message": format!("order status updated to {status}") })))
}
