//! HTTP surface: one module per resource, all sharing [`AppState`] and the
//! JSON error convention from [`error::AppError`].

pub mod coupons;
pub mod error;
pub mod extract;
mod limits;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod stock;
pub mod webhook;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::MySqlPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/products", get(products::list_products).post(products::create_product).fallback(method_not_allowed))
        .route(
            "/api/products/:id",
            get(products::get_product).put(products::update_product).delete(products::delete_product).fallback(method_not_allowed),
        )
        .route("/api/stock", get(stock::list_stock).post(stock::create_stock).fallback(method_not_allowed))
        .route("/api/stock/:id", get(stock::get_stock).put(stock::update_stock).delete(stock::delete_stock).fallback(method_not_allowed))
        .route("/api/coupons", get(coupons::list_coupons).post(coupons::create_coupon).fallback(method_not_allowed))
        .route("/api/coupons/code/:code", get(coupons::get_coupon_by_code).fallback(method_not_allowed))
        .route(
            "/api/coupons/:id",
            get(coupons::get_coupon).put(coupons::update_coupon).delete(coupons::delete_coupon).fallback(method_not_allowed),
        )
        .route("/api/orders", get(orders::list_orders).post(orders::create_order).fallback(method_not_allowed))
        .route("/api/orders/:id", get(orders::get_order).put(orders::update_order).delete(orders::delete_order).fallback(method_not_allowed))
        .route("/api/orders/:id/items", get(orders::list_order_items).fallback(method_not_allowed))
        .route("/api/order-items", get(order_items::list_items).post(order_items::create_item).fallback(method_not_allowed))
        .route(
            "/api/order-items/:id",
            get(order_items::get_item).put(order_items::update_item).delete(order_items::delete_item).fallback(method_not_allowed),
        )
        .route("/api/webhook/order-status", post(webhook::order_status).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "mini-erp" }))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound("route not found".into())
}
