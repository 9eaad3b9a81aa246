//! `/api/coupons`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use super::error::AppError;
use super::extract::{ApiJson, ApiPath};
use super::limits::code_width;
use super::AppState;
use crate::db::CouponRepository;
use crate::domain::aggregates::Coupon;

#[derive(Debug, Deserialize, Validate)]
pub struct CouponRequest {
    #[validate(custom = "code_width")]
    pub code: String,
    pub discount: Decimal,
    #[serde(default)]
    pub minimum_subtotal: Decimal,
    pub validity_date: NaiveDate,
}

/// The code cannot be changed after creation, so updates leave it out.
#[derive(Debug, Deserialize)]
pub struct CouponUpdate {
    pub discount: Decimal,
    #[serde(default)]
    pub minimum_subtotal: Decimal,
    pub validity_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct CouponView {
    #[serde(flatten)]
    coupon: Coupon,
    currently_valid: bool,
}

impl From<Coupon> for CouponView {
    fn from(coupon: Coupon) -> Self {
        let currently_valid = coupon.is_valid_on(Local::now().date_naive());
        Self { coupon, currently_valid }
    }
}

pub async fn list_coupons(State(s): State<AppState>) -> Result<Json<Vec<CouponView>>, AppError> {
    let coupons = CouponRepository::new(&s.db).list_all().await?;
    Ok(Json(coupons.into_iter().map(CouponView::from).collect()))
}

pub async fn get_coupon(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<CouponView>, AppError> {
    let coupon = CouponRepository::new(&s.db).find_by_id(id).await?.ok_or_else(|| AppError::not_found("coupon"))?;
    Ok(Json(coupon.into()))
}

pub async fn get_coupon_by_code(State(s): State<AppState>, ApiPath(code): ApiPath<String>) -> Result<Json<CouponView>, AppError> {
    let coupon = CouponRepository::new(&s.db).find_by_code(&code).await?.ok_or_else(|| AppError::not_found("coupon"))?;
    Ok(Json(coupon.into()))
}

pub async fn create_coupon(State(s): State<AppState>, ApiJson(r): ApiJson<CouponRequest>) -> Result<(StatusCode, Json<CouponView>), AppError> {
    r.validate()?;
    let mut coupon = Coupon::create(&r.code, r.discount, r.minimum_subtotal, r.validity_date)?;
    CouponRepository::new(&s.db).save(&mut coupon).await?;
    Ok((StatusCode::CREATED, Json(coupon.into())))
}

pub async fn update_coupon(State(s): State<AppState>, ApiPath(id): ApiPath<i64>, ApiJson(r): ApiJson<CouponUpdate>) -> Result<Json<CouponView>, AppError> {
    let repo = CouponRepository::new(&s.db);
    let mut coupon = repo.find_by_id(id).await?.ok_or_else(|| AppError::not_found("coupon"))?;
    coupon.set_discount(r.discount)?;
    coupon.set_minimum_subtotal(r.minimum_subtotal)?;
    coupon.set_validity_date(r.validity_date);
    if !repo.save(&mut coupon).await? {
        return Err(AppError::not_found("coupon"));
    }
    Ok(Json(coupon.into()))
}

pub async fn delete_coupon(State(s): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<Value>, AppError> {
    if !CouponRepository::new(&s.db).delete(id).await? {
        return Err(AppError::not_found("coupon"));
    }
    Ok(Json(json!({ "message": "coupon deleted" })))
}
