//! Mini ERP back office
//!
//! JSON HTTP API over a MySQL database for a small shop.
//!
//! ## Features
//! - Product catalog
//! - Stock per product variation
//! - Discount coupons with validity dates
//! - Orders and their line items
//! - Order status webhook

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
