//! Aggregates module
pub mod product;
pub mod stock;
pub mod coupon;
pub mod order;
pub mod order_item;

pub use product::Product;
pub use stock::Stock;
pub use coupon::Coupon;
pub use order::{Order, OrderStatus};
pub use order_item::OrderItem;
