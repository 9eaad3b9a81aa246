//! Repository tests against a live MySQL database.
//!
//! Run with `DATABASE_URL=mysql://... cargo test -- --ignored`.

use chrono::{Duration, Local, Utc};
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use mini_erp::db::{self, CouponRepository, OrderItemRepository, OrderRepository, ProductRepository, RepositoryError, StockRepository};
use mini_erp::domain::aggregates::{Coupon, Order, OrderItem, OrderStatus, Product, Stock};

async fn pool() -> MySqlPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = MySqlPool::connect(&url).await.expect("failed to connect");
    db::migrate(&pool).await.expect("failed to migrate");
    pool
}

fn unique(prefix: &str) -> String {
    format!("{prefix}{}", Utc::now().timestamp_nanos_opt().unwrap_or_default() % 1_000_000_000_000)
}

async fn saved_product(pool: &MySqlPool) -> Product {
    let mut product = Product::create(&unique("Mug "), Decimal::new(1990, 2)).unwrap();
    ProductRepository::new(pool).save(&mut product).await.unwrap();
    product
}

fn assert_order_fields(stored: &Order, expected: &Order) {
    assert_eq!(stored.id(), expected.id());
    assert_eq!(stored.total(), expected.total());
    assert_eq!(stored.shipping(), expected.shipping());
    assert_eq!(stored.address(), expected.address());
    assert_eq!(stored.zip(), expected.zip());
    assert_eq!(stored.status(), expected.status());
}

#[tokio::test]
#[ignore = "Requires a running MySQL database (DATABASE_URL)"]
async fn test_product_save_update_delete() {
    let pool = pool().await;
    let repo = ProductRepository::new(&pool);

    let mut product = saved_product(&pool).await;
    let id = product.id().unwrap().value();

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.name(), product.name());
    assert_eq!(found.price().amount(), Decimal::new(1990, 2));
    assert!(found.created_at().is_some());

    product.set_price(Decimal::new(2500, 2)).unwrap();
    assert!(repo.save(&mut product).await.unwrap());
    assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().price().amount(), Decimal::new(2500, 2));
    assert!(repo.list_all().await.unwrap().iter().any(|p| p.id() == product.id()));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "Requires a running MySQL database (DATABASE_URL)"]
async fn test_stock_follows_product() {
    let pool = pool().await;
    let product = saved_product(&pool).await;
    let product_id = product.id().unwrap().value();
    let repo = StockRepository::new(&pool);

    let mut blue = Stock::create(product_id, Some(" Blue "), 4).unwrap();
    let mut plain = Stock::create(product_id, Some("   "), 0).unwrap();
    repo.save(&mut blue).await.unwrap();
    repo.save(&mut plain).await.unwrap();

    assert_eq!(repo.find_by_id(blue.id().unwrap().value()).await.unwrap().unwrap(), blue);
    let stored_plain = repo.find_by_id(plain.id().unwrap().value()).await.unwrap().unwrap();
    assert_eq!(stored_plain, plain);
    assert_eq!(stored_plain.variation(), None);

    blue.set_quantity(9).unwrap();
    blue.set_variation(Some("Navy"));
    assert!(repo.save(&mut blue).await.unwrap());
    assert_eq!(repo.find_by_id(blue.id().unwrap().value()).await.unwrap().unwrap(), blue);

    let rows = repo.list_by_product(product_id).await.unwrap();
    assert_eq!(rows.len(), 2);

    ProductRepository::new(&pool).delete(product_id).await.unwrap();
    assert!(repo.list_by_product(product_id).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "Requires a running MySQL database (DATABASE_URL)"]
async fn test_stock_for_missing_product_is_rejected() {
    let pool = pool().await;
    let mut stock = Stock::create(i64::MAX, None, 1).unwrap();
    let err = StockRepository::new(&pool).save(&mut stock).await.unwrap_err();
    assert!(matches!(err, RepositoryError::MissingReference(_)));
}

#[tokio::test]
#[ignore = "Requires a running MySQL database (DATABASE_URL)"]
async fn test_coupon_code_is_unique() {
    let pool = pool().await;
    let repo = CouponRepository::new(&pool);
    let code = unique("SAVE");
    let tomorrow = Local::now().date_naive() + Duration::days(1);

    let mut coupon = Coupon::create(&code, Decimal::new(500, 2), Decimal::new(5000, 2), tomorrow).unwrap();
    repo.save(&mut coupon).await.unwrap();

    let found = repo.find_by_id(coupon.id().unwrap().value()).await.unwrap().unwrap();
    assert_eq!(found, coupon);
    assert_eq!(found.code(), code);
    assert_eq!(found.discount().amount(), Decimal::new(500, 2));
    assert_eq!(repo.find_by_code(&format!(" {code} ")).await.unwrap().unwrap(), coupon);

    coupon.set_discount(Decimal::new(750, 2)).unwrap();
    coupon.set_validity_date(tomorrow + Duration::days(30));
    assert!(repo.save(&mut coupon).await.unwrap());
    assert_eq!(repo.find_by_id(coupon.id().unwrap().value()).await.unwrap().unwrap(), coupon);

    let mut duplicate = Coupon::create(&code, Decimal::ONE, Decimal::ZERO, tomorrow).unwrap();
    let err = repo.save(&mut duplicate).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));

    assert!(repo.delete(coupon.id().unwrap().value()).await.unwrap());
}

#[tokio::test]
#[ignore = "Requires a running MySQL database (DATABASE_URL)"]
async fn test_order_with_items_cascades() {
    let pool = pool().await;
    let product = saved_product(&pool).await;
    let orders = OrderRepository::new(&pool);
    let items = OrderItemRepository::new(&pool);

    let mut order = Order::create(Decimal::new(4980, 2), Decimal::new(1000, 2), "Rua A, 10", "01001-000", None).unwrap();
    orders.save(&mut order).await.unwrap();
    let order_id = order.id().unwrap().value();

    let stored = orders.find_by_id(order_id).await.unwrap().unwrap();
    assert_order_fields(&stored, &order);
    assert_eq!(stored.status(), OrderStatus::Pending);
    assert!(stored.created_at().is_some());

    let mut item = OrderItem::create(order_id, product.id().unwrap().value(), Some("Blue"), 2, Decimal::new(1990, 2)).unwrap();
    let mut bare = OrderItem::create(order_id, product.id().unwrap().value(), Some(" "), 1, Decimal::new(500, 2)).unwrap();
    items.save(&mut item).await.unwrap();
    items.save(&mut bare).await.unwrap();
    assert_eq!(items.find_by_id(item.id().unwrap().value()).await.unwrap().unwrap(), item);
    let stored_bare = items.find_by_id(bare.id().unwrap().value()).await.unwrap().unwrap();
    assert_eq!(stored_bare, bare);
    assert_eq!(stored_bare.variation(), None);
    assert_eq!(items.list_by_order(order_id).await.unwrap().len(), 2);

    order.set_status("completed").unwrap();
    order.set_shipping(Decimal::new(1250, 2)).unwrap();
    order.set_address("Rua B, 20").unwrap();
    assert!(orders.save(&mut order).await.unwrap());
    let updated = orders.find_by_id(order_id).await.unwrap().unwrap();
    assert_order_fields(&updated, &order);
    assert_eq!(updated.status(), OrderStatus::Completed);

    // An item still points at the product.
    let err = ProductRepository::new(&pool).delete(product.id().unwrap().value()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict(_)));

    assert!(orders.delete(order_id).await.unwrap());
    assert!(items.find_by_id(item.id().unwrap().value()).await.unwrap().is_none());
    assert!(ProductRepository::new(&pool).delete(product.id().unwrap().value()).await.unwrap());
}
