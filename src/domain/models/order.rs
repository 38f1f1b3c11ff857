use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STATUS_PENDING: &str = "Pending";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub order_date: DateTime<Utc>,
    pub total: f64,
    pub status: String,
    pub shipping_address: String,
    pub payment_method: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct OrderDetail {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    // Price and sub_total are captured at order time and are not re-derived
    // from the current product price.
    pub price: f64,
    pub sub_total: f64,
}

/// Read-side line item joined with the referenced product's display name.
/// `product_name` is empty when the product row is missing.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct OrderDetailLine {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub sub_total: f64,
    pub product_name: String,
}
