use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::models::user::Role;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub address: Option<String>,
    pub role: Option<Role>,
}

#[derive(Deserialize)]
pub struct UpdateAddressRequest {
    pub address: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub order_date: Option<DateTime<Utc>>,
    pub total: f64,
    pub status: Option<String>,
    pub shipping_address: String,
    pub payment_method: String,
    #[serde(default)]
    pub order_details: Vec<OrderItemRequest>,
}

#[derive(Deserialize)]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub sub_total: f64,
}

#[derive(Deserialize)]
pub struct UpdateOrderRequest {
    pub order_date: DateTime<Utc>,
    pub total: f64,
    pub status: String,
    pub shipping_address: String,
    pub payment_method: String,
}

#[derive(Deserialize)]
pub struct CreateOrderDetailRequest {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub sub_total: f64,
}

#[derive(Deserialize)]
pub struct UpdateOrderDetailRequest {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
    pub sub_total: f64,
}
