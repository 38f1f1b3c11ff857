use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{
    order::{Order, OrderDetailLine},
    user::{Role, User},
};

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
}

/// User record with the password hash stripped.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub image: Option<String>,
    pub address: Option<String>,
    pub role: Role,
    pub created_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_date: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            image: user.image,
            address: user.address,
            role: user.role,
            created_by: user.created_by,
            created_date: user.created_date,
            updated_by: user.updated_by,
            updated_date: user.updated_date,
        }
    }
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    pub order_date: DateTime<Utc>,
    pub total: f64,
    pub status: String,
    pub shipping_address: String,
    pub payment_method: String,
    pub order_details: Vec<OrderDetailLine>,
    pub created_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
}

impl OrderResponse {
    pub fn from_parts(order: Order, details: Vec<OrderDetailLine>) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            order_date: order.order_date,
            total: order.total,
            status: order.status,
            shipping_address: order.shipping_address,
            payment_method: order.payment_method,
            order_details: details,
            created_date: order.created_date,
            updated_date: order.updated_date,
        }
    }
}
