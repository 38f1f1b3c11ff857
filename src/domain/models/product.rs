use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub stock: i64,
    pub category_id: i64,
    pub created_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_date: Option<DateTime<Utc>>,
}

/// Read-side row joined with the owning category's display name.
/// `category_name` is empty when the category row is missing.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct ProductWithCategory {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub stock: i64,
    pub category_id: i64,
    pub created_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_date: Option<DateTime<Utc>>,
    pub category_name: String,
}
