use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_date: Option<DateTime<Utc>>,
}

impl Category {
    pub fn new(name: String, description: Option<String>, is_active: bool, created_by: String) -> Self {
        Self {
            id: 0,
            name,
            description,
            is_active,
            created_by: Some(created_by),
            created_date: Utc::now(),
            updated_by: None,
            updated_date: None,
        }
    }
}
