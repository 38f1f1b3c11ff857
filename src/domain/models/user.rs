use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Customer => "Customer",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub image: Option<String>,
    pub address: Option<String>,
    pub role: Role,
    pub created_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_date: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(email: String, password_hash: String, full_name: String, address: Option<String>, role: Role, created_by: String) -> Self {
        Self {
            id: 0,
            email,
            password_hash,
            full_name,
            image: None,
            address,
            role,
            created_by: Some(created_by),
            created_date: Utc::now(),
            updated_by: None,
            updated_date: None,
        }
    }
}
