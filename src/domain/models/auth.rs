use serde::{Deserialize, Serialize};

use crate::domain::models::user::Role;
use crate::error::AppError;

/// JWT claim set carried by the access token. Issued once at login,
/// expires one hour later, not renewable.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub exp: usize,
    pub iat: usize,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub address: String,
}

/// Typed identity decoded once per request from the token claims.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub address: Option<String>,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id: i64 = claims.sub.parse().map_err(|_| AppError::Unauthorized)?;

        Ok(CurrentUser {
            id,
            email: claims.email,
            full_name: claims.name,
            role: claims.role,
            address: if claims.address.is_empty() { None } else { Some(claims.address) },
        })
    }
}
