use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CategoryRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::category::Category;
use crate::domain::services::policy;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state.category_repo.list().await?;
    Ok(Json(categories))
}

pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let category = state
        .category_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Category not found".into()))?;
    Ok(Json(category))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    let category = Category::new(
        payload.name,
        payload.description,
        payload.is_active,
        user.full_name.clone(),
    );
    let created = state.category_repo.create(&category).await?;

    info!("Category created: {}", created.id);
    Ok(Json(created))
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    let mut category = state
        .category_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Category not found".into()))?;

    // Full replace, not a patch.
    category.name = payload.name;
    category.description = payload.description;
    category.is_active = payload.is_active;
    category.updated_by = Some(user.full_name.clone());
    category.updated_date = Some(Utc::now());

    let updated = state.category_repo.update(&category).await?;
    info!("Category updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    state
        .category_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Category not found".into()))?;

    state.category_repo.delete(id).await?;
    info!("Category deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
