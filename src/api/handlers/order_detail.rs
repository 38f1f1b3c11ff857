use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateOrderDetailRequest, UpdateOrderDetailRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::order::OrderDetail;
use crate::domain::services::policy;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_order_details(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    let details = state.order_detail_repo.list().await?;
    Ok(Json(details))
}

pub async fn get_order_detail(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let detail = state
        .order_detail_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Order detail not found".into()))?;

    let order = state
        .order_repo
        .find_by_id(detail.order_id)
        .await?
        .ok_or(AppError::NotFound("Order not found".into()))?;

    policy::require_order_access(&user, order.user_id)?;

    Ok(Json(detail))
}

pub async fn create_order_detail(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateOrderDetailRequest>,
) -> Result<impl IntoResponse, AppError> {
    let order = state
        .order_repo
        .find_by_id(payload.order_id)
        .await?
        .ok_or(AppError::NotFound("Order not found".into()))?;

    policy::require_order_access(&user, order.user_id)?;

    if payload.quantity <= 0 {
        return Err(AppError::Validation("quantity must be positive".into()));
    }

    let detail = OrderDetail {
        id: 0,
        order_id: payload.order_id,
        product_id: payload.product_id,
        quantity: payload.quantity,
        price: payload.price,
        sub_total: payload.sub_total,
    };

    let created = state.order_detail_repo.create(&detail).await?;
    info!("Order detail created: {} on order {}", created.id, created.order_id);
    Ok(Json(created))
}

pub async fn list_by_order(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(order_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let order = state
        .order_repo
        .find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("Order not found".into()))?;

    policy::require_order_access(&user, order.user_id)?;

    let details = state.order_detail_repo.list_by_order(order_id).await?;
    Ok(Json(details))
}

pub async fn update_order_detail(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderDetailRequest>,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    let existing = state
        .order_detail_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Order detail not found".into()))?;

    if payload.quantity <= 0 {
        return Err(AppError::Validation("quantity must be positive".into()));
    }

    let detail = OrderDetail {
        id: existing.id,
        order_id: payload.order_id,
        product_id: payload.product_id,
        quantity: payload.quantity,
        price: payload.price,
        sub_total: payload.sub_total,
    };

    let updated = state.order_detail_repo.update(&detail).await?;
    info!("Order detail updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_order_detail(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    state
        .order_detail_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Order detail not found".into()))?;

    state.order_detail_repo.delete(id).await?;
    info!("Order detail deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
