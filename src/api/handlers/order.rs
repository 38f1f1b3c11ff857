use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{
    requests::{CreateOrderRequest, UpdateOrderRequest},
    responses::OrderResponse,
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::order::{Order, OrderDetail, STATUS_PENDING};
use crate::domain::services::policy;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_order(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    for item in &payload.order_details {
        if item.quantity <= 0 {
            return Err(AppError::Validation("quantity must be positive".into()));
        }
    }

    // The owner is always the authenticated requester; any user id in the
    // payload is ignored.
    let order = Order {
        id: 0,
        user_id: user.id,
        order_date: payload.order_date.unwrap_or_else(Utc::now),
        total: payload.total,
        status: payload.status.unwrap_or_else(|| STATUS_PENDING.to_string()),
        shipping_address: payload.shipping_address,
        payment_method: payload.payment_method,
        created_date: Utc::now(),
        updated_date: None,
    };

    let items: Vec<OrderDetail> = payload
        .order_details
        .iter()
        .map(|item| OrderDetail {
            id: 0,
            order_id: 0,
            product_id: item.product_id,
            quantity: item.quantity,
            // Caller-supplied capture of price and subtotal; deliberately
            // not re-derived from the current product price.
            price: item.price,
            sub_total: item.sub_total,
        })
        .collect();

    let created = state.order_repo.create_with_items(&order, &items).await?;
    let details = state.order_detail_repo.list_by_order(created.id).await?;

    info!("Order created: {} for user {}", created.id, user.id);
    Ok(Json(OrderResponse::from_parts(created, details)))
}

pub async fn get_order(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let order = state
        .order_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Order not found".into()))?;

    policy::require_order_access(&user, order.user_id)?;

    let details = state.order_detail_repo.list_by_order(order.id).await?;
    Ok(Json(OrderResponse::from_parts(order, details)))
}

pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let orders = if user.role.is_admin() {
        state.order_repo.list().await?
    } else {
        state.order_repo.list_by_user(user.id).await?
    };

    let mut responses = Vec::with_capacity(orders.len());
    for order in orders {
        let details = state.order_detail_repo.list_by_order(order.id).await?;
        responses.push(OrderResponse::from_parts(order, details));
    }

    Ok(Json(responses))
}

pub async fn update_order(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    let mut order = state
        .order_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Order not found".into()))?;

    // Full replace of the order header; line items are untouched.
    order.order_date = payload.order_date;
    order.total = payload.total;
    order.status = payload.status;
    order.shipping_address = payload.shipping_address;
    order.payment_method = payload.payment_method;
    order.updated_date = Some(Utc::now());

    let updated = state.order_repo.update(&order).await?;
    info!("Order updated: {}", id);

    let details = state.order_detail_repo.list_by_order(updated.id).await?;
    Ok(Json(OrderResponse::from_parts(updated, details)))
}

pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    state
        .order_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Order not found".into()))?;

    state.order_repo.delete_with_items(id).await?;
    info!("Order deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
