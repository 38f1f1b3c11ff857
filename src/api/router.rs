use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{auth, category, health, order, order_detail, product, user};
use crate::state::AppState;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/auth/login", post(auth::login))

        // Categories (public reads, admin writes)
        .route("/api/categories", get(category::list_categories).post(category::create_category))
        .route("/api/categories/{id}", get(category::get_category).put(category::update_category).delete(category::delete_category))

        // Products (public reads, admin writes, multipart for image upload)
        .route("/api/products", get(product::list_products).post(product::create_product))
        .route("/api/products/{id}", get(product::get_product).put(product::update_product).delete(product::delete_product))

        // Users (public registration, admin management, member self-service)
        .route("/api/users", get(user::list_users).post(user::register))
        .route("/api/users/address", post(user::update_address))
        .route("/api/users/change-password", put(user::change_password))
        .route("/api/users/profile", get(user::get_profile))
        .route("/api/users/{id}", put(user::update_user).delete(user::delete_user))

        // Orders (owner or admin)
        .route("/api/orders", get(order::list_orders).post(order::create_order))
        .route("/api/orders/{id}", get(order::get_order).put(order::update_order).delete(order::delete_order))

        // Order details
        .route("/api/order-details", get(order_detail::list_order_details).post(order_detail::create_order_detail))
        .route("/api/order-details/order/{order_id}", get(order_detail::list_by_order))
        .route("/api/order-details/{id}", get(order_detail::get_order_detail).put(order_detail::update_order_detail).delete(order_detail::delete_order_detail))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
