use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::extractors::auth::AuthUser;
use crate::api::handlers::forms::{read_file, read_text};
use crate::domain::models::product::Product;
use crate::domain::services::policy;
use crate::error::AppError;
use crate::state::AppState;

/// Multipart payload for product create/update: plain text fields plus an
/// optional binary `file` part for the image.
struct ProductForm {
    name: String,
    price: f64,
    category_id: i64,
    description: Option<String>,
    image: Option<String>,
    stock: i64,
    file: Option<(String, Vec<u8>)>,
}

async fn parse_product_form(mut multipart: Multipart) -> Result<ProductForm, AppError> {
    let mut name = None;
    let mut price = None;
    let mut category_id = None;
    let mut description = None;
    let mut image = None;
    let mut stock = 0i64;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::Validation("Malformed multipart payload".into()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "name" => name = Some(read_text(field).await?),
            "price" => {
                price = Some(read_text(field).await?.parse::<f64>()
                    .map_err(|_| AppError::Validation("price must be a number".into()))?)
            }
            "category_id" => {
                category_id = Some(read_text(field).await?.parse::<i64>()
                    .map_err(|_| AppError::Validation("category_id must be an integer".into()))?)
            }
            "description" => description = Some(read_text(field).await?),
            "image" => image = Some(read_text(field).await?),
            "stock" => {
                stock = read_text(field).await?.parse::<i64>()
                    .map_err(|_| AppError::Validation("stock must be an integer".into()))?
            }
            "file" => file = Some(read_file(field).await?),
            _ => {}
        }
    }

    let form = ProductForm {
        name: name.ok_or(AppError::Validation("name is required".into()))?,
        price: price.ok_or(AppError::Validation("price is required".into()))?,
        category_id: category_id.ok_or(AppError::Validation("category_id is required".into()))?,
        description,
        image,
        stock,
        file,
    };

    if form.price < 0.0 {
        return Err(AppError::Validation("price must be non-negative".into()));
    }

    Ok(form)
}

/// A non-empty `image` path from the client wins over an uploaded file;
/// otherwise a present file is stored and its reference path used.
async fn resolve_image(state: &AppState, form: &ProductForm) -> Result<Option<String>, AppError> {
    if let Some(path) = form.image.as_deref() {
        if !path.is_empty() {
            return Ok(Some(path.to_string()));
        }
    }
    if let Some((file_name, content)) = &form.file {
        if !content.is_empty() {
            let stored = state.file_store.save(content, file_name).await?;
            return Ok(Some(stored));
        }
    }
    Ok(None)
}

pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let products = state.product_repo.list().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let product = state
        .product_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Product not found".into()))?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    let form = parse_product_form(multipart).await?;
    let image = resolve_image(&state, &form).await?;

    let product = Product {
        id: 0,
        name: form.name,
        price: form.price,
        description: form.description,
        image,
        stock: form.stock,
        category_id: form.category_id,
        created_by: Some(user.full_name.clone()),
        created_date: Utc::now(),
        updated_by: None,
        updated_date: None,
    };

    let created = state.product_repo.create(&product).await?;

    info!("Product created: {}", created.id);
    Ok(Json(created))
}

pub async fn update_product(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    let existing = state
        .product_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Product not found".into()))?;

    let form = parse_product_form(multipart).await?;
    let image = resolve_image(&state, &form).await?;

    let product = Product {
        id,
        name: form.name,
        price: form.price,
        description: form.description,
        image,
        stock: form.stock,
        category_id: form.category_id,
        created_by: existing.created_by,
        created_date: existing.created_date,
        updated_by: Some(user.full_name.clone()),
        updated_date: Some(Utc::now()),
    };

    let updated = state.product_repo.update(&product).await?;
    info!("Product updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    state
        .product_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Product not found".into()))?;

    state.product_repo.delete(id).await?;
    info!("Product deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
