use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{
    requests::{ChangePasswordRequest, RegisterRequest, UpdateAddressRequest},
    responses::UserResponse,
};
use crate::api::extractors::auth::AuthUser;
use crate::api::handlers::forms::{read_file, read_text};
use crate::domain::models::user::{Role, User};
use crate::domain::services::policy;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&user)?;

    let users = state.user_repo.list().await?;
    let safe: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(safe))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("Email already exists".into()));
    }

    let password_hash = state.auth_service.hash_password(&payload.password)?;

    let user = User::new(
        payload.email,
        password_hash,
        payload.full_name,
        payload.address,
        payload.role.unwrap_or(Role::Customer),
        "system".to_string(),
    );
    let created = state.user_repo.create(&user).await?;

    info!("User registered: {}", created.id);
    Ok(Json(UserResponse::from(created)))
}

/// Admin update via multipart form: full replace of the profile fields.
/// The image keeps its prior value unless a new path or file is supplied.
struct UserForm {
    email: String,
    full_name: String,
    role: Option<Role>,
    address: Option<String>,
    image: Option<String>,
    file: Option<(String, Vec<u8>)>,
}

async fn parse_user_form(mut multipart: Multipart) -> Result<UserForm, AppError> {
    let mut email = None;
    let mut full_name = None;
    let mut role = None;
    let mut address = None;
    let mut image = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::Validation("Malformed multipart payload".into()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "email" => email = Some(read_text(field).await?),
            "full_name" => full_name = Some(read_text(field).await?),
            "role" => {
                role = Some(match read_text(field).await?.as_str() {
                    "Admin" => Role::Admin,
                    "Customer" => Role::Customer,
                    _ => return Err(AppError::Validation("role must be Admin or Customer".into())),
                })
            }
            "address" => address = Some(read_text(field).await?),
            "image" => image = Some(read_text(field).await?),
            "file" => file = Some(read_file(field).await?),
            _ => {}
        }
    }

    Ok(UserForm {
        email: email.ok_or(AppError::Validation("email is required".into()))?,
        full_name: full_name.ok_or(AppError::Validation("full_name is required".into()))?,
        role,
        address,
        image,
        file,
    })
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    AuthUser(requester): AuthUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&requester)?;

    let mut user = state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let form = parse_user_form(multipart).await?;

    // Explicit path wins, then an uploaded file, else the prior image stays.
    let mut image = user.image.clone();
    if let Some(path) = form.image.as_deref() {
        if !path.is_empty() && Some(path) != user.image.as_deref() {
            image = Some(path.to_string());
        }
    }
    if image == user.image {
        if let Some((file_name, content)) = &form.file {
            if !content.is_empty() {
                image = Some(state.file_store.save(content, file_name).await?);
            }
        }
    }

    user.email = form.email;
    user.full_name = form.full_name;
    user.role = form.role.unwrap_or(Role::Customer);
    user.address = form.address;
    user.image = image;
    user.updated_by = Some(requester.full_name.clone());
    user.updated_date = Some(Utc::now());

    let updated = state.user_repo.update(&user).await?;
    info!("User updated: {}", id);
    Ok(Json(UserResponse::from(updated)))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    AuthUser(requester): AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    policy::require_admin(&requester)?;

    state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    state.user_repo.delete(id).await?;
    info!("User deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn update_address(
    State(state): State<Arc<AppState>>,
    AuthUser(requester): AuthUser,
    Json(payload): Json<UpdateAddressRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = state
        .user_repo
        .find_by_id(requester.id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    user.address = Some(payload.address);
    user.updated_by = Some(requester.full_name.clone());
    user.updated_date = Some(Utc::now());

    let updated = state.user_repo.update(&user).await?;
    info!("Address updated for user: {}", updated.id);
    Ok(Json(UserResponse::from(updated)))
}

pub async fn change_password(
    State(state): State<Arc<AppState>>,
    AuthUser(requester): AuthUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut user = state
        .user_repo
        .find_by_id(requester.id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if !state.auth_service.verify_password(&payload.current_password, &user.password_hash) {
        return Err(AppError::Validation("Current password is incorrect".into()));
    }

    user.password_hash = state.auth_service.hash_password(&payload.new_password)?;
    user.updated_by = Some(requester.full_name.clone());
    user.updated_date = Some(Utc::now());

    state.user_repo.update(&user).await?;
    info!("Password changed for user: {}", user.id);
    Ok(Json(serde_json::json!({"status": "password changed"})))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(requester): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .user_repo
        .find_by_id(requester.id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    Ok(Json(UserResponse::from(user)))
}
