use axum::extract::multipart::Field;

use crate::error::AppError;

/// Field readers shared by the multipart form handlers.

pub async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|_| AppError::Validation("Malformed multipart field".into()))
}

pub async fn read_file(field: Field<'_>) -> Result<(String, Vec<u8>), AppError> {
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|_| AppError::Validation("Malformed file part".into()))?;
    Ok((file_name, bytes.to_vec()))
}
