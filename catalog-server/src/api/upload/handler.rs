//! Image Upload Handler
//!
//! Content type and size are checked by the admin page before upload; the
//! server stores what it receives.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use shared::{AppError, AppResult, UploadResponse};

use super::IMAGE_FIELD;
use crate::core::ServerState;

/// Upload image handler
pub async fn upload(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "Upload is not a multipart form");
        AppError::no_file_uploaded()
    })?;

    // Find the image field
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!(error = %e, "Malformed multipart body");
        AppError::no_file_uploaded()
    })? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read uploaded file");
            AppError::upload_failed()
        })?;
        upload = Some((file_name, data.to_vec()));
        break;
    }

    let (original_name, data) = upload.ok_or_else(AppError::no_file_uploaded)?;

    let path = state
        .images
        .save(&original_name, &data)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, dir = %state.images.dir().display(), "Failed to store upload");
            AppError::upload_failed()
        })?;

    tracing::info!(original = %original_name, size = data.len(), path = %path, "Image uploaded");

    Ok(Json(UploadResponse::ok(path)))
}
