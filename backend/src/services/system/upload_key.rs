use crate::error::ApiError;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::system::KeyUploadResponse;
use common::requests::KeyPayload;
use futures_util::StreamExt;
use serde_json::Value;

/// Service-account keys are a few KiB; anything far larger is not a key.
const MAX_KEY_BYTES: usize = 64 * 1024;

/// Accepts a JSON object that carries a `private_key` field.
fn validate_key(content: &[u8]) -> Result<(), ApiError> {
    let value: Value =
        serde_json::from_slice(content).map_err(|_| ApiError::InvalidKey("Invalid JSON"))?;
    match value.as_object() {
        Some(fields) if fields.contains_key("private_key") => Ok(()),
        _ => Err(ApiError::InvalidKey("Invalid key format")),
    }
}

fn accepted() -> HttpResponse {
    HttpResponse::Ok().json(KeyUploadResponse::success(
        "Key validated and stored securely.",
    ))
}

/// `POST /system/upload_key`: the key arrives as the `file` part of a multipart form.
pub(crate) async fn process_file(payload: Multipart) -> Result<HttpResponse, ApiError> {
    let content = read_key_file(payload).await?;
    validate_key(&content)?;
    Ok(accepted())
}

/// `POST /system/upload_key_text`: the key arrives as a JSON string.
pub(crate) async fn process_text(payload: web::Json<KeyPayload>) -> Result<HttpResponse, ApiError> {
    validate_key(payload.key_content.as_bytes())?;
    Ok(accepted())
}

async fn read_key_file(mut payload: Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ApiError::Upload(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("file") {
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| ApiError::Upload(e.to_string()))?;
            if bytes.len() + chunk.len() > MAX_KEY_BYTES {
                return Err(ApiError::Upload("Key file too large".to_string()));
            }
            bytes.extend_from_slice(&chunk);
        }
        return Ok(bytes);
    }
    Err(ApiError::Upload("Missing file".to_string()))
}
