//! Service health and credential endpoints.
//!
//! - `GET /system/health`: liveness probe used by the dashboard to pick
//!   between cloud and offline mode.
//! - `GET /system/status`: static subsystem flags plus the number of tracked jobs.
//! - `POST /system/upload_key`: multipart upload of a service-account key file
//!   in a `file` field.
//! - `POST /system/upload_key_text`: the same key pasted as text in a JSON body.
//!
//! Key uploads are only validated, never stored.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod health;
mod status;
mod upload_key;

const API_PATH: &str = "/system";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/health", get().to(health::process))
        .route("/status", get().to(status::process))
        .route("/upload_key", post().to(upload_key::process_file))
        .route("/upload_key_text", post().to(upload_key::process_text))
}
