pub mod jobs;
pub mod sensors;
pub mod system;

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

/// Registers every route of the API together with the extractor settings.
///
/// Malformed bodies and query strings are answered with
/// `422 Unprocessable Entity` and a `{"detail": ...}` body before any handler runs.
pub fn configure(cfg: &mut web::ServiceConfig, json_limit: usize) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(json_limit)
            .error_handler(json_error),
    )
    .app_data(web::QueryConfig::default().error_handler(query_error))
    .service(jobs::configure_routes())
    .service(system::configure_routes());
    sensors::configure(cfg);
}

fn unprocessable<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let detail = err.to_string();
    log::debug!("Rejected request: {}", detail);
    InternalError::from_response(
        err,
        HttpResponse::UnprocessableEntity().json(json!({ "detail": detail })),
    )
    .into()
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    unprocessable(err)
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    unprocessable(err)
}
