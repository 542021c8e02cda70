use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use common::model::system::HealthReport;

pub(crate) async fn process() -> impl Responder {
    HttpResponse::Ok().json(HealthReport {
        status: "ONLINE".to_string(),
        system: "Aurora OSI v3".to_string(),
        timestamp: Utc::now().timestamp_millis() as f64 / 1000.0,
    })
}
