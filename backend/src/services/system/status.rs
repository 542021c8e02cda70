use crate::job_controller::JobService;
use actix_web::{web, HttpResponse, Responder};
use common::model::system::SystemStatus;

pub(crate) async fn process(service: web::Data<JobService>) -> impl Responder {
    HttpResponse::Ok().json(SystemStatus {
        gee_initialized: true,
        quantum_bridge: "STANDBY".to_string(),
        gpu_nodes: 4,
        active_jobs: service.job_count().await,
    })
}
