use crate::job_controller::JobService;
use actix_web::{web, HttpResponse, Responder};

pub(crate) async fn process(
    job_id: web::Path<String>,
    service: web::Data<JobService>,
) -> impl Responder {
    HttpResponse::Ok().json(service.get_result(&job_id))
}
