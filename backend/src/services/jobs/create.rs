use crate::error::ApiError;
use crate::job_controller::JobService;
use actix_web::{web, HttpResponse};
use common::jobs::{CreateJobResponse, JobStatus};
use common::requests::CreateJobRequest;

pub(crate) async fn process(
    service: web::Data<JobService>,
    req: web::Json<CreateJobRequest>,
) -> Result<HttpResponse, ApiError> {
    let job_id = service.create_job(req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CreateJobResponse {
        job_id,
        status: JobStatus::Pending,
    }))
}
