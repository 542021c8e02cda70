use crate::error::{ApiError, StoreError};
use crate::job_controller::JobService;
use actix_web::{web, HttpResponse};

pub(crate) async fn process(
    job_id: web::Path<String>,
    service: web::Data<JobService>,
) -> Result<HttpResponse, ApiError> {
    match service.get_status(&job_id).await {
        Ok(view) => Ok(HttpResponse::Ok().json(view)),
        Err(StoreError::NotFound(id)) => Err(ApiError::JobNotFound(id)),
        Err(err) => Err(err.into()),
    }
}
