//! HTTP endpoints of the analysis job lifecycle.
//!
//! - `POST /jobs`: validates a `CreateJobRequest`, registers the job through
//!   `JobService::create_job` and answers at once with the new `job_id` and
//!   status `PENDING`. Stage progression happens in the background.
//!
//! - `GET /jobs/{job_id}/status`: returns the instantaneous
//!   `{job_id, status, progress, current_task}` snapshot. Never waits for
//!   progress. Unknown ids are answered according to the configured
//!   `UnknownJobPolicy`.
//!
//! - `GET /jobs/{job_id}/artifacts/results.json`: returns the results payload,
//!   which is identical for every id.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod create;
mod get_status;
mod results;

const API_PATH: &str = "/jobs";

/// Configures and returns the Actix scope for job routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("/{job_id}/status", get().to(get_status::process))
        .route("/{job_id}/artifacts/results.json", get().to(results::process))
}

#[cfg(test)]
mod tests {
    use crate::config::UnknownJobPolicy;
    use crate::job_controller::{FixedDelay, JobService, JobStore};
    use crate::services;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::time::Duration;

    fn job_service(delay: Duration, policy: UnknownJobPolicy) -> JobService {
        JobService::new(JobStore::new(), Arc::new(FixedDelay::new(delay)), policy)
    }

    fn payload() -> Value {
        json!({
            "region": {"type": "point", "coordinates": [-68.0, -23.5], "radius": 10},
            "resource_types": ["Lithium"],
            "resolution": "10m",
            "mode": "standard"
        })
    }

    macro_rules! app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($service))
                    .configure(|cfg| services::configure(cfg, 1024 * 1024)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_then_poll_reports_pending_then_zero_progress() {
        let app = app!(job_service(Duration::from_secs(60), UnknownJobPolicy::Fallback));

        let req = test::TestRequest::post().uri("/jobs").set_json(payload()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let job_id = created["job_id"].as_str().unwrap().to_string();
        assert!(!job_id.is_empty());
        assert_eq!(created["status"], "PENDING");

        let req = test::TestRequest::get()
            .uri(&format!("/jobs/{job_id}/status"))
            .to_request();
        let status: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            status,
            json!({
                "job_id": job_id,
                "status": "RUNNING",
                "progress": 0,
                "current_task": "Initializing Ingestion..."
            })
        );
    }

    #[actix_web::test]
    async fn identical_payloads_create_distinct_jobs() {
        let app = app!(job_service(Duration::from_secs(60), UnknownJobPolicy::Fallback));

        let mut ids = HashSet::new();
        for _ in 0..5 {
            let req = test::TestRequest::post().uri("/jobs").set_json(payload()).to_request();
            let created: Value = test::call_and_read_body_json(&app, req).await;
            ids.insert(created["job_id"].as_str().unwrap().to_string());
        }
        assert_eq!(ids.len(), 5);
    }

    #[actix_web::test]
    async fn job_reaches_completed_and_stays_there() {
        let app = app!(job_service(Duration::from_millis(5), UnknownJobPolicy::Fallback));

        let req = test::TestRequest::post().uri("/jobs").set_json(payload()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/jobs/{}/status", created["job_id"].as_str().unwrap());

        let mut last = 0;
        let mut completed = false;
        for _ in 0..200 {
            let req = test::TestRequest::get().uri(&uri).to_request();
            let status: Value = test::call_and_read_body_json(&app, req).await;
            let progress = status["progress"].as_u64().unwrap();
            assert!(progress >= last);
            last = progress;
            if status["status"] == "COMPLETED" {
                completed = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(completed);

        for _ in 0..3 {
            let req = test::TestRequest::get().uri(&uri).to_request();
            let status: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(status["status"], "COMPLETED");
            assert_eq!(status["progress"], 100);
            assert_eq!(status["current_task"], "Done");
        }
    }

    #[actix_web::test]
    async fn unknown_job_falls_back_to_completed() {
        let app = app!(job_service(Duration::from_secs(60), UnknownJobPolicy::Fallback));

        let req = test::TestRequest::get().uri("/jobs/JOB-1700000000/status").to_request();
        let status: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            status,
            json!({
                "job_id": "JOB-1700000000",
                "status": "COMPLETED",
                "progress": 100,
                "current_task": "Restored from Archive"
            })
        );
    }

    #[actix_web::test]
    async fn unknown_job_is_404_under_strict_policy() {
        let app = app!(job_service(Duration::from_secs(60), UnknownJobPolicy::NotFound));

        let req = test::TestRequest::get().uri("/jobs/JOB-missing/status").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn results_payload_is_stable_across_ids() {
        let app = app!(job_service(Duration::from_secs(60), UnknownJobPolicy::Fallback));

        let req = test::TestRequest::post().uri("/jobs").set_json(payload()).to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let mut bodies = Vec::new();
        for id in [created["job_id"].as_str().unwrap(), "JOB-unknown", "anything"] {
            let req = test::TestRequest::get()
                .uri(&format!("/jobs/{id}/artifacts/results.json"))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            bodies.push(body);
        }

        assert!(bodies.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(bodies[0]["results"][0]["resourceType"], "Battery Metal");
        assert_eq!(bodies[0]["results"][0]["specifications"]["depth"], 350);
        assert_eq!(bodies[0]["drillTargets"][0]["description"], "Primary Brine Reservoir");
    }

    #[actix_web::test]
    async fn malformed_job_request_is_unprocessable() {
        let app = app!(job_service(Duration::from_secs(60), UnknownJobPolicy::Fallback));

        let req = test::TestRequest::post()
            .uri("/jobs")
            .set_json(json!({"region": {}, "resource_types": "Lithium"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());
    }
}
