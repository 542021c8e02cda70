//! Request-facing entry point of the job subsystem.
//!
//! `JobService` is what HTTP handlers receive through `web::Data`. It creates
//! jobs (id, initial record, runner), answers status polls from store
//! snapshots, and serves the results payload.

use crate::config::UnknownJobPolicy;
use crate::error::StoreError;
use crate::job_controller::runner::{JobRunner, StageTrigger};
use crate::job_controller::stages::{FALLBACK_TASK, INITIAL_TASK};
use crate::job_controller::store::JobStore;
use common::jobs::{JobRecord, JobStatusView};
use common::model::results::{DepositSpecifications, DrillTarget, JobResults, ResourceFinding};
use common::requests::CreateJobRequest;
use log::{info, warn};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[derive(Clone)]
pub struct JobService {
    store: JobStore,
    trigger: Arc<dyn StageTrigger>,
    unknown_job_policy: UnknownJobPolicy,
    shutdown: CancellationToken,
}

impl JobService {
    pub fn new(
        store: JobStore,
        trigger: Arc<dyn StageTrigger>,
        unknown_job_policy: UnknownJobPolicy,
    ) -> Self {
        Self {
            store,
            trigger,
            unknown_job_policy,
            shutdown: CancellationToken::new(),
        }
    }

    /// Registers a new job and schedules its runner. Returns without waiting
    /// for any stage. Identical payloads still create distinct jobs.
    pub async fn create_job(&self, request: CreateJobRequest) -> Result<String, StoreError> {
        let job_id = format!("JOB-{}", Uuid::new_v4().simple());
        let record = JobRecord::new(job_id.clone(), INITIAL_TASK, request);
        self.store.put(&job_id, record).await?;

        JobRunner::new(
            job_id.clone(),
            self.store.clone(),
            Arc::clone(&self.trigger),
            self.shutdown.child_token(),
        )
        .spawn();

        info!("Job {} created", job_id);
        Ok(job_id)
    }

    /// Current status of `job_id`.
    ///
    /// Unknown ids are answered with a synthesized completed record unless the
    /// service runs with `UnknownJobPolicy::NotFound`.
    pub async fn get_status(&self, job_id: &str) -> Result<JobStatusView, StoreError> {
        match self.store.get(job_id).await {
            Ok(record) => Ok(JobStatusView::from(&record)),
            Err(StoreError::NotFound(_)) if self.unknown_job_policy == UnknownJobPolicy::Fallback => {
                warn!("Unknown job {} answered with fallback record", job_id);
                Ok(JobStatusView::fallback(job_id, FALLBACK_TASK))
            }
            Err(err) => Err(err),
        }
    }

    /// The results payload. It is the same for every id and does not check
    /// whether the job has completed.
    pub fn get_result(&self, _job_id: &str) -> JobResults {
        JobResults {
            results: vec![ResourceFinding {
                element: "Lithium".to_string(),
                resource_type: "Battery Metal".to_string(),
                status: "Confirmed".to_string(),
                probability: 0.88,
                specifications: DepositSpecifications {
                    grade: 1.2,
                    depth: 350,
                    tonnage: 45.2,
                },
            }],
            drill_targets: vec![DrillTarget {
                id: "DT-01".to_string(),
                lat: -23.5,
                lon: -68.0,
                depth: 400,
                priority: "High".to_string(),
                description: "Primary Brine Reservoir".to_string(),
            }],
        }
    }

    /// Number of records in the store, finished ones included.
    pub async fn job_count(&self) -> usize {
        self.store.count().await
    }

    /// Stops every runner. Records keep whatever state they had reached.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}
