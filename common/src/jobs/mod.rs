use crate::requests::CreateJobRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an analysis job as reported over the wire.
///
/// A stored record is only ever `Running` or `Completed`. `Pending` is what the
/// creation endpoint answers with, since the runner has not been scheduled yet
/// from the client's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
}

/// The authoritative state of one job, owned by the job store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_id: String,
    pub status: JobStatus,
    /// Percentage in `0..=100`, never decreases.
    pub progress: u8,
    pub current_task: String,
    pub created_at: DateTime<Utc>,
    /// The creation payload, kept verbatim.
    pub request: CreateJobRequest,
}

impl JobRecord {
    pub fn new(job_id: String, initial_task: &str, request: CreateJobRequest) -> Self {
        Self {
            job_id,
            status: JobStatus::Running,
            progress: 0,
            current_task: initial_task.to_string(),
            created_at: Utc::now(),
            request,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status == JobStatus::Completed
    }

    /// Moves the record to a new checkpoint. Progress and label change together.
    ///
    /// Returns `false` without touching the record when it is already terminal
    /// or when `progress` would move backwards.
    pub fn advance(&mut self, progress: u8, task: &str) -> bool {
        if self.is_terminal() || progress < self.progress {
            return false;
        }
        self.progress = progress.min(100);
        self.current_task = task.to_string();
        true
    }

    /// Marks the record terminal. Further calls are no-ops.
    pub fn complete(&mut self, task: &str) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.status = JobStatus::Completed;
        self.progress = 100;
        self.current_task = task.to_string();
        true
    }
}

/// Body of `GET /jobs/{job_id}/status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobStatusView {
    pub job_id: String,
    pub status: JobStatus,
    pub progress: u8,
    pub current_task: String,
}

impl JobStatusView {
    /// A synthesized terminal view for an id the store has never seen.
    pub fn fallback(job_id: &str, task: &str) -> Self {
        Self {
            job_id: job_id.to_string(),
            status: JobStatus::Completed,
            progress: 100,
            current_task: task.to_string(),
        }
    }
}

impl From<&JobRecord> for JobStatusView {
    fn from(record: &JobRecord) -> Self {
        Self {
            job_id: record.job_id.clone(),
            status: record.status,
            progress: record.progress,
            current_task: record.current_task.clone(),
        }
    }
}

/// Body of `POST /jobs`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateJobResponse {
    pub job_id: String,
    pub status: JobStatus,
}
