//! The shared, in-memory table of job records.
//!
//! A single `JobStore` is built in `main.rs` and handed to the `JobService`,
//! which in turn gives a clone to every `JobRunner` it spawns. Clones share the
//! same map, so the request that creates a job, the runner that advances it and
//! any number of polling requests all observe one authoritative record.
//!
//! The map is guarded by a `tokio::sync::RwLock`. Reads take the shared lock and
//! return an owned snapshot; updates take the exclusive lock for the whole
//! mutation, so a reader can never see a record halfway through a transition
//! (for instance the progress of one stage paired with the label of another).
//! Records are never removed: the store lives as long as the process.

use crate::error::StoreError;
use common::jobs::JobRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A clonable, thread-safe handle to the job records.
#[derive(Clone, Default)]
pub struct JobStore {
    jobs: Arc<RwLock<HashMap<String, JobRecord>>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record under `job_id`. An existing record is never overwritten.
    pub async fn put(&self, job_id: &str, record: JobRecord) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(job_id) {
            return Err(StoreError::DuplicateId(job_id.to_string()));
        }
        jobs.insert(job_id.to_string(), record);
        Ok(())
    }

    /// Returns a snapshot of the current record.
    pub async fn get(&self, job_id: &str) -> Result<JobRecord, StoreError> {
        self.jobs
            .read()
            .await
            .get(job_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(job_id.to_string()))
    }

    /// Applies `mutator` to the record while holding the write lock and returns
    /// whatever the mutator returns.
    pub async fn update<F, T>(&self, job_id: &str, mutator: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut JobRecord) -> T,
    {
        let mut jobs = self.jobs.write().await;
        let record = jobs
            .get_mut(job_id)
            .ok_or_else(|| StoreError::NotFound(job_id.to_string()))?;
        Ok(mutator(record))
    }

    pub async fn count(&self) -> usize {
        self.jobs.read().await.len()
    }

    #[cfg(test)]
    pub(crate) async fn remove(&self, job_id: &str) -> Option<JobRecord> {
        self.jobs.write().await.remove(job_id)
    }
}
