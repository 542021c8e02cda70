//! Background execution of a single job.
//!
//! `JobService::create_job` builds one `JobRunner` per job and spawns it on the
//! tokio runtime. The runner owns no client reference: it walks `STAGES`, waits
//! for its `StageTrigger` before each checkpoint, and writes progress and label
//! into the `JobStore` in one locked update. After the last stage it marks the
//! record completed.
//!
//! A runner stops early in two cases, both silently:
//! - its record is no longer in the store (the job is considered abandoned);
//! - the service-wide shutdown token is cancelled.

use crate::error::StoreError;
use crate::job_controller::stages::{Stage, STAGES, TERMINAL_TASK};
use crate::job_controller::store::JobStore;
use futures_util::future::BoxFuture;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Decides when a job may move on to its next stage.
///
/// The returned future resolves once `stage` is reached for `job_id`.
pub trait StageTrigger: Send + Sync {
    fn ready(&self, job_id: &str, stage: &'static Stage) -> BoxFuture<'static, ()>;
}

/// Reaches every stage after the same wall-clock delay.
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl StageTrigger for FixedDelay {
    fn ready(&self, _job_id: &str, _stage: &'static Stage) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(self.delay))
    }
}

/// How a runner ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Abandoned,
    Cancelled,
}

pub struct JobRunner {
    job_id: String,
    store: JobStore,
    trigger: Arc<dyn StageTrigger>,
    shutdown: CancellationToken,
}

impl JobRunner {
    pub fn new(
        job_id: String,
        store: JobStore,
        trigger: Arc<dyn StageTrigger>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            job_id,
            store,
            trigger,
            shutdown,
        }
    }

    pub fn spawn(self) -> JoinHandle<RunOutcome> {
        tokio::spawn(self.run())
    }

    pub async fn run(self) -> RunOutcome {
        for stage in STAGES.iter() {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    debug!("Job {} stopped by shutdown before {}%", self.job_id, stage.progress);
                    return RunOutcome::Cancelled;
                }
                _ = self.trigger.ready(&self.job_id, stage) => {}
            }

            let applied = self
                .store
                .update(&self.job_id, |record| record.advance(stage.progress, stage.label))
                .await;
            match applied {
                Ok(true) => debug!("Job {} at {}%: {}", self.job_id, stage.progress, stage.label),
                Ok(false) => debug!("Job {} ignored stage {}%", self.job_id, stage.progress),
                Err(err) => return self.abandon(err),
            }
        }

        match self
            .store
            .update(&self.job_id, |record| record.complete(TERMINAL_TASK))
            .await
        {
            Ok(_) => {
                info!("Job {} completed", self.job_id);
                RunOutcome::Completed
            }
            Err(err) => self.abandon(err),
        }
    }

    fn abandon(&self, err: StoreError) -> RunOutcome {
        warn!("Job {} abandoned: {}", self.job_id, err);
        RunOutcome::Abandoned
    }
}
