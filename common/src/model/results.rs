use serde::{Deserialize, Serialize};

/// Final output of an analysis job, served from `/jobs/{job_id}/artifacts/results.json`.
///
/// The payload is not derived from job state; every job reports the same
/// findings. Field names follow the camelCase convention of the dashboard that
/// consumes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobResults {
    pub results: Vec<ResourceFinding>,
    #[serde(rename = "drillTargets")]
    pub drill_targets: Vec<DrillTarget>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFinding {
    pub element: String,
    pub resource_type: String,
    pub status: String,
    pub probability: f64,
    pub specifications: DepositSpecifications,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepositSpecifications {
    pub grade: f64,
    /// Metres below surface.
    pub depth: u32,
    pub tonnage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrillTarget {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub depth: u32,
    pub priority: String,
    pub description: String,
}
