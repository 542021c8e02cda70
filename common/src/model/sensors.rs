//! Payloads of the synthetic sensor-data endpoints.
//!
//! These are display data for the dashboard. They are generated from the
//! request coordinates and carry no relation to any job.

use crate::requests::SeismicAxis;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SatelliteSchedule {
    pub schedule: Vec<SatellitePass>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SatellitePass {
    pub satellite: String,
    pub sensor_type: String,
    pub time_to_acquisition: String,
    pub tasking_status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoxelGrid {
    pub voxels: Vec<Voxel>,
}

/// One cell of the digital twin's 3D model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voxel {
    pub id: String,
    pub x: u8,
    pub y: u8,
    /// Depth layer, 0 is the surface.
    pub z: u8,
    pub lithology: String,
    pub density: f64,
    pub mineral_prob: f64,
    pub uncertainty: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemporalAnalysis {
    pub trend: String,
    pub velocity_mm_yr: f64,
    pub depth_resolution: u32,
    pub data: Vec<DeformationPoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeformationPoint {
    pub date: String,
    pub deformation: f64,
    pub thermal_inertia: f64,
    pub coherence: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Residuals {
    pub mass_conservation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub momentum_balance: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsInversion {
    pub structure: String,
    pub residuals: Residuals,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TomographySlice {
    /// Row-major density grid, rows run from the surface downwards.
    pub slice: Vec<Vec<f64>>,
    pub structure: String,
    pub residuals: Residuals,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeismicSlice {
    pub width: usize,
    pub height: usize,
    pub data: Vec<Vec<f64>>,
    pub uncertainty: Vec<Vec<f64>>,
    pub horizons: Vec<Horizon>,
    pub faults: Vec<Value>,
    pub axis: SeismicAxis,
    pub index: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Horizon {
    pub depth: Vec<f64>,
    pub label: String,
    pub confidence: f64,
}
