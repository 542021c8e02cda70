use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Request payload for `POST /jobs`.
/// Every field is stored verbatim on the job record; none of them influence the stages.
pub struct CreateJobRequest {
    pub region: Map<String, Value>,
    pub resource_types: Vec<String>,
    pub resolution: String,
    pub mode: String,
}

#[derive(Deserialize)]
/// Request payload for `POST /system/upload_key_text`.
pub struct KeyPayload {
    pub key_content: String,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct CoordinatesQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct InversionQuery {
    pub lat: f64,
    pub lon: f64,
    pub depth: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeismicAxis {
    X,
    Y,
    Z,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SeismicSliceQuery {
    pub lat: f64,
    pub lon: f64,
    pub index: i64,
    pub axis: SeismicAxis,
}
