use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub system: String,
    /// Unix time in seconds.
    pub timestamp: f64,
}

/// Static subsystem flags plus the number of jobs the store currently tracks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystemStatus {
    pub gee_initialized: bool,
    pub quantum_bridge: String,
    pub gpu_nodes: u32,
    pub active_jobs: usize,
}

/// Outcome of a service-account key upload, for both success and failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyUploadResponse {
    pub status: String,
    pub message: String,
}

impl KeyUploadResponse {
    pub fn success(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: message.to_string(),
        }
    }
}
