//! Command-line and environment configuration for the API server.
//!
//! Every option can be given as a flag or through its `AURORA_*` variable:
//!
//! ```bash
//! aurora-backend --port 8000 --stage-delay-ms 500
//! AURORA_UNKNOWN_JOB_POLICY=not-found aurora-backend
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// How `GET /jobs/{job_id}/status` answers for an id the store does not hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum UnknownJobPolicy {
    /// Answer with a synthesized completed record so stale ids keep working.
    #[default]
    Fallback,
    /// Answer `404 Not Found`.
    NotFound,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "aurora-backend")]
#[command(about = "Aurora OSI analysis job API")]
#[command(version)]
pub struct Config {
    /// Host/IP to bind.
    #[arg(long, default_value = "0.0.0.0", env = "AURORA_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value = "8000", env = "AURORA_PORT")]
    pub port: u16,

    /// Directory provisioned for job artifacts.
    #[arg(long = "jobs-dir", default_value = "./jobs", env = "AURORA_JOBS_DIR")]
    pub jobs_dir: PathBuf,

    /// Delay between two consecutive stage updates of a job, in milliseconds.
    #[arg(long = "stage-delay-ms", default_value = "2000", env = "AURORA_STAGE_DELAY_MS")]
    pub stage_delay_ms: u64,

    /// Answer for status polls on unknown job ids.
    #[arg(
        long = "unknown-job-policy",
        value_enum,
        default_value_t = UnknownJobPolicy::Fallback,
        env = "AURORA_UNKNOWN_JOB_POLICY"
    )]
    pub unknown_job_policy: UnknownJobPolicy,

    /// Origins allowed by CORS. Empty allows any origin.
    #[arg(
        long = "allowed-origins",
        value_delimiter = ',',
        env = "AURORA_ALLOWED_ORIGINS"
    )]
    pub allowed_origins: Vec<String>,

    /// Maximum accepted JSON body size in bytes.
    #[arg(long = "json-limit", default_value = "10485760", env = "AURORA_JSON_LIMIT")]
    pub json_limit: usize,
}

impl Config {
    pub fn stage_delay(&self) -> Duration {
        Duration::from_millis(self.stage_delay_ms)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_service() {
        let config = Config::try_parse_from(["aurora-backend"]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.stage_delay(), Duration::from_secs(2));
        assert_eq!(config.unknown_job_policy, UnknownJobPolicy::Fallback);
        assert!(config.allowed_origins.is_empty());
        assert_eq!(config.jobs_dir, PathBuf::from("./jobs"));
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "aurora-backend",
            "--port",
            "9000",
            "--stage-delay-ms",
            "50",
            "--unknown-job-policy",
            "not-found",
            "--allowed-origins",
            "http://localhost:5173,http://localhost:3000",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.stage_delay(), Duration::from_millis(50));
        assert_eq!(config.unknown_job_policy, UnknownJobPolicy::NotFound);
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
    }
}
