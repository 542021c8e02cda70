//! The job lifecycle subsystem: the stage plan, the shared record store, the
//! per-job background runner and the service that ties them together.

pub mod runner;
pub mod service;
pub mod stages;
pub mod store;

pub use runner::FixedDelay;
pub use service::JobService;
pub use store::JobStore;
