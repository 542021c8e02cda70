//! Synthetic sensor data for the dashboard views.
//!
//! None of these endpoints touch job state. Each payload is generated from the
//! query coordinates with a seeded RNG (see `rng::geo_rng`), so the same query
//! always yields the same numbers.
//!
//! - `GET /gee/schedule?lat&lon`: upcoming satellite passes.
//! - `GET /twin/voxels?lat&lon`: 4x4x4 voxel model for the digital twin.
//! - `GET /tmal/analysis?lat&lon`: twelve months of surface deformation.
//! - `GET /pcfc/inversion?lat&lon&depth`: physics inversion residuals.
//! - `GET /pcfc/tomography?lat&lon`: vertical density slice.
//! - `GET /seismic/slice?lat&lon&index&axis`: seismic amplitude slice.

use actix_web::web::{self, get, scope};

mod gee;
mod pcfc;
mod rng;
mod seismic;
mod tmal;
mod twin;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(scope("/gee").route("/schedule", get().to(gee::process)))
        .service(scope("/twin").route("/voxels", get().to(twin::process)))
        .service(scope("/tmal").route("/analysis", get().to(tmal::process)))
        .service(
            scope("/pcfc")
                .route("/inversion", get().to(pcfc::process_inversion))
                .route("/tomography", get().to(pcfc::process_tomography)),
        )
        .service(scope("/seismic").route("/slice", get().to(seismic::process)));
}
