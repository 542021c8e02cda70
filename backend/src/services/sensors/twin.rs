use super::rng::geo_rng;
use actix_web::{web, HttpResponse, Responder};
use common::model::sensors::{Voxel, VoxelGrid};
use common::requests::CoordinatesQuery;
use rand::Rng;

const GRID: u8 = 4;
const LITHOLOGY: [&str; GRID as usize] = ["Sediment", "Cap Rock", "Reservoir", "Basement"];
const RESERVOIR_LAYER: u8 = 2;

/// The two central columns of the reservoir layer form the drilling sweet spot.
fn is_target(x: u8, y: u8, z: u8) -> bool {
    (1..=2).contains(&x) && (1..=2).contains(&y) && z == RESERVOIR_LAYER
}

pub(crate) fn digital_twin_voxels(lat: f64, lon: f64) -> VoxelGrid {
    let mut rng = geo_rng(lat, lon, "twin");
    let mut voxels = Vec::with_capacity(usize::from(GRID).pow(3));

    for z in 0..GRID {
        for y in 0..GRID {
            for x in 0..GRID {
                let mineral_prob = if is_target(x, y, z) {
                    rng.gen_range(0.7..0.95)
                } else {
                    rng.gen_range(0.05..0.3)
                };
                voxels.push(Voxel {
                    id: format!("v-{x}-{y}-{z}"),
                    x,
                    y,
                    z,
                    lithology: LITHOLOGY[usize::from(z)].to_string(),
                    density: 2.0 + f64::from(z) * 0.2 + rng.gen_range(-0.1..0.1),
                    mineral_prob,
                    uncertainty: rng.gen_range(0.05..0.2),
                });
            }
        }
    }

    VoxelGrid { voxels }
}

pub(crate) async fn process(query: web::Query<CoordinatesQuery>) -> impl Responder {
    HttpResponse::Ok().json(digital_twin_voxels(query.lat, query.lon))
}
