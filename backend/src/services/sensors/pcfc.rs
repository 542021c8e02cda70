use super::rng::geo_rng;
use actix_web::{web, HttpResponse, Responder};
use common::model::sensors::{PhysicsInversion, Residuals, TomographySlice};
use common::requests::{CoordinatesQuery, InversionQuery};
use rand::Rng;

const STRUCTURE: &str = "Anticline (Inferred)";
const SLICE_ROWS: usize = 50;
const SLICE_COLS: usize = 50;

pub(crate) fn physics_inversion(lat: f64, lon: f64, depth: f64) -> PhysicsInversion {
    let mut rng = geo_rng(lat, lon, &format!("pcfc-inversion-{depth:.1}"));
    PhysicsInversion {
        structure: STRUCTURE.to_string(),
        residuals: Residuals {
            mass_conservation: rng.gen_range(0.001..0.005),
            momentum_balance: Some(rng.gen_range(0.002..0.04)),
        },
    }
}

/// Density without noise at row `y`, column `x` of the synthetic anticline.
fn layer_density(x: usize, y: usize) -> f64 {
    let center_x = (SLICE_COLS / 2) as f64;
    let crest = (SLICE_ROWS / 2) as f64 + 10.0 * ((x as f64 - center_x) * 0.15).cos();
    let depth = y as f64;
    if depth > crest {
        2.7
    } else if depth > crest - 5.0 {
        2.3
    } else if y < 5 {
        2.1
    } else {
        2.4
    }
}

pub(crate) fn tomography_slice(lat: f64, lon: f64) -> TomographySlice {
    let mut rng = geo_rng(lat, lon, "pcfc-tomography");
    let slice: Vec<Vec<f64>> = (0..SLICE_ROWS)
        .map(|y| {
            (0..SLICE_COLS)
                .map(|x| layer_density(x, y) + rng.gen_range(-0.05..0.05))
                .collect::<Vec<f64>>()
        })
        .collect();

    TomographySlice {
        slice,
        structure: STRUCTURE.to_string(),
        residuals: Residuals {
            mass_conservation: 0.0015,
            momentum_balance: None,
        },
    }
}

pub(crate) async fn process_inversion(query: web::Query<InversionQuery>) -> impl Responder {
    HttpResponse::Ok().json(physics_inversion(query.lat, query.lon, query.depth))
}

pub(crate) async fn process_tomography(query: web::Query<CoordinatesQuery>) -> impl Responder {
    HttpResponse::Ok().json(tomography_slice(query.lat, query.lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inversion_residuals_stay_in_range() {
        let inversion = physics_inversion(-23.5, -68.0, 400.0);
        assert_eq!(inversion.structure, STRUCTURE);
        assert!((0.001..0.005).contains(&inversion.residuals.mass_conservation));
        let momentum = inversion.residuals.momentum_balance.unwrap();
        assert!((0.002..0.04).contains(&momentum));
    }

    #[test]
    fn tomography_is_a_noisy_anticline() {
        let tomography = tomography_slice(-23.5, -68.0);
        assert_eq!(tomography.slice.len(), SLICE_ROWS);
        for (y, row) in tomography.slice.iter().enumerate() {
            assert_eq!(row.len(), SLICE_COLS);
            for (x, value) in row.iter().enumerate() {
                assert!((value - layer_density(x, y)).abs() <= 0.05 + 1e-9);
            }
        }
        // The crest sits highest at the centre column.
        assert_eq!(layer_density(25, 36), 2.7);
        assert_eq!(layer_density(25, 34), 2.3);
        assert_eq!(layer_density(25, 2), 2.1);
        assert_eq!(layer_density(25, 10), 2.4);
    }

    #[test]
    fn tomography_omits_momentum_residual() {
        let value = serde_json::to_value(tomography_slice(0.0, 0.0)).unwrap();
        assert_eq!(value["residuals"], serde_json::json!({"mass_conservation": 0.0015}));
    }
}
