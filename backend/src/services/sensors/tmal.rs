use super::rng::geo_rng;
use actix_web::{web, HttpResponse, Responder};
use common::model::sensors::{DeformationPoint, TemporalAnalysis};
use common::requests::CoordinatesQuery;
use rand::Rng;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Trend label and yearly velocity (mm/yr), picked from the truncated coordinate sum.
fn deformation_trend(lat: f64, lon: f64) -> (&'static str, f64) {
    match ((lat + lon).trunc() as i64).rem_euclid(3) {
        0 => ("Subsidence", -12.5),
        1 => ("Uplift", 4.2),
        _ => ("Stable", 0.0),
    }
}

pub(crate) fn temporal_analysis(lat: f64, lon: f64) -> TemporalAnalysis {
    let mut rng = geo_rng(lat, lon, "tmal");
    let (trend, velocity) = deformation_trend(lat, lon);

    let mut deformation = 0.0;
    let data = MONTHS
        .iter()
        .map(|month| {
            deformation += velocity / 12.0 + rng.gen_range(-1.0..1.0);
            DeformationPoint {
                date: month.to_string(),
                deformation,
                thermal_inertia: 800.0 + rng.gen_range(-50.0..50.0),
                coherence: 0.95 - deformation.abs() * 0.01,
            }
        })
        .collect();

    TemporalAnalysis {
        trend: trend.to_string(),
        velocity_mm_yr: velocity,
        depth_resolution: 75,
        data,
    }
}

pub(crate) async fn process(query: web::Query<CoordinatesQuery>) -> impl Responder {
    HttpResponse::Ok().json(temporal_analysis(query.lat, query.lon))
}
