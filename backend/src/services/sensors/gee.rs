use actix_web::{web, HttpResponse, Responder};
use common::model::sensors::{SatellitePass, SatelliteSchedule};
use common::requests::CoordinatesQuery;

const PASSES: [(&str, &str, &str, &str); 3] = [
    ("Sentinel-1A", "SAR (C-Band)", "2h 15m", "Available"),
    ("Landsat 9", "Multispectral", "14h 30m", "Scheduled"),
    ("WorldView-3", "Hyperspectral", "1d 4h", "Premium Only"),
];

/// Upcoming acquisitions. The constellation plan does not vary with location yet.
pub(crate) fn satellite_schedule(_lat: f64, _lon: f64) -> SatelliteSchedule {
    SatelliteSchedule {
        schedule: PASSES
            .iter()
            .map(|(satellite, sensor, eta, tasking)| SatellitePass {
                satellite: satellite.to_string(),
                sensor_type: sensor.to_string(),
                time_to_acquisition: eta.to_string(),
                tasking_status: tasking.to_string(),
            })
            .collect(),
    }
}

pub(crate) async fn process(query: web::Query<CoordinatesQuery>) -> impl Responder {
    HttpResponse::Ok().json(satellite_schedule(query.lat, query.lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_three_passes() {
        let schedule = satellite_schedule(0.0, 0.0);
        assert_eq!(schedule.schedule.len(), 3);
        assert_eq!(schedule.schedule[0].satellite, "Sentinel-1A");
        assert_eq!(schedule.schedule[2].tasking_status, "Premium Only");
    }
}
