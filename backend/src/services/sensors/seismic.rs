use super::rng::geo_rng;
use actix_web::{web, HttpResponse, Responder};
use common::model::sensors::{Horizon, SeismicSlice};
use common::requests::{SeismicAxis, SeismicSliceQuery};
use rand::Rng;

const SIZE: usize = 100;

fn wave(x: usize, y: usize) -> f64 {
    let (x, y) = (x as f64, y as f64);
    (y * 0.2 + x * 0.05).sin() * (x * 0.1).cos()
}

fn top_reservoir() -> Horizon {
    Horizon {
        depth: (0..SIZE).map(|i| 30.0 + (i as f64 * 0.1).sin() * 5.0).collect(),
        label: "Top Reservoir".to_string(),
        confidence: 0.9,
    }
}

pub(crate) fn seismic_slice(lat: f64, lon: f64, index: i64, axis: SeismicAxis) -> SeismicSlice {
    let mut rng = geo_rng(lat, lon, &format!("seismic-{axis:?}-{index}"));
    let mut data = Vec::with_capacity(SIZE);
    let mut uncertainty = Vec::with_capacity(SIZE);

    for y in 0..SIZE {
        let mut row = Vec::with_capacity(SIZE);
        let mut u_row = Vec::with_capacity(SIZE);
        for x in 0..SIZE {
            let amplitude = wave(x, y) + rng.gen_range(-0.2..0.2);
            row.push(amplitude.clamp(-1.0, 1.0));
            u_row.push(rng.gen_range(0.0..0.2));
        }
        data.push(row);
        uncertainty.push(u_row);
    }

    SeismicSlice {
        width: SIZE,
        height: SIZE,
        data,
        uncertainty,
        horizons: vec![top_reservoir()],
        faults: Vec::new(),
        axis,
        index,
    }
}

pub(crate) async fn process(query: web::Query<SeismicSliceQuery>) -> impl Responder {
    HttpResponse::Ok().json(seismic_slice(query.lat, query.lon, query.index, query.axis))
}
