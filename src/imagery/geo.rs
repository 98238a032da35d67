use crate::imagery::consts::{EARTH_RADIUS, MAX_LATITUDE, MAX_LONGITUDE};
use crate::imagery::models::LatLng;
use std::fmt;

/// Great-circle distance in metres.
pub fn haversine_distance(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS * c
}

/// Axis-aligned box in degrees, `min_lng <= max_lng`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Boxes enclosing the circle of `radius` metres around `center`. A circle crossing the
    /// antimeridian is split into one box on each side of it.
    pub fn covering(center: LatLng, radius: f64) -> Vec<Self> {
        let delta_lat = (radius / EARTH_RADIUS).to_degrees();
        let cos_lat = center.lat.to_radians().cos();
        let delta_lng = if cos_lat.abs() < f64::EPSILON {
            MAX_LONGITUDE
        } else {
            (delta_lat / cos_lat).min(MAX_LONGITUDE)
        };
        let min_lat = (center.lat - delta_lat).max(-MAX_LATITUDE);
        let max_lat = (center.lat + delta_lat).min(MAX_LATITUDE);
        let span = |min_lng, max_lng| Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        };

        let west = center.lng - delta_lng;
        let east = center.lng + delta_lng;
        if delta_lng >= MAX_LONGITUDE {
            vec![span(-MAX_LONGITUDE, MAX_LONGITUDE)]
        } else if west < -MAX_LONGITUDE {
            vec![
                span(-MAX_LONGITUDE, east),
                span(west + 2.0 * MAX_LONGITUDE, MAX_LONGITUDE),
            ]
        } else if east > MAX_LONGITUDE {
            vec![
                span(west, MAX_LONGITUDE),
                span(-MAX_LONGITUDE, east - 2.0 * MAX_LONGITUDE),
            ]
        } else {
            vec![span(west, east)]
        }
    }
}

// Mapillary's `bbox` parameter order.
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lng, self.min_lat, self.max_lng, self.max_lat
        )
    }
}
