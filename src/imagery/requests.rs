use crate::imagery::consts::{DEFAULT_SEARCH_RADIUS, MAX_LATITUDE, MAX_LONGITUDE};
use crate::imagery::errors::LookupError;
use crate::imagery::models::LatLng;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NearestImageQueryParams {
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_radius")]
    pub radius: u32,
}

fn default_radius() -> u32 {
    DEFAULT_SEARCH_RADIUS
}

/// A validated `/nearest-image` query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearestImageQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius: u32,
}

impl NearestImageQuery {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

impl TryFrom<NearestImageQueryParams> for NearestImageQuery {
    type Error = LookupError;

    fn try_from(params: NearestImageQueryParams) -> Result<Self, Self::Error> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&params.lat) {
            return Err(LookupError::InvalidQuery(format!(
                "`lat` must be within [-{MAX_LATITUDE}, {MAX_LATITUDE}], got {}",
                params.lat
            )));
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&params.lng) {
            return Err(LookupError::InvalidQuery(format!(
                "`lng` must be within [-{MAX_LONGITUDE}, {MAX_LONGITUDE}], got {}",
                params.lng
            )));
        }
        if params.radius == 0 {
            return Err(LookupError::InvalidQuery(String::from(
                "`radius` must be a positive integer",
            )));
        }
        Ok(Self {
            lat: params.lat,
            lng: params.lng,
            radius: params.radius,
        })
    }
}
