use crate::imagery::models::Panorama;
use crate::imagery::requests::NearestImageQuery;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestImageResponse {
    pub image_id: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub distance: Option<f64>,
    pub source: ImagerySource,
}

impl NearestImageResponse {
    pub fn stub(query: &NearestImageQuery) -> Self {
        Self {
            image_id: None,
            lat: query.lat,
            lng: query.lng,
            distance: None,
            source: ImagerySource::Stub,
        }
    }

    /// Echoes the queried coordinate rather than the panorama's own position.
    pub fn found(query: &NearestImageQuery, panorama: Panorama) -> Self {
        Self {
            image_id: Some(panorama.id),
            lat: query.lat,
            lng: query.lng,
            distance: panorama.distance,
            source: ImagerySource::Mapillary,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagerySource {
    Stub,
    Mapillary,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupErrorResponse {
    pub error: bool,
    pub detail: String,
}
