use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A street-level capture point as reported by the provider.
#[derive(Clone, Debug, PartialEq)]
pub struct Panorama {
    pub id: String,
    /// Metres from the queried coordinate, when the provider knows the capture position.
    pub distance: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NearestImage {
    Found(Panorama),
    NotFound,
}

impl From<Option<Panorama>> for NearestImage {
    fn from(panorama: Option<Panorama>) -> Self {
        match panorama {
            Some(panorama) => NearestImage::Found(panorama),
            None => NearestImage::NotFound,
        }
    }
}
