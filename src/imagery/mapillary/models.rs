use crate::imagery::models::LatLng;
use serde::{Deserialize, Deserializer};

/// Body of a Graph API `GET /images` search.
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub data: Vec<ImageRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ImageRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub geometry: Option<PointGeometry>,
    pub computed_geometry: Option<PointGeometry>,
}

impl ImageRecord {
    /// The corrected position when Mapillary has one, the raw GPS fix otherwise.
    pub fn position(&self) -> Option<LatLng> {
        self.computed_geometry
            .as_ref()
            .or(self.geometry.as_ref())
            .map(PointGeometry::lat_lng)
    }
}

/// GeoJSON point, `[lng, lat]`.
#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn lat_lng(&self) -> LatLng {
        let [lng, lat] = self.coordinates;
        LatLng { lat, lng }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
