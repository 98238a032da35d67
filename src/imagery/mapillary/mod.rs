use crate::imagery::errors::ProviderError;
use crate::imagery::geo::{self, BoundingBox};
use crate::imagery::mapillary::models::{ImageRecord, ImagesResponse};
use crate::imagery::models::{LatLng, NearestImage, Panorama};
use crate::imagery::provider::ImageryProvider;
use crate::imagery::requests::NearestImageQuery;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub mod models;

#[derive(Debug)]
pub struct MapillaryClient {
    http_client: Client,
    api_url: Url,
    token: String,
    search_limit: u32,
}

impl MapillaryClient {
    const IMAGES_PATH: &str = "images";
    const IMAGE_FIELDS: &str = "id,geometry,computed_geometry";
    const MAX_ERROR_BODY_CHARS: usize = 200;
    const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    pub fn new(
        api_url: Url,
        token: impl Into<String>,
        timeout: Duration,
        search_limit: u32,
    ) -> Result<Self, ProviderError> {
        if api_url.cannot_be_a_base() {
            return Err(ProviderError::InvalidApiUrl(api_url));
        }
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(Self::USER_AGENT)
            .build()?;
        Ok(Self {
            http_client,
            api_url,
            token: token.into(),
            search_limit,
        })
    }

    fn images_url(&self) -> Url {
        let mut url = self.api_url.clone();
        // `new` rejects URLs that can't carry a path.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(Self::IMAGES_PATH);
        }
        url
    }

    async fn search_images(&self, bbox: BoundingBox) -> Result<Vec<ImageRecord>, ProviderError> {
        let response = self
            .http_client
            .get(self.images_url())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[
                ("fields", Self::IMAGE_FIELDS.to_string()),
                ("is_pano", String::from("true")),
                ("limit", self.search_limit.to_string()),
                ("bbox", bbox.to_string()),
            ])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::UnexpectedStatus {
                status,
                body: body.chars().take(Self::MAX_ERROR_BODY_CHARS).collect(),
            });
        }
        let images: ImagesResponse = response.json().await?;
        Ok(images.data)
    }
}

#[async_trait]
impl ImageryProvider for MapillaryClient {
    async fn nearest_image(
        &self,
        query: &NearestImageQuery,
    ) -> Result<NearestImage, ProviderError> {
        let origin = query.position();
        let mut candidates = Vec::new();
        for bbox in BoundingBox::covering(origin, f64::from(query.radius)) {
            candidates.extend(self.search_images(bbox).await?);
        }
        tracing::debug!(
            candidates = candidates.len(),
            radius = query.radius,
            "Fetched Mapillary candidates."
        );
        Ok(pick_nearest(origin, query.radius, candidates).into())
    }
}

/// Closest candidate within `radius` metres. Candidates with no known position can't be
/// placed inside the radius and are skipped.
pub fn pick_nearest(origin: LatLng, radius: u32, candidates: Vec<ImageRecord>) -> Option<Panorama> {
    let radius = f64::from(radius);
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let distance = geo::haversine_distance(origin, candidate.position()?);
            (distance <= radius).then_some((distance, candidate.id))
        })
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(distance, id)| Panorama {
            id,
            distance: Some(distance),
        })
}
