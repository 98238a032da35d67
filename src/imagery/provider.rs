use crate::imagery::errors::ProviderError;
use crate::imagery::models::NearestImage;
use crate::imagery::requests::NearestImageQuery;
use async_trait::async_trait;

#[async_trait]
pub trait ImageryProvider: Send + Sync {
    /// Looks up the panorama closest to the queried point, within `query.radius` metres.
    async fn nearest_image(&self, query: &NearestImageQuery)
        -> Result<NearestImage, ProviderError>;
}
