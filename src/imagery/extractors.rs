use crate::imagery::errors::LookupError;
use crate::imagery::requests::{NearestImageQuery, NearestImageQueryParams};
use async_trait::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

#[async_trait]
impl<S> FromRequestParts<S> for NearestImageQuery
where
    S: Send + Sync,
{
    type Rejection = LookupError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<NearestImageQueryParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| LookupError::InvalidQuery(rejection.body_text()))?;
        NearestImageQuery::try_from(params)
    }
}
