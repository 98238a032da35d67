use crate::imagery::responses::LookupErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::error::Error as StdError;
use thiserror::Error;
use url::Url;

/// Failures talking to the imagery provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{}", with_causes(.0))]
    Request(#[from] reqwest::Error),
    #[error("provider responded with {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("`{0}` can't be used as a provider base URL")]
    InvalidApiUrl(Url),
}

/// `error: cause: cause ...`, since reqwest only displays the outermost layer.
fn with_causes(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut cause = error.source();
    while let Some(error) = cause {
        let text = error.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = error.source();
    }
    message
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{0}")]
    InvalidQuery(String),
    #[error("No panorama found within radius")]
    NotFound,
    #[error("Mapillary lookup failed: {0}")]
    Provider(#[from] ProviderError),
}

impl LookupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LookupError::NotFound => StatusCode::NOT_FOUND,
            LookupError::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = LookupErrorResponse {
            error: true,
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
