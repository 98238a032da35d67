use crate::app_context::AppContext;
use crate::{health, http, imagery};
use axum::{routing::get, Router};
use tower::ServiceBuilder;

pub fn new(app_context: AppContext) -> Router {
    let cors_policy = http::cors_layer();
    tracing::info!("Initialized HTTP configuration.");

    Router::new()
        .route("/health", get(health::handlers::healthcheck))
        .route("/nearest-image", get(imagery::handlers::nearest_image))
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(http::middleware::tracing))
                .layer(cors_policy),
        )
}
