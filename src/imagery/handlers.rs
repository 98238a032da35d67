use crate::app_context::AppContext;
use crate::imagery::errors::LookupError;
use crate::imagery::models::NearestImage;
use crate::imagery::requests::NearestImageQuery;
use crate::imagery::responses::NearestImageResponse;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn nearest_image(
    State(app_context): State<AppContext>,
    query: NearestImageQuery,
) -> Result<Json<NearestImageResponse>, LookupError> {
    let Some(provider) = app_context.imagery.as_ref() else {
        return Ok(Json(NearestImageResponse::stub(&query)));
    };

    match provider.nearest_image(&query).await {
        Ok(NearestImage::Found(panorama)) => {
            tracing::info!(
                task = "nearest_image",
                image_id = %panorama.id,
                distance = ?panorama.distance,
                "Found a panorama."
            );
            Ok(Json(NearestImageResponse::found(&query, panorama)))
        }
        Ok(NearestImage::NotFound) => {
            tracing::info!(
                task = "nearest_image",
                lat = query.lat,
                lng = query.lng,
                radius = query.radius,
                "No panorama within radius."
            );
            Err(LookupError::NotFound)
        }
        Err(error) => {
            tracing::warn!(task = "nearest_image", %error, "Imagery provider lookup failed.");
            Err(LookupError::Provider(error))
        }
    }
}
