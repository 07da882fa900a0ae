use lambda_http::{Body, Error, Response, http::StatusCode};
use crate::response::{error_response, json_response};
use crate::store::DocumentStore;
use super::service::load_banners;

/// HTTP Handler: GET /api/banners
pub async fn list_banners(store: &dyn DocumentStore) -> Result<Response<Body>, Error> {
    match load_banners(store).await {
        Ok(banners) if banners.is_empty() => {
            error_response(StatusCode::NOT_FOUND, "No banners found")
        }
        Ok(banners) => json_response(StatusCode::OK, &banners),
        Err(e) => {
            tracing::error!("Error fetching banners: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch banners")
        }
    }
}
