use lambda_http::{Body, Error, Response, http::StatusCode};
use crate::response::{error_response, json_response};
use crate::store::{DocumentStore, StoreError};
use super::service;

/// HTTP Handler: GET /api/images
pub async fn list_catalog(store: &dyn DocumentStore) -> Result<Response<Body>, Error> {
    match service::load_catalog(store).await {
        Ok(items) if items.is_empty() => error_response(StatusCode::NOT_FOUND, "No images found"),
        Ok(items) => json_response(StatusCode::OK, &items),
        Err(e) => {
            tracing::error!("Error fetching images: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch images")
        }
    }
}

/// HTTP Handler: GET /api/search?q=
///
/// An empty `q` counts as missing. No matches is a 200 with `[]`.
pub async fn search_catalog(
    store: &dyn DocumentStore,
    query: Option<&str>,
) -> Result<Response<Body>, Error> {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Query is required");
    };

    match service::search_catalog(store, query).await {
        Ok(items) => json_response(StatusCode::OK, &items),
        Err(e) => {
            tracing::error!("Error fetching search results: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch search results")
        }
    }
}

/// HTTP Handler: GET /api/images/{id}
pub async fn get_catalog_item(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<Response<Body>, Error> {
    match service::load_catalog_item(store, id).await {
        Ok(Some(item)) => json_response(StatusCode::OK, &item),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Image not found"),
        Err(StoreError::MalformedId(id)) => {
            tracing::debug!("Rejecting malformed image id {:?}", id);
            error_response(StatusCode::NOT_FOUND, "Image not found")
        }
        Err(e) => {
            tracing::error!("Error fetching image details: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch image details")
        }
    }
}
