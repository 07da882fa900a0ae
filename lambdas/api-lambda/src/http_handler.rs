use catalog_atoms::{banners, details, response::not_found};
use catalog_shared::{cors, AppState};
use lambda_http::{http::Method, Body, Error, Request, RequestExt, Response};
use std::sync::Arc;

fn finalize_response(
    resp: Result<Response<Body>, Error>,
    request_origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    resp.map(|r| cors::with_cors_headers(r, request_origin))
}

/// Main handler - gates on origin, then routes to the catalog endpoints
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let request_origin = cors::request_origin(event.headers());
    tracing::info!("Method: {} Path: {}", method, path);

    if !state.origin_gate.is_allowed(request_origin) {
        tracing::warn!("🚫 Origin not allowed: {:?}", request_origin);
        return cors::rejected();
    }

    // Handle CORS preflight
    if method == Method::OPTIONS {
        return cors::preflight(request_origin);
    }

    let store = state.store.as_ref();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    // Route names match in any case; the id keeps its spelling.
    let lowered: Vec<String> = segments.iter().map(|s| s.to_ascii_lowercase()).collect();
    let route: Vec<&str> = lowered.iter().map(String::as_str).collect();

    let resp = match (method, route.as_slice()) {
        // GET /api/images - whole catalog
        (&Method::GET, ["api", "images"]) => details::list_catalog(store).await,
        // GET /api/search?q= - title search
        (&Method::GET, ["api", "search"]) => {
            let query = event
                .query_string_parameters_ref()
                .and_then(|params| params.first("q"));
            details::search_catalog(store, query).await
        }
        // GET /api/images/{id} - single item
        (&Method::GET, ["api", "images", _]) => {
            details::get_catalog_item(store, segments[2]).await
        }
        // GET /api/banners
        (&Method::GET, ["api", "banners"]) => banners::list_banners(store).await,
        _ => {
            tracing::warn!("⚠️ No route matched - Method: {} Path: {}", method, path);
            not_found()
        }
    };

    finalize_response(resp, request_origin)
}
