//! Plain HTTP/1.1 listener for running outside Lambda.

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use catalog_shared::AppState;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use lambda_http::{Body, Error, Request, RequestExt};
use tokio::net::TcpListener;

use crate::http_handler::function_handler;

/// Back-off after an accept error that is not tied to a single connection
/// (for example running out of file descriptors).
const ACCEPT_BACKOFF: Duration = Duration::from_secs(1);

pub(crate) async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<(), Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🚀 Server running on http://localhost:{}", addr.port());
    serve_listener(listener, state).await;
    Ok(())
}

/// Accept connections forever. Accept errors are logged, never fatal.
async fn serve_listener(listener: TcpListener, state: Arc<AppState>) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) if is_connection_error(&e) => {
                tracing::debug!("Dropped incoming connection: {}", e);
                continue;
            }
            Err(e) => {
                tracing::error!("Accept failed: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        let state = state.clone();

        tokio::spawn(async move {
            let service = service_fn(move |req| handle(req, state.clone()));
            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                tracing::debug!("Connection from {} closed with error: {}", peer, e);
            }
        });
    }
}

async fn handle(
    req: hyper::Request<Incoming>,
    state: Arc<AppState>,
) -> Result<hyper::Response<Full<Bytes>>, Error> {
    let (parts, body) = req.into_parts();
    let bytes = body.collect().await?.to_bytes();
    let body = if bytes.is_empty() {
        Body::Empty
    } else {
        Body::Binary(bytes.to_vec())
    };
    let query = query_params(parts.uri.query());
    let event = Request::from_parts(parts, body).with_query_string_parameters(query);

    let (parts, body) = function_handler(event, state).await?.into_parts();
    let bytes = match body {
        Body::Empty => Bytes::new(),
        Body::Text(text) => Bytes::from(text),
        Body::Binary(data) => Bytes::from(data),
    };
    Ok(hyper::Response::from_parts(parts, Full::new(bytes)))
}

/// Errors scoped to the one connection being accepted.
fn is_connection_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
    )
}

/// Decode a raw query string the way API Gateway hands it to the handler.
fn query_params(query: Option<&str>) -> HashMap<String, Vec<String>> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
        params.entry(key.into_owned()).or_default().push(value.into_owned());
    }
    params
}
