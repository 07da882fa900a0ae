use lambda_http::{
    http::{
        header::{
            HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_CREDENTIALS,
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY,
        },
        StatusCode,
    },
    Body, Error, Response,
};

/// Origins allowed to call the API from a browser.
pub const ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:3000", // Development
    "https://razi.iqsoft.in", // Production
];
pub const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE";
pub const ALLOWED_HEADERS: &str = "Content-Type,Authorization";

/// Exact-match allow-list for the `Origin` request header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginGate {
    allowed: Vec<String>,
}

impl OriginGate {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// Requests without an origin (same-origin, curl, servers) always pass.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allowed.iter().any(|allowed| allowed == origin),
        }
    }
}

impl Default for OriginGate {
    fn default() -> Self {
        Self::new(ALLOWED_ORIGINS)
    }
}

/// The `Origin` header, if any. A non-UTF-8 value maps to `""`, which never matches.
pub fn request_origin(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(ORIGIN)
        .map(|v| v.to_str().unwrap_or_default())
}

pub fn with_cors_headers(mut resp: Response<Body>, request_origin: Option<&str>) -> Response<Body> {
    let headers = resp.headers_mut();
    if let Some(origin) = request_origin.and_then(|o| HeaderValue::from_str(o).ok()) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }
    headers.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
    headers.append(VARY, HeaderValue::from_static("Origin"));

    resp
}

/// Reply for a disallowed origin: bare 403, no CORS headers, no body.
pub fn rejected() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::FORBIDDEN)
        .body(Body::Empty)
        .map_err(Box::new)?)
}

pub fn preflight(request_origin: Option<&str>) -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .body(Body::Empty)
        .map_err(Box::new)?;
    Ok(with_cors_headers(resp, request_origin))
}
