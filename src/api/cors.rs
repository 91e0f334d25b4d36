//! CORS Middleware
//!
//! Echoes the request origin back only when it is on the fixed allow-list.
//! Unknown origins get no `Access-Control-Allow-Origin` header but the request
//! is still served; enforcement is left to the browser.

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN,
        },
        HeaderValue,
    },
    middleware::Next,
    response::Response,
};

/// Origins allowed to read responses. Matched by exact string equality.
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "https://lunaeboho.com",
    "https://www.lunaeboho.com",
    "http://localhost:9292",
];

pub const ALLOWED_METHODS: &str = "POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Returns the allow-listed origin equal to `origin`, if any.
///
/// No normalization: a trailing slash or different scheme does not match.
pub fn allowed_origin(origin: &str) -> Option<&'static str> {
    ALLOWED_ORIGINS.iter().copied().find(|allowed| *allowed == origin)
}

/// Applies the CORS response headers to every response.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .and_then(allowed_origin);

    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    if let Some(origin) = origin {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(origin));
    }
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origins_match() {
        for origin in ALLOWED_ORIGINS {
            assert_eq!(allowed_origin(origin), Some(origin));
        }
    }

    #[test]
    fn test_near_misses_do_not_match() {
        assert_eq!(allowed_origin("https://lunaeboho.com/"), None);
        assert_eq!(allowed_origin("http://lunaeboho.com"), None);
        assert_eq!(allowed_origin("https://shop.lunaeboho.com"), None);
        assert_eq!(allowed_origin("https://LUNAEBOHO.com"), None);
        assert_eq!(allowed_origin("http://localhost:3000"), None);
        assert_eq!(allowed_origin(""), None);
    }
}
