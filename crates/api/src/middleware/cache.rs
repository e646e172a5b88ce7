//! Response caching policy.
//!
//! Applied to every response after the handler runs. The first matching
//! rule decides the `Cache-Control` header:
//!
//! ```text
//! 1. JSON body or path under /api      -> no-store
//! 2. HTML body                         -> no-cache, max-age=0, must-revalidate
//! 3. Fingerprinted asset extension     -> public, max-age=31536000, immutable
//! 4. Anything else                     -> header left untouched
//! ```
//!
//! Rule 1 checks the path as well as the content type so API error
//! responses that are not JSON (extractor rejections, panic bodies) are
//! still never cached.

use axum::extract::Request;
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

const API_PREFIX: &str = "/api";

/// Extensions of build-output assets whose names carry a content hash,
/// safe to cache for a year.
const IMMUTABLE_EXTENSIONS: &[&str] = &[
    "js", "css", "png", "jpg", "jpeg", "gif", "svg", "woff2", "ttf",
];

const NO_STORE: &str = "no-store";
const NO_CACHE: &str = "no-cache, max-age=0, must-revalidate";
const IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Middleware that stamps the `Cache-Control` header on every response.
pub async fn set_cache_control(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let mut response = next.run(req).await;

    let directive = {
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        cache_directive(&path, content_type)
    };

    if let Some(directive) = directive {
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static(directive));
    }

    response
}

/// Pick the `Cache-Control` directive for a response, or `None` to leave
/// the header alone. First matching rule wins.
fn cache_directive(path: &str, content_type: &str) -> Option<&'static str> {
    if content_type.starts_with("application/json") || path.starts_with(API_PREFIX) {
        return Some(NO_STORE);
    }
    if content_type.starts_with("text/html") {
        return Some(NO_CACHE);
    }
    if has_immutable_extension(path) {
        return Some(IMMUTABLE);
    }
    None
}

fn has_immutable_extension(path: &str) -> bool {
    match path.rsplit_once('.') {
        Some((_, ext)) => IMMUTABLE_EXTENSIONS.contains(&ext),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_is_never_stored() {
        assert_eq!(
            cache_directive("/anywhere", "application/json"),
            Some(NO_STORE)
        );
        assert_eq!(
            cache_directive("/api/birds", "application/json; charset=utf-8"),
            Some(NO_STORE)
        );
    }

    #[test]
    fn test_api_path_is_never_stored_regardless_of_body() {
        assert_eq!(cache_directive("/api/birds", "text/plain"), Some(NO_STORE));
        assert_eq!(cache_directive("/api", ""), Some(NO_STORE));
        // An asset-looking path under /api still hits the API rule first.
        assert_eq!(
            cache_directive("/api/logo.png", "image/png"),
            Some(NO_STORE)
        );
    }

    #[test]
    fn test_html_revalidates() {
        assert_eq!(
            cache_directive("/", "text/html; charset=utf-8"),
            Some(NO_CACHE)
        );
        assert_eq!(cache_directive("/birds/7", "text/html"), Some(NO_CACHE));
    }

    #[test]
    fn test_hashed_assets_are_immutable() {
        assert_eq!(
            cache_directive("/assets/index-BHv9evg2.js", "text/javascript"),
            Some(IMMUTABLE)
        );
        assert_eq!(
            cache_directive("/assets/index-C4zX0aBx.css", "text/css"),
            Some(IMMUTABLE)
        );
        assert_eq!(cache_directive("/img/robin.jpeg", "image/jpeg"), Some(IMMUTABLE));
        assert_eq!(
            cache_directive("/fonts/inter.woff2", "font/woff2"),
            Some(IMMUTABLE)
        );
    }

    #[test]
    fn test_unmatched_responses_left_alone() {
        assert_eq!(cache_directive("/", "text/plain; charset=utf-8"), None);
        assert_eq!(cache_directive("/fonts/inter.woff", "font/woff"), None);
        assert_eq!(cache_directive("/robots.txt", "text/plain"), None);
        assert_eq!(cache_directive("/no-extension", ""), None);
    }

    #[test]
    fn test_extension_match_is_exact() {
        assert!(has_immutable_extension("/a/b/c.svg"));
        assert!(!has_immutable_extension("/a/b/csvg"));
        assert!(!has_immutable_extension("/a/b.not-an-ext"));
    }
}
