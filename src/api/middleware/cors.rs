//! Cross-origin policy

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Build the CORS layer from configuration
///
/// With no configured origins the request origin is mirrored back, so any
/// site may call the API with credentials.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(parse_origins(&config.allowed_origins))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60))
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn restricted() -> CorsConfig {
        CorsConfig {
            allowed_origins: vec!["https://me.dev".to_string(), " https://www.me.dev".to_string()],
        }
    }

    async fn send(config: &CorsConfig, method: Method, origin: &str) -> Response<Body> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(cors_layer(config));

        let mut request = Request::builder()
            .method(method.clone())
            .uri("/")
            .header(header::ORIGIN, origin);
        if method == Method::OPTIONS {
            request = request.header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET");
        }

        app.oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_listed_origin_allowed() {
        let response = send(&restricted(), Method::GET, "https://www.me.dev").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://www.me.dev"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_allow_origin() {
        let response = send(&restricted(), Method::GET, "https://evil.example").await;

        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_unlisted_origin_preflight() {
        let response = send(&restricted(), Method::OPTIONS, "https://evil.example").await;

        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_any_origin_mirrors_request() {
        let response = send(&CorsConfig::default(), Method::OPTIONS, "https://anyone.dev").await;

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://anyone.dev"
        );
    }

    #[test]
    fn test_parse_origins_skips_invalid() {
        let origins = vec![
            "https://me.dev".to_string(),
            "bad\norigin".to_string(),
            "  ".to_string(),
        ];

        let parsed = parse_origins(&origins);
        assert_eq!(parsed, vec![HeaderValue::from_static("https://me.dev")]);
    }
}
