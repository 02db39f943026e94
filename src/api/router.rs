use axum::{
    extract::DefaultBodyLimit, http::HeaderName, http::Uri, middleware, routing::get, Router,
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{
    cors_layer, logging_middleware, security_headers_middleware, MAX_BODY_SIZE,
    REQUEST_ID_HEADER,
};
use super::public;
use super::state::AppState;
use super::types::ApiError;
use crate::config::CorsConfig;

/// Create the full router with application state
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        // Liveness, no store access
        .route("/health", get(health::health_check))
        .nest("/api", public::create_public_router())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors_layer(cors))
}

async fn not_found(uri: Uri) -> ApiError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    ApiError::not_found(path)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::message::mock::FailingMessageRepository;
    use crate::domain::project::mock::FailingProjectRepository;
    use crate::domain::project::{NewProject, ProjectRepository};
    use crate::infrastructure::message::{ContactService, InMemoryMessageRepository};
    use crate::infrastructure::project::{InMemoryProjectRepository, ProjectService};

    struct TestApp {
        router: Router,
        projects: Arc<InMemoryProjectRepository>,
        messages: Arc<InMemoryMessageRepository>,
    }

    fn test_app() -> TestApp {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new());
        let state = AppState::new(
            Arc::new(ProjectService::new(projects.clone())),
            Arc::new(ContactService::new(messages.clone())),
        );

        TestApp {
            router: create_router(state, &CorsConfig::default()),
            projects,
            messages,
        }
    }

    fn failing_app() -> Router {
        let state = AppState::new(
            Arc::new(ProjectService::new(Arc::new(FailingProjectRepository::new()))),
            Arc::new(ContactService::new(Arc::new(FailingMessageRepository::new()))),
        );

        create_router(state, &CorsConfig::default())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn contact(name: &str, email: &str, message: &str) -> Value {
        json!({ "name": name, "email": email, "message": message })
    }

    async fn assert_rejected(app: &TestApp, body: Value, expected: &str) {
        let response = app
            .router
            .clone()
            .oneshot(post_json("/api/contact", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Validation error");
        assert_eq!(json["message"], expected);
        assert!(app.messages.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = failing_app().oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_list_projects_empty() {
        let app = test_app();

        let response = app.router.oneshot(get("/api/projects")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_list_projects_newest_first() {
        let app = test_app();
        for title in ["Older", "Newer"] {
            let project = NewProject::new(title, format!("{} project", title))
                .unwrap()
                .with_tech_stack(["Rust", "PostgreSQL"]);
            app.projects.create(project).await.unwrap();
        }

        let response = app.router.oneshot(get("/api/projects")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let projects = json.as_array().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0]["title"], "Newer");
        assert_eq!(projects[0]["techStack"], json!(["Rust", "PostgreSQL"]));
        assert!(projects[0]["link"].is_null());
        assert_eq!(projects[1]["title"], "Older");
    }

    #[tokio::test]
    async fn test_list_projects_store_failure() {
        let response = failing_app().oneshot(get("/api/projects")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to fetch projects");
        assert_eq!(
            json["message"],
            "An error occurred while retrieving projects from the database"
        );
    }

    #[tokio::test]
    async fn test_submit_contact_success() {
        let app = test_app();
        let body = contact(
            "  Ada Lovelace ",
            "ada@example.com",
            "  Hello there, I like your work.  ",
        );

        let response = app
            .router
            .clone()
            .oneshot(post_json("/api/contact", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(
            json["message"],
            "Message received successfully! We will get back to you soon."
        );

        let stored = app.messages.snapshot().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name(), "Ada Lovelace");
        assert_eq!(stored[0].email(), "ada@example.com");
        assert_eq!(stored[0].message(), "Hello there, I like your work.");
    }

    #[tokio::test]
    async fn test_submit_contact_missing_fields() {
        let app = test_app();

        assert_rejected(
            &app,
            json!({ "name": "Ada", "email": "ada@example.com" }),
            "Name, email, and message are required fields",
        )
        .await;
        assert_rejected(
            &app,
            contact("", "ada@example.com", "Hello there friend"),
            "Name, email, and message are required fields",
        )
        .await;
    }

    #[tokio::test]
    async fn test_submit_contact_invalid_email() {
        let app = test_app();

        for email in ["email@@bad", "plainstring", "a b@c.d"] {
            assert_rejected(
                &app,
                contact("Ada", email, "Hello there friend"),
                "Invalid email format",
            )
            .await;
        }
    }

    #[tokio::test]
    async fn test_submit_contact_short_email_accepted() {
        let app = test_app();

        let response = app
            .router
            .clone()
            .oneshot(post_json(
                "/api/contact",
                contact("Ada", "a@b.co", "Hello there friend"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(app.messages.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_contact_name_length() {
        let app = test_app();

        assert_rejected(
            &app,
            contact(" A ", "ada@example.com", "Hello there friend"),
            "Name must be between 2 and 255 characters",
        )
        .await;
        assert_rejected(
            &app,
            contact(&"a".repeat(256), "ada@example.com", "Hello there friend"),
            "Name must be between 2 and 255 characters",
        )
        .await;
    }

    #[tokio::test]
    async fn test_submit_contact_message_length() {
        let app = test_app();

        assert_rejected(
            &app,
            contact("Ada", "ada@example.com", "  too short  "),
            "Message must be between 10 and 5000 characters",
        )
        .await;
        assert_rejected(
            &app,
            contact("Ada", "ada@example.com", &"m".repeat(5001)),
            "Message must be between 10 and 5000 characters",
        )
        .await;
    }

    #[tokio::test]
    async fn test_submit_contact_store_failure() {
        let response = failing_app()
            .oneshot(post_json(
                "/api/contact",
                contact("Ada", "ada@example.com", "Hello there friend"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Server error");
        assert_eq!(
            json["message"],
            "An error occurred while processing your message"
        );
    }

    #[tokio::test]
    async fn test_submit_contact_malformed_body() {
        let app = test_app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
        let json = body_json(response).await;
        assert_eq!(json["error"], "Validation error");
        assert!(app.messages.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_contact_body_too_large() {
        let app = test_app();
        let body = contact("Ada", "ada@example.com", &"m".repeat(MAX_BODY_SIZE));

        let response = app
            .router
            .clone()
            .oneshot(post_json("/api/contact", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Validation error");
        assert!(app.messages.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_route_echoes_path() {
        let app = test_app();

        let response = app
            .router
            .oneshot(get("/api/unknown?page=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "The requested resource does not exist");
        assert_eq!(json["path"], "/api/unknown?page=2");
    }

    #[tokio::test]
    async fn test_wrong_method_is_not_found() {
        let app = test_app();

        let response = app
            .router
            .oneshot(post_json("/api/projects", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["path"], "/api/projects");
    }

    #[tokio::test]
    async fn test_response_headers() {
        let app = test_app();
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "https://portfolio.example")
            .body(Body::empty())
            .unwrap();

        let response = app.router.oneshot(request).await.unwrap();

        let headers = response.headers();
        assert!(headers.contains_key(REQUEST_ID_HEADER));
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://portfolio.example"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }
}
