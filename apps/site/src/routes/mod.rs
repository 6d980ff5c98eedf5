pub mod health;
pub mod page;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route("/print", get(page::handle_print_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/cv", get(page::handle_get_cv))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::loader::parse_cv;

    const DOC: &str = r#"{
        "profile": {
            "name": "Ada Example",
            "headline": "Developer",
            "username": "ada",
            "address": "London",
            "hide": {"references": {"media": "print"}}
        },
        "categories": [
            {"id": "work", "icon": "briefcase", "title": "Experience", "blocks": [
                {"kind": "position", "id": "acme", "title": "Engineer",
                 "organisation": "Acme", "url": "https://acme.example",
                 "start": "2018-01", "end": "2020-07"}
            ]},
            {"id": "references", "icon": "account", "title": "References", "blocks": [
                {"kind": "skill", "id": "on-request", "title": "Available on request"}
            ]}
        ]
    }"#;

    fn app() -> Router {
        let cv = parse_cv(DOC).unwrap();
        build_router(AppState { cv: Arc::new(cv) })
    }

    async fn fetch(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_screen_page() {
        let (status, body) = fetch("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Jan 2018 \u{2013} Jul 2020"));
        assert!(body.contains("(2 years, 6 months)"));
        assert!(body.contains("id=\"references\""));
    }

    #[tokio::test]
    async fn test_print_route_hides_print_flagged_sections() {
        let (status, body) = fetch("/print").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"work\""));
        assert!(!body.contains("id=\"references\""));
    }

    #[tokio::test]
    async fn test_media_query_param() {
        let (_, body) = fetch("/?media=print").await;
        assert!(!body.contains("id=\"references\""));
    }

    #[tokio::test]
    async fn test_unknown_media_is_rejected() {
        let (status, body) = fetch("/?media=tv").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_cv_json() {
        let (status, body) = fetch("/api/v1/cv").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["profile"]["username"], "ada");
        assert_eq!(json["categories"][0]["blocks"][0]["start"], "2018-01-01");
        assert_eq!(json["profile"]["hide"]["references"]["media"], "print");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, body) = fetch("/blog").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = fetch("/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "cv-site");
    }
}
