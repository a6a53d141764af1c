//! HTTP API for the location engine.
//!
//! Serves resolution, autocomplete, and nearby ranking to the listings
//! frontend. The gazetteer is loaded once at startup and shared read-only
//! across handlers.

mod handlers;
mod state;

use axum::routing::get;
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::gazetteer::Gazetteer;

pub fn build_router(gazetteer: Gazetteer) -> Router {
    let state = Arc::new(AppState { gazetteer });

    Router::new()
        .route("/api/resolve", get(handlers::resolve))
        .route("/api/suggest", get(handlers::suggest))
        .route("/api/nearby", get(handlers::nearby))
        .route("/api/locations", get(handlers::locations))
        .route("/api/map-config", get(handlers::map_config))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, gazetteer: Gazetteer) {
    let app = build_router(gazetteer);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  IntegriHomes location API listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_resolve_exact() {
        let app = build_router(Gazetteer::builtin());
        let (status, body) = get_json(app, "/api/resolve?query=accra").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Accra");
        assert_eq!(body["match"], "exact");
        assert_eq!(body["zoom"], 12);
    }

    #[tokio::test]
    async fn test_resolve_missing_query_returns_default() {
        let app = build_router(Gazetteer::builtin());
        let (status, body) = get_json(app, "/api/resolve").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ghana");
        assert_eq!(body["match"], "default");
        assert_eq!(body["zoom"], 7);
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let app = build_router(Gazetteer::builtin());
        let (status, body) = get_json(app, "/api/resolve?query=atlantis-xyz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn test_suggest() {
        let app = build_router(Gazetteer::builtin());
        let (status, body) = get_json(app, "/api/suggest?input=tem&limit=3").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"Tema"));
        assert!(names.len() <= 3);
    }

    #[tokio::test]
    async fn test_suggest_short_input_empty() {
        let app = build_router(Gazetteer::builtin());
        let (status, body) = get_json(app, "/api/suggest?input=t").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_nearby() {
        let app = build_router(Gazetteer::builtin());
        let (status, body) = get_json(app, "/api/nearby?lat=5.6037&lng=-0.187&limit=2").await;
        assert_eq!(status, StatusCode::OK);
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["name"], "Accra");
        assert_eq!(results[0]["distance_km"], 0.0);
    }

    #[tokio::test]
    async fn test_nearby_missing_params() {
        let app = build_router(Gazetteer::builtin());
        let (status, body) = get_json(app, "/api/nearby?lat=5.6").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_nearby_out_of_range() {
        let app = build_router(Gazetteer::builtin());
        let (status, _body) = get_json(app, "/api/nearby?lat=95.0&lng=0.0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_locations_list() {
        let app = build_router(Gazetteer::builtin());
        let (status, body) = get_json(app, "/api/locations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 19);
    }

    #[tokio::test]
    async fn test_map_config() {
        let app = build_router(Gazetteer::builtin());
        let (status, body) = get_json(app, "/api/map-config").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["initial_view"]["zoom"], 7);
        assert_eq!(body["initial_view"]["latitude"], 7.9465);
        assert_eq!(body["initial_view"]["longitude"], -1.0232);
    }
}
