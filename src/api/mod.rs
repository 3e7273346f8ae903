pub mod error;
pub mod handlers;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::logic::{CropAdvisor, CropCatalogue, SoilAnalyzer};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

pub use error::ApiError;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalogue: Arc<CropCatalogue>,
    pub analyzer: SoilAnalyzer,
    pub advisor: Arc<CropAdvisor>,
}

impl AppState {
    pub fn new() -> Self {
        let catalogue = Arc::new(CropCatalogue::new());
        Self {
            analyzer: SoilAnalyzer::new(catalogue.clone()),
            catalogue,
            advisor: Arc::new(CropAdvisor::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/soil-analysis", post(handlers::soil_analysis))
        .route("/api/crop-advisory", post(handlers::crop_advisory))
        .route("/api/crops", get(handlers::list_crops))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let app = create_router(AppState::new(), config.body_limit);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "FarmBrain API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("FarmBrain API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(), 64 * 1024)
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        send_to(app(), request).await
    }

    async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn darbhanga_soil() -> Value {
        json!({
            "ph": 6.3,
            "nitrogen_ppm": 125,
            "phosphorus_ppm": 11,
            "potassium_ppm": 148,
            "organic_carbon_pct": 0.72,
            "soil_type": "alluvial"
        })
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn soil_analysis_returns_recommendations_and_crops() {
        let (status, body) = send(post_json(
            "/api/soil-analysis",
            json!({ "soil": darbhanga_soil() }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);

        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 6);
        assert_eq!(recs[5], crate::models::DISCLAIMER);

        let names: Vec<&str> = body["suitable_crop_names"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(names.first(), Some(&"Rice"));
        assert!(names.contains(&"Wheat"));
        assert_eq!(body["disclaimer"], crate::models::DISCLAIMER);
    }

    #[tokio::test]
    async fn crop_advisory_full_payload() {
        let (status, body) = send(post_json(
            "/api/crop-advisory",
            json!({
                "crop_name": "rice",
                "soil": darbhanga_soil(),
                "weather": {
                    "location": "Darbhanga, Bihar",
                    "temperature_c": 34,
                    "humidity_pct": 92,
                    "rainfall_mm": 240
                }
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["crop"]["name"], "Rice");
        assert_eq!(body["crop"]["season"], "kharif");
        assert_eq!(body["risk_alerts"].as_array().unwrap().len(), 2);
        assert!(body["fertilizer_plan"]["tillering"].is_string());
        assert_eq!(body["irrigation_schedule"].as_object().unwrap().len(), 4);
        assert_eq!(body["disclaimer"], crate::models::DISCLAIMER);
    }

    #[tokio::test]
    async fn crop_advisory_without_weather() {
        let (status, body) = send(post_json(
            "/api/crop-advisory",
            json!({ "crop_name": "Maize", "soil": darbhanga_soil() }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["risk_alerts"].as_array().unwrap().is_empty());
        let stages: Vec<&String> = body["fertilizer_plan"].as_object().unwrap().keys().collect();
        assert_eq!(stages.len(), 3);
        assert!(body["fertilizer_plan"]["vegetative"].is_string());
    }

    #[tokio::test]
    async fn unknown_crop_is_not_found() {
        let (status, body) = send(post_json(
            "/api/crop-advisory",
            json!({ "crop_name": "avocado", "soil": darbhanga_soil() }),
        ))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Crop 'avocado' not found in database.");
        assert!(body.get("recommendations").is_none());
    }

    #[tokio::test]
    async fn invalid_soil_is_unprocessable() {
        let mut soil = darbhanga_soil();
        soil["ph"] = json!(14.5);
        let (status, body) = send(post_json("/api/soil-analysis", json!({ "soil": soil }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("invalid ph"));
    }

    #[tokio::test]
    async fn invalid_weather_is_unprocessable() {
        let (status, body) = send(post_json(
            "/api/crop-advisory",
            json!({
                "crop_name": "rice",
                "soil": darbhanga_soil(),
                "weather": {
                    "location": "X",
                    "temperature_c": 30,
                    "humidity_pct": 120,
                    "rainfall_mm": 0
                }
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("humidity_pct"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/soil-analysis")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn missing_content_type_is_unsupported_media_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/soil-analysis")
            .body(Body::from(json!({ "soil": darbhanga_soil() }).to_string()))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let limit = 256;
        let padded = format!("{}{}", " ".repeat(limit * 2), json!({ "soil": darbhanga_soil() }));
        let request = Request::builder()
            .method("POST")
            .uri("/api/soil-analysis")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(padded))
            .unwrap();
        let (status, _) = send_to(create_router(AppState::new(), limit), request).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn list_crops_all_and_by_season() {
        let (status, body) = send(get("/api/crops")).await;
        assert_eq!(status, StatusCode::OK);
        let total = body["total"].as_u64().unwrap();
        assert_eq!(total as usize, CropCatalogue::new().len());
        assert_eq!(body["crops"].as_array().unwrap().len() as u64, total);

        let (status, body) = send(get("/api/crops?season=RABI")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 18);
        assert!(body["crops"]
            .as_array()
            .unwrap()
            .iter()
            .all(|c| c["season"] == "rabi"));

        let (_, body) = send(get("/api/crops?season=winter")).await;
        assert_eq!(body["total"], 0);
    }
}
