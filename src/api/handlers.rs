use super::error::ApiError;
use super::AppState;
use crate::models::{Advisory, CropRecord, SoilSample, WeatherObservation, DISCLAIMER};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SoilAnalysisRequest {
    pub soil: SoilSample,
}

#[derive(Debug, Serialize)]
pub struct SoilAnalysisResponse {
    pub recommendations: Vec<String>,
    pub suitable_crop_names: Vec<String>,
    pub disclaimer: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CropAdvisoryRequest {
    pub crop_name: String,
    pub soil: SoilSample,
    #[serde(default)]
    pub weather: Option<WeatherObservation>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CropListQuery {
    pub season: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CropListResponse {
    pub crops: Vec<CropRecord>,
    pub total: usize,
    pub disclaimer: &'static str,
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn soil_analysis(
    State(state): State<AppState>,
    payload: Result<Json<SoilAnalysisRequest>, JsonRejection>,
) -> Result<Json<SoilAnalysisResponse>, ApiError> {
    let Json(request) = payload?;

    let recommendations = state.analyzer.analyze(&request.soil);
    let suitable_crop_names = state
        .analyzer
        .suitable_crops(&request.soil)
        .into_iter()
        .map(|c| c.name)
        .collect();

    Ok(Json(SoilAnalysisResponse {
        recommendations,
        suitable_crop_names,
        disclaimer: DISCLAIMER,
    }))
}

pub async fn crop_advisory(
    State(state): State<AppState>,
    payload: Result<Json<CropAdvisoryRequest>, JsonRejection>,
) -> Result<Json<Advisory>, ApiError> {
    let Json(request) = payload?;

    let crop = state.catalogue.find(&request.crop_name)?;

    tracing::info!(crop = %crop.name, soil_type = %request.soil.soil_type, "crop advisory requested");
    let advisory = state
        .advisor
        .advise(crop, &request.soil, request.weather.as_ref());
    Ok(Json(advisory))
}

pub async fn list_crops(
    State(state): State<AppState>,
    Query(query): Query<CropListQuery>,
) -> Json<CropListResponse> {
    let crops = match query.season.as_deref().map(str::trim) {
        Some(season) if !season.is_empty() => state.catalogue.by_season(season),
        _ => state.catalogue.all(),
    };

    Json(CropListResponse {
        total: crops.len(),
        crops,
        disclaimer: DISCLAIMER,
    })
}
