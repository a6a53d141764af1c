use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::gazetteer::{format_coords, Location, MatchKind, NearbyLocation, DEFAULT_LIMIT};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET /api/resolve ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResolveQuery {
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
    pub aliases: Vec<String>,
    pub formatted_coords: String,
    #[serde(rename = "match")]
    pub match_kind: MatchKind,
}

pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let start = Instant::now();

    // An absent or empty query is valid and yields the default entry.
    let query = params.query.as_deref().unwrap_or("");

    let resolved = state
        .gazetteer
        .resolve(query)
        .map_err(|e| api_error(StatusCode::NOT_FOUND, format!("{}", e)))?;

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /api/resolve?query={} -> {} ({}, {:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        query,
        resolved.location.name,
        resolved.kind,
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Json(ResolveResponse {
        name: resolved.location.name.clone(),
        lat: resolved.location.lat,
        lng: resolved.location.lng,
        zoom: resolved.location.zoom,
        aliases: resolved.location.aliases.clone(),
        formatted_coords: format_coords(resolved.location.lat, resolved.location.lng),
        match_kind: resolved.kind,
    }))
}

// ─── GET /api/suggest ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SuggestQuery {
    pub input: Option<String>,
    pub limit: Option<usize>,
}

pub async fn suggest(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestQuery>,
) -> Json<Vec<Location>> {
    let start = Instant::now();

    let input = params.input.as_deref().unwrap_or("");
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let suggestions = state.gazetteer.suggest(input, limit);

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /api/suggest?input={} -> {} candidate(s) ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        input,
        suggestions.len(),
        elapsed.as_secs_f64() * 1000.0,
    );

    Json(suggestions)
}

// ─── GET /api/nearby ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct NearbyQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct NearbyEntry {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
    pub distance_km: f64,
}

impl From<NearbyLocation> for NearbyEntry {
    fn from(n: NearbyLocation) -> Self {
        Self {
            name: n.location.name,
            lat: n.location.lat,
            lng: n.location.lng,
            zoom: n.location.zoom,
            distance_km: n.distance_km,
        }
    }
}

pub async fn nearby(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyQuery>,
) -> Result<Json<Vec<NearbyEntry>>, ApiError> {
    let start = Instant::now();

    let (lat, lng) = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "Provide 'lat' and 'lng' parameters",
            ))
        }
    };
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Invalid coordinates. Lat: -90..90, Lng: -180..180",
        ));
    }

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let results: Vec<NearbyEntry> = state
        .gazetteer
        .nearby(lat, lng, limit)
        .into_iter()
        .map(NearbyEntry::from)
        .collect();

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /api/nearby?lat={}&lng={} -> {} result(s) ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        lat,
        lng,
        results.len(),
        elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Json(results))
}

// ─── GET /api/locations ──────────────────────────────────────────

pub async fn locations(State(state): State<Arc<AppState>>) -> Json<Vec<Location>> {
    Json(state.gazetteer.locations().to_vec())
}

// ─── GET /api/map-config ─────────────────────────────────────────

#[derive(Serialize)]
pub struct InitialView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

#[derive(Serialize)]
pub struct MapConfigResponse {
    pub initial_view: InitialView,
}

/// Initial map view for the frontend: the default gazetteer entry.
pub async fn map_config(State(state): State<Arc<AppState>>) -> Json<MapConfigResponse> {
    let default = state.gazetteer.default_location();
    Json(MapConfigResponse {
        initial_view: InitialView {
            latitude: default.lat,
            longitude: default.lng,
            zoom: default.zoom,
        },
    })
}
