//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::error::Error;
use crate::places::Place;
use crate::search::SearchRequest;
use crate::server::client_ip::client_ip;
use crate::server::state::AppState;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors_origin = state.cors_origin.clone();

    Router::new()
        .route("/search", get(search_handler))
        .route("/status", get(status_handler))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            cors_origin,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "INVALID_QUERY" => StatusCode::NOT_ACCEPTABLE,
            "GEOLOCATION_ERROR" | "PLACES_ERROR" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::Validation(_) => "INVALID_QUERY",
            Error::Geo(_) => "GEOLOCATION_ERROR",
            Error::Places(_) => "PLACES_ERROR",
            _ => "INTERNAL_ERROR",
        };
        if err.is_upstream() {
            warn!(error = %err, "upstream provider failed");
        }
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Geocode a free-text address
///
/// GET /search?query=<text>[&country=<cc>][&lat=<lat>&lng=<lng>]
async fn search_handler(
    State(state): State<Arc<AppState>>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Query(req): Query<SearchRequest>,
) -> Result<Json<Vec<Place>>, ApiError> {
    let ip = client_ip(&headers, peer.map(|ConnectInfo(addr)| addr));
    let places = state.search.search(&req, ip).await?;
    Ok(Json(places))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Whether a places API key is configured
    pub api_key_configured: bool,
    /// Whether searches are biased by client IP
    pub geolocate: bool,
}

/// Server status endpoint
///
/// GET /status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        api_key_configured: state.config.has_places_key(),
        geolocate: state.search.geolocates(),
    })
}
