//! Server shared state
//!
//! Holds configuration and the search pipeline. Built once at startup and
//! read-only afterwards.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::search::SearchService;
use axum::http::HeaderValue;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Geolocation + places pipeline
    pub search: SearchService,

    /// Value of the `Access-Control-Allow-Origin` response header
    pub cors_origin: HeaderValue,
}

impl AppState {
    /// Create new application state against the production providers
    pub fn new(config: Config) -> Result<Self> {
        let search = SearchService::new(&config)?;
        Self::with_service(config, search)
    }

    /// Create application state around an existing search service
    pub fn with_service(config: Config, search: SearchService) -> Result<Self> {
        let cors_origin = HeaderValue::from_str(&config.cors.allowed_origin).map_err(|e| {
            Error::Config(format!(
                "Invalid CORS origin '{}': {}",
                config.cors.allowed_origin, e
            ))
        })?;

        Ok(Self {
            config,
            search,
            cors_origin,
        })
    }
}
