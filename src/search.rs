//! Search pipeline
//!
//! Validates a request, resolves the caller's approximate location, runs the
//! autocomplete search and resolves every reference into a [`Place`].

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::{GeoLocation, IpLocator};
use crate::places::{DetailsOptions, Place, PlacesClient, SearchOptions};
use serde::{Deserialize, Deserializer};
use std::net::IpAddr;
use tracing::{info, warn};

/// Inbound search parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text address query
    pub query: Option<String>,
    /// Country restriction, wins over the geolocated country
    pub country: Option<String>,
    /// Bias latitude, wins over the geolocated position
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lat: Option<f64>,
    /// Bias longitude, wins over the geolocated position
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lng: Option<f64>,
}

/// Unparseable or empty coordinates are dropped so that query validation
/// still decides the response status
fn lenient_coord<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.trim().parse::<f64>() {
        Ok(coord) if coord.is_finite() => Some(coord),
        _ => {
            if !value.is_empty() {
                warn!(value = %value, "ignoring unparseable coordinate");
            }
            None
        }
    }))
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// The query text, rejecting absent or empty values
    pub fn validated_query(&self) -> Result<&str> {
        match self.query.as_deref() {
            Some(q) if !q.is_empty() => Ok(q),
            _ => Err(Error::Validation("query parameter is required".to_string())),
        }
    }
}

/// Geolocation + places pipeline shared by the server and the CLI
#[derive(Debug, Clone)]
pub struct SearchService {
    places: PlacesClient,
    locator: IpLocator,
    types: String,
    radius: u32,
    geolocate: bool,
}

impl SearchService {
    /// Build the service against the production providers
    pub fn new(config: &Config) -> Result<Self> {
        let places = PlacesClient::new(&config.api_keys.places, config.timeout())?;
        let locator = IpLocator::new(config.timeout())?;
        Ok(Self::with_clients(config, places, locator))
    }

    /// Build the service from preconfigured clients
    pub fn with_clients(config: &Config, places: PlacesClient, locator: IpLocator) -> Self {
        Self {
            places,
            locator,
            types: config.search.types.clone(),
            radius: config.search.radius,
            geolocate: config.search.geolocate,
        }
    }

    /// Whether lookups are biased by the caller's IP
    pub fn geolocates(&self) -> bool {
        self.geolocate
    }

    /// Run a search for `request` on behalf of `client_ip`
    pub async fn search(&self, request: &SearchRequest, client_ip: Option<IpAddr>) -> Result<Vec<Place>> {
        let query = request.validated_query()?;

        let location = match client_ip {
            Some(ip) if self.geolocate => self.locator.resolve(ip).await?,
            _ => GeoLocation::Unknown,
        };

        let options = self.options_for(request, &location);
        let places = self
            .places
            .search_places(query, &options, &DetailsOptions::new())
            .await?;

        info!(query, results = places.len(), "search completed");
        Ok(places)
    }

    /// Combine request parameters with the resolved location
    fn options_for(&self, request: &SearchRequest, location: &GeoLocation) -> SearchOptions {
        let mut options = SearchOptions::new().with_types(self.types.clone());

        if let Some(country) = request
            .country
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| location.country_code())
        {
            options = options.with_country(country);
        }

        let position = match (request.lat, request.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            (None, None) => location.coordinates(),
            _ => {
                warn!("ignoring partial lat/lng bias");
                location.coordinates()
            }
        };
        if let Some((lat, lng)) = position {
            options = options.with_position(lat, lng).with_radius(self.radius);
        }

        options
    }
}
