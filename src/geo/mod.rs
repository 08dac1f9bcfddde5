//! IP geolocation
//!
//! Resolves a client IP address to an approximate location that is used to
//! bias place searches.

pub mod ip_location;

use serde::Serialize;

pub use ip_location::IpLocator;

/// Approximate location of a client
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GeoLocation {
    /// Local request, or the provider could not place the address
    Unknown,
    /// Provider returned a country, and possibly coordinates
    Known {
        lat: Option<f64>,
        lng: Option<f64>,
        country_code: String,
    },
}

impl GeoLocation {
    /// Coordinates, if both halves are known
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self {
            GeoLocation::Known {
                lat: Some(lat),
                lng: Some(lng),
                ..
            } => Some((*lat, *lng)),
            _ => None,
        }
    }

    /// ISO country code, if known
    pub fn country_code(&self) -> Option<&str> {
        match self {
            GeoLocation::Known { country_code, .. } => Some(country_code),
            GeoLocation::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, GeoLocation::Unknown)
    }
}
