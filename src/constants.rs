//! Centralized constants for the geosearch crate
//!
//! Provider endpoints and fixed request parameters shared by the clients,
//! the server and the CLI.

/// External API endpoints
pub mod api {
    /// Google Places API base (autocomplete + details)
    pub const PLACES_URL: &str = "https://maps.googleapis.com/maps/api/place";

    /// Autocomplete path, relative to the places base
    pub const AUTOCOMPLETE_PATH: &str = "/autocomplete/json";

    /// Details path, relative to the places base
    pub const DETAILS_PATH: &str = "/details/json";

    /// hostip.info IP geolocation API
    pub const IP_GEO_URL: &str = "https://api.hostip.info/get_json.php";

    /// User agent sent to both providers
    pub const USER_AGENT: &str = concat!("geosearch/", env!("CARGO_PKG_VERSION"));
}

/// Places request parameters
pub mod places {
    /// Autocomplete type filter applied when the caller sets none
    pub const DEFAULT_TYPES: &str = "geocode";

    /// Bias radius in meters applied when a location is set without one
    pub const DEFAULT_RADIUS_METERS: u32 = 10_000;

    /// Prefix of the country restriction in the `components` parameter
    pub const COUNTRY_COMPONENT_PREFIX: &str = "country:";
}

/// IP geolocation constants
pub mod geo {
    /// Country code hostip.info returns for addresses it cannot place
    pub const UNKNOWN_COUNTRY_CODE: &str = "XX";
}
