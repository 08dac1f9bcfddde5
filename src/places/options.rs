//! Request parameters for the places provider
//!
//! Every field is optional. A value set by the caller is sent as-is; the
//! defaults only fill parameters the caller left unset.

use crate::constants::places::{COUNTRY_COMPONENT_PREFIX, DEFAULT_RADIUS_METERS, DEFAULT_TYPES};

/// Autocomplete parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Restrict results to one country (ISO 3166-1 alpha-2)
    pub country: Option<String>,
    /// Latitude of the bias point, used together with `lng`
    pub lat: Option<f64>,
    /// Longitude of the bias point, used together with `lat`
    pub lng: Option<f64>,
    /// Autocomplete type filter, defaults to `geocode`
    pub types: Option<String>,
    /// Raw `components` parameter, wins over `country`
    pub components: Option<String>,
    /// Raw `location` parameter, wins over `lat`/`lng`
    pub location: Option<String>,
    /// Bias radius in meters, defaults to 10000 once a location is set
    pub radius: Option<u32>,
    pub language: Option<String>,
    pub sensor: Option<bool>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_position(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Build the autocomplete query string pairs for `input`
    ///
    /// `country`, `lat` and `lng` are folded into `components` and
    /// `location` and never sent themselves.
    pub fn to_query(&self, input: &str) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("input", input.to_string()),
            ("sensor", self.sensor.unwrap_or(false).to_string()),
            (
                "types",
                self.types.clone().unwrap_or_else(|| DEFAULT_TYPES.to_string()),
            ),
        ];

        let components = self.components.clone().or_else(|| {
            self.country
                .as_ref()
                .map(|cc| format!("{}{}", COUNTRY_COMPONENT_PREFIX, cc))
        });
        if let Some(components) = components {
            query.push(("components", components));
        }

        let position = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(format!("{},{}", lat, lng)),
            _ => None,
        };
        let location = self.location.clone().or(position);
        let radius = match (&location, self.radius) {
            (_, Some(radius)) => Some(radius),
            (Some(_), None) => Some(DEFAULT_RADIUS_METERS),
            (None, None) => None,
        };
        if let Some(location) = location {
            query.push(("location", location));
        }
        if let Some(radius) = radius {
            query.push(("radius", radius.to_string()));
        }

        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }

        query
    }
}

/// Details parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsOptions {
    pub language: Option<String>,
    pub sensor: Option<bool>,
}

impl DetailsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the details query string pairs for `reference`
    pub fn to_query(&self, reference: &str) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("reference", reference.to_string()),
            ("sensor", self.sensor.unwrap_or(false).to_string()),
        ];
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_defaults_fill_gaps() {
        let query = SearchOptions::new().to_query("1600 Amphitheatre");

        assert_eq!(value(&query, "input"), Some("1600 Amphitheatre"));
        assert_eq!(value(&query, "sensor"), Some("false"));
        assert_eq!(value(&query, "types"), Some("geocode"));
        assert_eq!(value(&query, "components"), None);
        assert_eq!(value(&query, "location"), None);
        assert_eq!(value(&query, "radius"), None);
    }

    #[test]
    fn test_explicit_values_win() {
        let options = SearchOptions {
            types: Some("address".to_string()),
            sensor: Some(true),
            ..SearchOptions::default()
        };
        let query = options.to_query("x");

        assert_eq!(value(&query, "types"), Some("address"));
        assert_eq!(value(&query, "sensor"), Some("true"));
    }

    #[test]
    fn test_country_and_position_are_folded() {
        let query = SearchOptions::new()
            .with_country("us")
            .with_position(37.42, -122.08)
            .to_query("main st");

        assert_eq!(value(&query, "components"), Some("country:us"));
        assert_eq!(value(&query, "location"), Some("37.42,-122.08"));
        assert_eq!(value(&query, "radius"), Some("10000"));
        for raw in ["country", "lat", "lng"] {
            assert_eq!(value(&query, raw), None, "{} should not be sent", raw);
        }
    }

    #[test]
    fn test_position_requires_both_halves() {
        let options = SearchOptions {
            lat: Some(10.0),
            ..SearchOptions::default()
        };
        let query = options.to_query("x");

        assert_eq!(value(&query, "location"), None);
        assert_eq!(value(&query, "radius"), None);
    }

    #[test]
    fn test_explicit_location_parameters_win() {
        let options = SearchOptions {
            components: Some("country:fr".to_string()),
            location: Some("48.85,2.35".to_string()),
            radius: Some(500),
            ..SearchOptions::new().with_country("us").with_position(1.0, 2.0)
        };
        let query = options.to_query("x");

        assert_eq!(value(&query, "components"), Some("country:fr"));
        assert_eq!(value(&query, "location"), Some("48.85,2.35"));
        assert_eq!(value(&query, "radius"), Some("500"));
    }

    #[test]
    fn test_details_query() {
        let options = DetailsOptions {
            language: Some("de".to_string()),
            ..DetailsOptions::new()
        };
        let query = options.to_query("ref-1");

        assert_eq!(value(&query, "reference"), Some("ref-1"));
        assert_eq!(value(&query, "sensor"), Some("false"));
        assert_eq!(value(&query, "language"), Some("de"));
    }
}
