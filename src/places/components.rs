//! Address component extraction
//!
//! The places provider splits an address into tagged fragments, each carrying
//! one or more type tags. [`AddressComponentMap`] flattens that list into a
//! single lookup from tag to display name.

use serde::Deserialize;
use std::collections::HashMap;

/// Component tags read into a [`Place`](crate::places::Place)
pub mod tags {
    pub const STREET_NUMBER: &str = "street_number";
    pub const ROUTE: &str = "route";
    pub const NEIGHBORHOOD: &str = "neighborhood";
    pub const LOCALITY: &str = "locality";
    pub const ADMIN_AREA_1: &str = "administrative_area_level_1";
    pub const COUNTRY: &str = "country";
    pub const POSTAL_CODE: &str = "postal_code";
}

/// A single address fragment as sent by the provider
///
/// Example: `{"long_name": "Amphitheatre Parkway", "short_name": "Amphitheatre Pkwy", "types": ["route"]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
}

/// Tag to display-name lookup for one place
///
/// Always keyed by the short display name. Later components overwrite
/// earlier ones that share a tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressComponentMap {
    names: HashMap<String, String>,
}

impl AddressComponentMap {
    /// Flatten components in provider order
    pub fn from_components(components: &[AddressComponent]) -> Self {
        let mut names = HashMap::new();

        for component in components {
            let Some(name) = &component.short_name else {
                continue;
            };
            for tag in component.types.iter().flatten() {
                names.insert(tag.clone(), name.clone());
            }
        }

        Self { names }
    }

    /// Display name recorded for a tag
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.names.get(tag).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(types: &[&str], long: &str, short: &str) -> AddressComponent {
        AddressComponent {
            types: Some(types.iter().map(|t| t.to_string()).collect()),
            long_name: Some(long.to_string()),
            short_name: Some(short.to_string()),
        }
    }

    #[test]
    fn test_short_name_is_used() {
        let map = AddressComponentMap::from_components(&[component(
            &["administrative_area_level_1", "political"],
            "California",
            "CA",
        )]);

        assert_eq!(map.get(tags::ADMIN_AREA_1), Some("CA"));
        assert_eq!(map.get("political"), Some("CA"));
    }

    #[test]
    fn test_last_write_wins() {
        let map = AddressComponentMap::from_components(&[
            component(&["route"], "First Street", "First St"),
            component(&["route"], "Second Street", "Second St"),
        ]);

        assert_eq!(map.get(tags::ROUTE), Some("Second St"));
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let components: Vec<AddressComponent> = serde_json::from_value(serde_json::json!([
            { "long_name": "No Types", "short_name": "NT" },
            { "types": ["locality"], "long_name": "Only Long" },
            { "types": null, "short_name": "Null Types" },
            { "types": ["postal_code"], "short_name": "94043" }
        ]))
        .unwrap();

        let map = AddressComponentMap::from_components(&components);
        assert_eq!(map.get(tags::LOCALITY), None);
        assert_eq!(map.get(tags::POSTAL_CODE), Some("94043"));
    }

    #[test]
    fn test_empty() {
        let map = AddressComponentMap::from_components(&[]);
        assert_eq!(map.get(tags::COUNTRY), None);
        assert_eq!(map.get(tags::ROUTE), None);
    }
}
