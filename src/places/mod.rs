//! Places lookup
//!
//! Turns free-text address queries into structured [`Place`] records using
//! the Google Places autocomplete and details endpoints.

pub mod client;
pub mod components;
pub mod options;

use components::{tags, AddressComponent, AddressComponentMap};
use serde::{Deserialize, Serialize, Serializer};

pub use client::PlacesClient;
pub use options::{DetailsOptions, SearchOptions};

/// `result` object of a details response
///
/// Every field is optional; a missing or oddly shaped field leaves the
/// matching [`Place`] attribute empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub address_components: Option<Vec<AddressComponent>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// A geocoded place
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Place {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

impl Place {
    /// Build a place from a details `result` object
    pub fn from_result(result: PlaceResult) -> Self {
        let map = AddressComponentMap::from_components(
            result.address_components.as_deref().unwrap_or_default(),
        );
        let location = result.geometry.and_then(|g| g.location).unwrap_or_default();
        let component = |tag: &str| map.get(tag).map(str::to_string);

        Self {
            name: result.name,
            address: result.formatted_address,
            phone: result.formatted_phone_number,
            lat: location.lat,
            lng: location.lng,
            street_number: component(tags::STREET_NUMBER),
            street_name: component(tags::ROUTE),
            neighborhood: component(tags::NEIGHBORHOOD),
            city: component(tags::LOCALITY),
            state: component(tags::ADMIN_AREA_1),
            country: component(tags::COUNTRY),
            zip: component(tags::POSTAL_CODE),
        }
    }

    /// First address line, `"<street_number> <street_name>"`
    ///
    /// Missing parts render as empty text; the separator is always kept.
    pub fn line_1(&self) -> String {
        format!(
            "{} {}",
            self.street_number.as_deref().unwrap_or(""),
            self.street_name.as_deref().unwrap_or("")
        )
    }

    /// Second address line: the neighborhood
    pub fn line_2(&self) -> Option<&str> {
        self.neighborhood.as_deref()
    }
}

/// Wire shape of a place in search responses
#[derive(Serialize)]
struct PlaceJson<'a> {
    address: Option<&'a str>,
    line_1: String,
    line_2: Option<&'a str>,
    city: Option<&'a str>,
    state: Option<&'a str>,
    zip: Option<&'a str>,
    country: Option<&'a str>,
}

impl Serialize for Place {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PlaceJson {
            address: self.address.as_deref(),
            line_1: self.line_1(),
            line_2: self.line_2(),
            city: self.city.as_deref(),
            state: self.state.as_deref(),
            zip: self.zip.as_deref(),
            country: self.country.as_deref(),
        }
        .serialize(serializer)
    }
}
