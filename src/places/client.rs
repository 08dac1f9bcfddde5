//! HTTP client for the Google Places API
//!
//! Wraps `reqwest` with the API key, a per-call timeout and typed response
//! parsing for the autocomplete and details endpoints.

use crate::constants::api::{AUTOCOMPLETE_PATH, DETAILS_PATH, PLACES_URL, USER_AGENT};
use crate::error::{Error, Result};
use crate::places::options::{DetailsOptions, SearchOptions};
use crate::places::{Place, PlaceResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Places API client
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// Autocomplete response
#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Option<Vec<Prediction>>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(default)]
    reference: Option<String>,
}

/// Details response
#[derive(Debug, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    result: Option<PlaceResult>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

impl PlacesClient {
    /// Create a client pointed at the production API
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self> {
        Self::with_base_url(api_key, timeout, PLACES_URL)
    }

    /// Create a client with a custom base URL (used by tests)
    pub fn with_base_url(api_key: &str, timeout: Duration, base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Places(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Autocomplete `query` into an ordered list of place references
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<String>> {
        let params = options.to_query(query);
        let response: AutocompleteResponse = self.get_json(AUTOCOMPLETE_PATH, params).await?;
        log_status("autocomplete", response.status.as_deref(), response.error_message.as_deref());

        let predictions = response.predictions.unwrap_or_default();
        let total = predictions.len();
        let references: Vec<String> = predictions
            .into_iter()
            .filter_map(|p| p.reference)
            .collect();

        if references.len() < total {
            warn!(
                skipped = total - references.len(),
                "autocomplete predictions without a reference"
            );
        }
        debug!(query, count = references.len(), "autocomplete finished");

        Ok(references)
    }

    /// Fetch and normalize the details of one place reference
    pub async fn details(&self, reference: &str, options: &DetailsOptions) -> Result<Place> {
        let params = options.to_query(reference);
        let response: DetailsResponse = self.get_json(DETAILS_PATH, params).await?;
        log_status("details", response.status.as_deref(), response.error_message.as_deref());

        Ok(Place::from_result(response.result.unwrap_or_default()))
    }

    /// Search and resolve every reference, in order, stopping at the first failure
    pub async fn search_places(
        &self,
        query: &str,
        search: &SearchOptions,
        details: &DetailsOptions,
    ) -> Result<Vec<Place>> {
        let references = self.search(query, search).await?;

        let mut places = Vec::with_capacity(references.len());
        for reference in &references {
            places.push(self.details(reference, details).await?);
        }

        Ok(places)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<T> {
        if !self.api_key.is_empty() {
            params.push(("key", self.api_key.clone()));
        }

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::Places(format!("Places request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Places(format!(
                "Places API returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Places(format!("Failed to parse Places response: {}", e)))
    }
}

/// The provider status is informational only; the body decides the result
fn log_status(endpoint: &str, status: Option<&str>, message: Option<&str>) {
    match status {
        None | Some("OK") | Some("ZERO_RESULTS") => {}
        Some(status) => {
            warn!(endpoint, status, message = ?message, "places provider reported a non-OK status")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> PlacesClient {
        PlacesClient::with_base_url("test-key", Duration::from_secs(5), &server.uri()).unwrap()
    }

    async fn mount_details(server: &MockServer, reference: &str, result: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/details/json"))
            .and(query_param("reference", reference))
            .and(query_param("sensor", "false"))
            .and(query_param("key", "test-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "status": "OK", "result": result })),
            )
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_search_sends_folded_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/autocomplete/json"))
            .and(query_param("input", "main st"))
            .and(query_param("sensor", "false"))
            .and(query_param("types", "geocode"))
            .and(query_param("components", "country:us"))
            .and(query_param("location", "37.42,-122.08"))
            .and(query_param("radius", "10000"))
            .and(query_param("key", "test-key"))
            .and(query_param_is_missing("country"))
            .and(query_param_is_missing("lat"))
            .and(query_param_is_missing("lng"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "predictions": [
                    { "description": "Main St, Springfield", "reference": "ref-a" },
                    { "description": "Main St, Shelbyville", "reference": "ref-b" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = SearchOptions::new()
            .with_country("us")
            .with_position(37.42, -122.08);
        let references = test_client(&server).search("main st", &options).await.unwrap();

        assert_eq!(references, vec!["ref-a", "ref-b"]);
    }

    #[tokio::test]
    async fn test_search_without_predictions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/autocomplete/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ZERO_RESULTS" })))
            .mount(&server)
            .await;

        let references = test_client(&server)
            .search("nowhere", &SearchOptions::new())
            .await
            .unwrap();

        assert!(references.is_empty());
    }

    #[tokio::test]
    async fn test_search_skips_missing_references() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/autocomplete/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "predictions": [{ "description": "no ref" }, { "reference": "ref-c" }]
            })))
            .mount(&server)
            .await;

        let references = test_client(&server)
            .search("x", &SearchOptions::new())
            .await
            .unwrap();

        assert_eq!(references, vec!["ref-c"]);
    }

    #[tokio::test]
    async fn test_denied_status_with_empty_predictions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/autocomplete/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "REQUEST_DENIED",
                "error_message": "The provided API key is invalid.",
                "predictions": []
            })))
            .mount(&server)
            .await;

        let references = test_client(&server)
            .search("x", &SearchOptions::new())
            .await
            .unwrap();
        assert!(references.is_empty());
    }

    #[tokio::test]
    async fn test_search_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/autocomplete/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "predictions": [] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client =
            PlacesClient::with_base_url("test-key", Duration::from_secs(1), &server.uri()).unwrap();
        let result = client.search("slow", &SearchOptions::new()).await;

        assert!(matches!(result, Err(Error::Places(_))));
    }

    #[tokio::test]
    async fn test_details_locality_becomes_city() {
        let server = MockServer::start().await;
        mount_details(
            &server,
            "ref-springfield",
            json!({
                "name": "Springfield",
                "address_components": [
                    { "types": ["locality", "political"], "long_name": "Springfield", "short_name": "Springfield" }
                ]
            }),
        )
        .await;

        let place = test_client(&server)
            .details("ref-springfield", &DetailsOptions::new())
            .await
            .unwrap();

        assert_eq!(place.city.as_deref(), Some("Springfield"));
    }

    #[tokio::test]
    async fn test_details_without_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/details/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "NOT_FOUND" })))
            .mount(&server)
            .await;

        let place = test_client(&server)
            .details("gone", &DetailsOptions::new())
            .await
            .unwrap();

        assert_eq!(place, Place::default());
    }

    #[tokio::test]
    async fn test_search_places_keeps_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/autocomplete/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "predictions": [{ "reference": "second" }, { "reference": "first" }]
            })))
            .mount(&server)
            .await;
        mount_details(&server, "second", json!({ "formatted_address": "2 Second St" })).await;
        mount_details(&server, "first", json!({ "formatted_address": "1 First St" })).await;

        let places = test_client(&server)
            .search_places("st", &SearchOptions::new(), &DetailsOptions::new())
            .await
            .unwrap();

        let addresses: Vec<_> = places.iter().map(|p| p.address.as_deref().unwrap()).collect();
        assert_eq!(addresses, vec!["2 Second St", "1 First St"]);
    }

    #[tokio::test]
    async fn test_search_places_fails_fast() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/autocomplete/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "predictions": [{ "reference": "broken" }, { "reference": "never" }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/details/json"))
            .and(query_param("reference", "broken"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/details/json"))
            .and(query_param("reference", "never"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": {} })))
            .expect(0)
            .mount(&server)
            .await;

        let result = test_client(&server)
            .search_places("x", &SearchOptions::new(), &DetailsOptions::new())
            .await;

        assert!(matches!(result, Err(Error::Places(_))));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let result = test_client(&server).search("x", &SearchOptions::new()).await;
        assert!(matches!(result, Err(Error::Places(_))));
    }
}
