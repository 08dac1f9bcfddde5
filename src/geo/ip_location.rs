//! IP-based geolocation
//!
//! Uses hostip.info to place a client address. Loopback and unspecified
//! addresses are never sent to the provider.

use crate::constants::api::{IP_GEO_URL, USER_AGENT};
use crate::constants::geo::UNKNOWN_COUNTRY_CODE;
use crate::error::{Error, Result};
use crate::geo::GeoLocation;
use serde::{Deserialize, Deserializer};
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// IP location service
#[derive(Debug, Clone)]
pub struct IpLocator {
    client: reqwest::Client,
    base_url: String,
}

/// hostip.info response
///
/// Example: `{"country_name":"UNITED STATES","country_code":"US","city":"Mountain View, CA","ip":"8.8.8.8","lat":"37.402","lng":"-122.078"}`
#[derive(Debug, Deserialize)]
struct HostIpResponse {
    #[serde(default)]
    country_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_coord")]
    lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    lng: Option<f64>,
}

/// hostip.info sends coordinates as strings, sometimes empty or null
fn lenient_coord<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

impl IpLocator {
    /// Create a locator pointed at the production provider
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(IP_GEO_URL, timeout)
    }

    /// Create a locator with a custom endpoint (used by tests)
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Geo(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Whether an address is local and should not be looked up
    pub fn is_local(ip: IpAddr) -> bool {
        ip.is_loopback() || ip.is_unspecified()
    }

    /// Resolve an address to an approximate location
    pub async fn resolve(&self, ip: IpAddr) -> Result<GeoLocation> {
        if Self::is_local(ip) {
            debug!(%ip, "local address, skipping geolocation");
            return Ok(GeoLocation::Unknown);
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("ip", ip.to_string().as_str()), ("position", "true")])
            .send()
            .await
            .map_err(|e| Error::Geo(format!("IP location request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geo(format!(
                "IP location API returned status: {}",
                response.status()
            )));
        }

        let data: HostIpResponse = response
            .json()
            .await
            .map_err(|e| Error::Geo(format!("Failed to parse IP location response: {}", e)))?;

        let location = Self::interpret(data);
        debug!(%ip, ?location, "resolved client location");
        Ok(location)
    }

    fn interpret(data: HostIpResponse) -> GeoLocation {
        match data.country_code {
            Some(code) if !code.is_empty() && code != UNKNOWN_COUNTRY_CODE => GeoLocation::Known {
                lat: data.lat,
                lng: data.lng,
                country_code: code,
            },
            _ => GeoLocation::Unknown,
        }
    }
}
