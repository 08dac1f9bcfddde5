//! geosearch: address geocoding endpoint
//!
//! Turns a free-text address query into structured place records using the
//! Google Places autocomplete and details APIs. Results can be biased by the
//! caller's approximate location, looked up from their IP address, and by
//! country.
//!
//! ## Quick Start
//!
//! ```no_run
//! use geosearch::places::{DetailsOptions, PlacesClient, SearchOptions};
//! use std::time::Duration;
//!
//! # async fn demo() -> geosearch::Result<()> {
//! let client = PlacesClient::new("api-key", Duration::from_secs(10))?;
//! let options = SearchOptions::new().with_country("us");
//!
//! let places = client
//!     .search_places("1600 Amphitheatre", &options, &DetailsOptions::new())
//!     .await?;
//! for place in &places {
//!     println!("{} {:?}", place.line_1(), place.city);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod places;
pub mod search;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::GeoLocation;
pub use places::Place;
pub use search::{SearchRequest, SearchService};
