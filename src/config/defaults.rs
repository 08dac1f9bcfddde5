//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 4567;

/// Default allowed CORS origin
pub const DEFAULT_CORS_ORIGIN: &str = "*";

/// Default timeout for each outbound provider call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default autocomplete type filter
pub const DEFAULT_TYPES: &str = crate::constants::places::DEFAULT_TYPES;

/// Default location bias radius in meters
pub const DEFAULT_RADIUS: u32 = crate::constants::places::DEFAULT_RADIUS_METERS;

/// Environment variable overriding the places API key
pub const ENV_PLACES_API_KEY: &str = "GEOSEARCH_PLACES_API_KEY";

/// Environment variable overriding the allowed CORS origin
pub const ENV_CORS_ORIGIN: &str = "GEOSEARCH_CORS_ORIGIN";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "geosearch";
