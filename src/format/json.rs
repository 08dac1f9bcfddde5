//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::places::Place;

/// JSON formatter - the same array the HTTP endpoint returns, pretty-printed
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Search response as JSON"
    }

    fn format(&self, places: &[Place]) -> Result<String> {
        Ok(serde_json::to_string_pretty(places)?)
    }
}
