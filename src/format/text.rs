//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::places::Place;

/// Text formatter - one block per place
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, places: &[Place]) -> Result<String> {
        if places.is_empty() {
            return Ok("No places found\n".to_string());
        }

        let mut output = String::new();
        for (i, place) in places.iter().enumerate() {
            let title = place
                .name
                .as_deref()
                .or(place.address.as_deref())
                .unwrap_or("(unnamed)");
            output.push_str(&format!("{}. {}\n", i + 1, title));

            if let Some(address) = &place.address {
                output.push_str(&format!("   Address: {}\n", address));
            }
            let line_1 = place.line_1();
            if !line_1.trim().is_empty() {
                output.push_str(&format!("   Street: {}\n", line_1.trim()));
            }
            if let Some(line_2) = place.line_2() {
                output.push_str(&format!("   Neighborhood: {}\n", line_2));
            }

            let locality: Vec<&str> = [&place.city, &place.state, &place.zip, &place.country]
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect();
            if !locality.is_empty() {
                output.push_str(&format!("   Locality: {}\n", locality.join(", ")));
            }

            if let Some(phone) = &place.phone {
                output.push_str(&format!("   Phone: {}\n", phone));
            }
            if let (Some(lat), Some(lng)) = (place.lat, place.lng) {
                output.push_str(&format!("   Position: ({:.6}, {:.6})\n", lat, lng));
            }
        }

        Ok(output)
    }
}
