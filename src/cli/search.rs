//! Search command handler
//!
//! Runs the search pipeline from the terminal.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::search::{SearchRequest, SearchService};
use clap::Args;
use std::net::IpAddr;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Free-text address query
    #[arg(required_unless_present = "list_formats")]
    pub query: Option<String>,

    /// Restrict results to a country (ISO 3166-1 alpha-2)
    #[arg(long, short = 'c')]
    pub country: Option<String>,

    /// Bias latitude
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Bias longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Bias by the location of this IP address
    #[arg(long)]
    pub ip: Option<IpAddr>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    if args.list_formats {
        println!("Available output formats:");
        for format in available_formats() {
            println!("  {:6} - {}", format.name, format.description);
        }
        return Ok(());
    }

    let formatter = get_formatter(&args.format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", args.format)))?;

    let config = Config::load()?;
    if !config.has_places_key() {
        return Err(Error::Config(
            "No places API key configured (set api_keys.places or GEOSEARCH_PLACES_API_KEY)"
                .to_string(),
        ));
    }

    let request = SearchRequest {
        query: args.query,
        country: args.country,
        lat: args.lat,
        lng: args.lng,
    };

    let service = SearchService::new(&config)?;
    let places = service.search(&request, args.ip).await?;
    let output = formatter.format(&places)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
