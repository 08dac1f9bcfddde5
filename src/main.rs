//! geosearch CLI entry point
//!
//! Address geocoding service - CLI + web server

use geosearch::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
