//! Custom search configuration
//!
//! This example demonstrates the configuration surface:
//! - The defaults for the public service
//! - Building a custom configuration with validated setters
//! - How configuration shapes the request URL
//!
//! Everything here runs offline.

use std::time::Duration;

use ortelius::{OrteliusError, SearchConfig, search_url};
use tracing::Level;

fn main() -> Result<(), OrteliusError> {
    ortelius::init_logging(Level::INFO)?;

    // 1. The default configuration targets the public service
    let default_config = SearchConfig::default();
    println!("Default endpoint: {}", default_config.endpoint);
    println!("Default request:  {}", search_url(&default_config, "berlin"));

    // 2. Build a custom configuration
    let custom_config = SearchConfig::builder()
        .endpoint("https://nominatim.example.org")? // Self-hosted instance
        .language("de-DE") // Localized display names
        .result_limit(10)? // Fewer raw candidates per request
        .filter_category("city") // Keep a different candidate category
        .timeout(Duration::from_secs(5))? // Tighter deadline
        .user_agent("my-app/1.0 (contact@example.org)")? // Asked for by the usage policy
        .build();

    println!("\nCustom request:   {}", search_url(&custom_config, "münchen"));

    // 3. Validating setters reject unusable values
    let too_many = SearchConfig::builder().result_limit(500);
    println!("\nresult_limit(500) -> {:?}", too_many.err());

    let bad_endpoint = SearchConfig::builder().endpoint("not a url");
    println!("endpoint(\"not a url\") -> {:?}", bad_endpoint.err());

    Ok(())
}
