//! Basic place search functionality
//!
//! This example demonstrates the fundamental search operations:
//! - Creating a searcher instance
//! - One-shot free-text searches
//! - Working with ranked candidates
//!
//! Note: this hits the public Nominatim service. Its usage policy asks for
//! at most one request per second and an identifying user agent.

use ortelius::{Candidate, OrteliusError, PlaceSearcher};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<(), OrteliusError> {
    ortelius::init_logging(Level::INFO)?;

    // Create a searcher against the public service
    let searcher = PlaceSearcher::new()?;

    // Simple free-text search
    println!("Searching for 'London':");
    let results = searcher.search("London").await?;
    print_candidates(&results, 3);

    // More specific text narrows the ranking
    println!("\nSearching for 'Paris, France':");
    let results = searcher.search("Paris, France").await?;
    print_candidates(&results, 3);

    Ok(())
}

fn print_candidates(candidates: &[Candidate], limit: usize) {
    for (i, candidate) in candidates.iter().take(limit).enumerate() {
        println!(
            "  {}. {} - Importance: {:.3} ({:.4}, {:.4})",
            i + 1,
            candidate.display_name,
            candidate.importance,
            candidate.latitude,
            candidate.longitude
        );
    }

    if candidates.len() > limit {
        println!("  ... and {} more results", candidates.len() - limit);
    }
}
