//! Live search session
//!
//! This example demonstrates interactive use:
//! - Spawning a session from a searcher
//! - Submitting queries as a user would type them
//! - Watching published result snapshots
//!
//! The session keeps at most one request in flight; rapid keystrokes
//! coalesce so only the first and the latest text reach the service.
//!
//! Note: this hits the public Nominatim service.

use std::time::Duration;

use ortelius::PlaceSearcher;
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ortelius::init_logging(Level::INFO)?;

    let searcher = PlaceSearcher::new()?;
    let session = searcher.session();
    let mut results = session.results();

    // 1. Simulate a user typing "london" one keystroke at a time
    println!("🔍 Typing 'london'...");
    for prefix in ["l", "lo", "lon", "lond", "londo", "london"] {
        session.submit(prefix);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    // 2. Wait for the latest query's results to land
    let wait = results.wait_for(|list| list.as_ref().is_some_and(|list| !list.is_empty()));
    match tokio::time::timeout(Duration::from_secs(10), wait).await {
        Ok(published) => {
            let published = published?;
            let places = published.as_ref().expect("non-empty snapshot");
            println!("✅ {} places:", places.len());
            for place in places.iter().take(5) {
                println!("   {} ({:.3})", place.display_name, place.importance);
            }
        }
        Err(_) => println!("⚠️ No results within 10s (offline, or rate limited?)"),
    }

    // 3. Snapshot access without subscribing to changes
    println!("\n🔍 Revising to 'cambridge'...");
    session.submit("cambridge");
    tokio::time::sleep(Duration::from_secs(2)).await;
    match session.snapshot() {
        Some(places) => println!("Snapshot now holds {} places", places.len()),
        None => println!("No snapshot published yet"),
    }

    Ok(())
}
