//! # Ortelius - Nominatim Place Search
//!
//! Ortelius turns free-text place queries into deduplicated,
//! importance-ranked candidate lists from a Nominatim-compatible geocoding
//! service. It owns the awkward part of interactive search: sequencing
//! overlapping requests so the service sees at most one in-flight query per
//! session while rapid keystrokes coalesce into the latest text.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ortelius::PlaceSearcher;
//!
//! # #[tokio::main]
//! # async fn main() -> ortelius::Result<()> {
//! let searcher = PlaceSearcher::new()?;
//!
//! // One-shot search: fetch, filter, deduplicate, rank. Errors surface.
//! let places = searcher.search("london").await?;
//! if let Some(top) = places.first() {
//!     println!("Top hit: {} ({:.2})", top.display_name, top.importance);
//! }
//!
//! // Live session: submit as the user types, read published snapshots.
//! let session = searcher.session();
//! session.submit("lon");
//! session.submit("london");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Query coalescing**: at most one request in flight per session; the
//!   newest superseding query waits in a single pending slot
//! - **Result reconciliation**: category filter, deduplication by display
//!   name keeping the higher importance, stable descending sort
//! - **Tolerant wire decoding**: records without parseable coordinates are
//!   skipped rather than failing the batch
//! - **Test seams**: bring your own [`Geocoder`] to drive searches and
//!   sessions without a network

use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod candidate;
mod client;
mod config;
mod coordinator;
mod core;
pub mod error;
mod query;
mod reconcile;

pub use candidate::Candidate;
pub use client::{FetchError, GeocodeClient, Geocoder};
pub use config::{SearchConfig, SearchConfigBuilder};
pub use coordinator::{CoordinatorState, Phase, SearchCoordinator, SearchSession};
pub use core::PlaceSearcher;
pub use error::{OrteliusError, Result};
pub use query::{encode_query, search_url};
pub use reconcile::reconcile;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the library.
///
/// Structured logging with configurable levels and filtering. Honors
/// `RUST_LOG` when set, falls back to `level` otherwise, and quiets the
/// HTTP stack's internals. Call once at application start; later calls are
/// no-ops.
///
/// # Arguments
///
/// * `level` - The minimum log level to display when `RUST_LOG` is unset
///
/// # Examples
///
/// ```rust
/// use ortelius::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), ortelius::OrteliusError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static ()> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("hyper_util=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}
