//! Geocoding service client.
//!
//! One HTTP GET per search, a strict JSON-array envelope and a tolerant
//! per-element decode. Fetching sits behind the [`Geocoder`] trait so the
//! coordinator and the facade can be driven by a test double.

pub use error::FetchError;
mod http;
mod wire;

use async_trait::async_trait;
use error::Result;
pub use http::GeocodeClient;

use crate::candidate::Candidate;

/// A source of place candidates for free-text queries.
///
/// Implementations perform exactly one fetch per call and do no queuing of
/// their own; request sequencing is the coordinator's job.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Fetch raw candidates for `query`, in response order.
    async fn search(&self, query: &str) -> Result<Vec<Candidate>>;
}

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum FetchError {
        #[error("Transport error: {0}")]
        Transport(#[from] reqwest::Error),
        #[error("Decode error: {0}")]
        Decode(#[from] serde_json::Error),
    }
    pub type Result<T> = std::result::Result<T, FetchError>;
}
