use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    candidate::Candidate,
    client::{GeocodeClient, Geocoder},
    config::SearchConfig,
    coordinator::{SearchCoordinator, SearchSession},
    error::Result,
    reconcile::reconcile,
};

/// The main place searcher, tying the geocoding client to the result
/// reconciliation pipeline.
///
/// One-shot searches go through [`search`](Self::search) and surface fetch
/// errors to the caller. For interactive use, [`session`](Self::session)
/// spawns a coordinator that sequences overlapping queries and absorbs
/// fetch failures into empty result lists.
///
/// # Examples
///
/// Basic usage:
/// ```rust,no_run
/// use ortelius::PlaceSearcher;
///
/// # #[tokio::main]
/// # async fn main() -> ortelius::Result<()> {
/// let searcher = PlaceSearcher::new()?;
/// let places = searcher.search("london").await?;
/// println!("Found {} places", places.len());
/// # Ok(())
/// # }
/// ```
///
/// With custom configuration:
/// ```rust,no_run
/// use ortelius::{PlaceSearcher, SearchConfig};
///
/// # #[tokio::main]
/// # async fn main() -> ortelius::Result<()> {
/// let config = SearchConfig::builder()
///     .language("de-DE")
///     .result_limit(10)?
///     .build();
///
/// let searcher = PlaceSearcher::with_config(config)?;
/// let places = searcher.search("münchen").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PlaceSearcher {
    geocoder: Arc<dyn Geocoder>,
    config: SearchConfig,
}

impl PlaceSearcher {
    /// Create a searcher against the public service with the default
    /// configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(SearchConfig::default())
    }

    /// Create a searcher with a custom configuration.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        let client = GeocodeClient::new(config.clone())?;
        Ok(Self {
            geocoder: Arc::new(client),
            config,
        })
    }

    /// Assemble a searcher from pre-built parts.
    ///
    /// Useful for tests and for callers bringing their own [`Geocoder`];
    /// `config` still drives reconciliation and any sessions spawned from
    /// this searcher.
    pub fn from_components(geocoder: Arc<dyn Geocoder>, config: SearchConfig) -> Self {
        Self { geocoder, config }
    }

    /// The configuration this searcher was built with.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one search to completion: fetch, filter, deduplicate, rank.
    ///
    /// Unlike a [`session`](Self::session), fetch errors are surfaced to
    /// the caller here.
    #[instrument(name = "Place Search", level = "info", skip_all, fields(query = %text))]
    pub async fn search(&self, text: &str) -> Result<Vec<Candidate>> {
        let raw = self.geocoder.search(text).await?;
        let raw_count = raw.len();

        let reconciled = reconcile(raw, &self.config.filter_category);
        info!(
            raw = raw_count,
            kept = reconciled.len(),
            "search complete"
        );
        Ok(reconciled)
    }

    /// Spawn a live search session sharing this searcher's client and
    /// configuration.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn session(&self) -> SearchSession {
        SearchCoordinator::spawn(Arc::clone(&self.geocoder), self.config.clone())
    }
}
