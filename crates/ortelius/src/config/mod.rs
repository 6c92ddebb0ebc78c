//! Search configuration shared by the client, the reconciler and the
//! coordinator.

use std::time::Duration;

use url::Url;

use crate::error::OrteliusError;

const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_RESULT_LIMIT: usize = 50;
const DEFAULT_FILTER_CATEGORY: &str = "administrative";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("ortelius/", env!("CARGO_PKG_VERSION"));

/// The service's documented ceiling for the `limit` parameter.
const MAX_RESULT_LIMIT: usize = 50;

/// `accept-language` tag used when none is configured.
pub(crate) const FALLBACK_LANGUAGE: &str = "en-US";

/// Configuration for a search client and the sessions spawned from it.
///
/// The default targets the public Nominatim instance with its stock
/// parameters. Use [`SearchConfigBuilder`] to customize.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Geocoding service base URL. A path prefix is preserved when the
    /// `/search` endpoint is appended at request time.
    pub endpoint: Url,
    /// `accept-language` tag sent with every request; `None` falls back to
    /// `en-US` when the request URL is built.
    pub language: Option<String>,
    /// Maximum number of results requested from the service.
    pub result_limit: usize,
    /// Category a candidate must carry to survive reconciliation.
    pub filter_category: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User agent sent with every request. The public service's usage policy
    /// requires an identifying agent.
    pub user_agent: String,
}

impl SearchConfig {
    /// Create a builder for customizing the configuration
    #[must_use]
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).unwrap(),
            language: None,
            result_limit: DEFAULT_RESULT_LIMIT,
            filter_category: DEFAULT_FILTER_CATEGORY.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Builder for creating search configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Create a new builder with the stock public-instance defaults
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Point the client at a different service instance.
    ///
    /// The URL may carry a path prefix (`https://host/nominatim`); `/search`
    /// is appended per request.
    pub fn endpoint(mut self, endpoint: impl AsRef<str>) -> Result<Self, OrteliusError> {
        let url = Url::parse(endpoint.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(OrteliusError::ConfigError(format!(
                "endpoint cannot be used as a base URL: {url}"
            )));
        }
        self.config.endpoint = url;
        Ok(self)
    }

    /// Set the `accept-language` tag sent with every request
    pub fn language(mut self, tag: impl Into<String>) -> Self {
        self.config.language = Some(tag.into());
        self
    }

    /// Set the maximum number of results to request per search
    pub fn result_limit(mut self, limit: usize) -> Result<Self, OrteliusError> {
        if limit == 0 || limit > MAX_RESULT_LIMIT {
            return Err(OrteliusError::ConfigError(format!(
                "result limit must be between 1 and {MAX_RESULT_LIMIT}, got {limit}"
            )));
        }
        self.config.result_limit = limit;
        Ok(self)
    }

    /// Set the category candidates must carry to survive reconciliation
    pub fn filter_category(mut self, category: impl Into<String>) -> Self {
        self.config.filter_category = category.into();
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Result<Self, OrteliusError> {
        if timeout.is_zero() {
            return Err(OrteliusError::ConfigError(
                "timeout must be non-zero".to_owned(),
            ));
        }
        self.config.timeout = timeout;
        Ok(self)
    }

    /// Identify the client to the service with a custom user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Result<Self, OrteliusError> {
        let agent = agent.into();
        if agent.trim().is_empty() {
            return Err(OrteliusError::ConfigError(
                "user agent must not be empty".to_owned(),
            ));
        }
        self.config.user_agent = agent;
        Ok(self)
    }

    /// Build the final configuration
    pub fn build(self) -> SearchConfig {
        self.config
    }
}
