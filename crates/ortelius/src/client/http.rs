//! HTTP transport against the service's search endpoint.

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, instrument};

use super::{Geocoder, Result, wire};
use crate::{candidate::Candidate, config::SearchConfig, query::search_url};

/// HTTP implementation of [`Geocoder`].
///
/// One GET per search with the configured timeout and user agent. Caches are
/// bypassed on every request: the service's answers change over time and a
/// stale page would mislead the user.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: reqwest::Client,
    config: SearchConfig,
}

impl GeocodeClient {
    /// Create a client from `config`.
    pub fn new(config: SearchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[async_trait]
impl Geocoder for GeocodeClient {
    #[instrument(name = "Geocode Fetch", level = "debug", skip_all, fields(query = %query))]
    async fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        let url = search_url(&self.config, query);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        let candidates = wire::decode_candidates(&body)?;
        debug!(count = candidates.len(), "decoded candidates");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{client::FetchError, config::SearchConfigBuilder};

    fn client_for(server: &mockito::ServerGuard) -> GeocodeClient {
        let config = SearchConfigBuilder::new()
            .endpoint(server.url())
            .unwrap()
            .build();
        GeocodeClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_search_decodes_candidates() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::UrlEncoded("q".into(), "london".into()))
            .with_status(200)
            .with_body(
                r#"[{"display_name": "London", "lat": "51.5", "lon": "-0.12",
                     "importance": 0.9, "type": "administrative"}]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let candidates = client.search("london").await.unwrap();

        mock.assert_async().await;
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].display_name, "London");
        assert_eq!(candidates[0].category, "administrative");
    }

    #[tokio::test]
    async fn test_search_sends_fixed_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("format".into(), "json".into()),
                mockito::Matcher::UrlEncoded("q".into(), "new york".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "50".into()),
                mockito::Matcher::UrlEncoded("accept-language".into(), "en-US".into()),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        client.search("new york").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = client_for(&server);
        let error = client.search("london").await.unwrap_err();
        assert!(matches!(error, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Nothing listens on this port once the server guard is dropped.
        let url = {
            let server = mockito::Server::new_async().await;
            server.url()
        };
        let config = SearchConfigBuilder::new().endpoint(url).unwrap().build();
        let client = GeocodeClient::new(config).unwrap();

        let error = client.search("london").await.unwrap_err();
        assert!(matches!(error, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"error": "not an array"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let error = client.search("london").await.unwrap_err();
        assert!(matches!(error, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_records_without_coordinates_are_dropped() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"[{"display_name": "Z"},
                    {"display_name": "kept", "lat": "1.0", "lon": "2.0"}]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let candidates = client.search("z").await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].display_name, "kept");
    }
}
