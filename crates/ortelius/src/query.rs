//! Query text encoding and search URL assembly.
//!
//! The geocoding service takes the free-text query inside the `q=` parameter.
//! Encoding is idempotent: text that already carries percent escapes is
//! decoded once before re-encoding, so `%20` never becomes `%2520` when a
//! user pastes a pre-encoded string into the search box.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use tracing::trace;
use url::Url;

use crate::config::{FALLBACK_LANGUAGE, SearchConfig};

/// Characters left unescaped in the query value, beyond ASCII alphanumerics:
/// `/ ? - . _ ~`.
const QUERY_KEEP: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'?')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `text` for use as a `q=` parameter value.
///
/// Pre-existing percent escapes are decoded first. Input whose escapes do not
/// decode to valid UTF-8 is encoded as given.
#[must_use]
pub fn encode_query(text: &str) -> String {
    let decoded = percent_decode_str(text)
        .decode_utf8()
        .map_or_else(|_| text.to_owned(), |decoded| decoded.into_owned());
    utf8_percent_encode(&decoded, QUERY_KEEP).to_string()
}

/// Build the full search URL for `text` under `config`.
///
/// Appends `/search` to the configured endpoint, preserving any path prefix,
/// and attaches the fixed parameter set
/// `format=json&q=<encoded>&limit=<n>&accept-language=<tag>`.
#[must_use]
pub fn search_url(config: &SearchConfig, text: &str) -> Url {
    let mut url = config.endpoint.clone();
    let path = format!("{}/search", url.path().trim_end_matches('/'));
    url.set_path(&path);
    let query = format!(
        "format=json&q={}&limit={}&accept-language={}",
        encode_query(text),
        config.result_limit,
        config.language.as_deref().unwrap_or(FALLBACK_LANGUAGE),
    );
    url.set_query(Some(&query));
    trace!(%url, "built search url");
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfigBuilder;

    #[test]
    fn test_encode_escapes_reserved_characters() {
        assert_eq!(encode_query("new york"), "new%20york");
        assert_eq!(encode_query("fish & chips"), "fish%20%26%20chips");
        assert_eq!(encode_query("a=b#c"), "a%3Db%23c");
        assert_eq!(encode_query("50+2"), "50%2B2");
    }

    #[test]
    fn test_encode_preserves_allowed_characters() {
        let untouched = "AZaz09/?-._~";
        assert_eq!(encode_query(untouched), untouched);
    }

    #[test]
    fn test_encode_utf8() {
        assert_eq!(encode_query("münchen"), "m%C3%BCnchen");
        assert_eq!(encode_query("東京"), "%E6%9D%B1%E4%BA%AC");
    }

    #[test]
    fn test_encode_is_idempotent() {
        let once = encode_query("new york");
        assert_eq!(encode_query(&once), once);

        let unicode = encode_query("münchen");
        assert_eq!(encode_query(&unicode), unicode);
    }

    #[test]
    fn test_encode_accepts_pre_encoded_input() {
        assert_eq!(encode_query("new%20york"), "new%20york");
        assert_eq!(encode_query("m%C3%BCnchen"), "m%C3%BCnchen");
    }

    #[test]
    fn test_encode_invalid_escape_sequence_is_escaped_literally() {
        // %FF does not decode to UTF-8, so the text is taken as given and the
        // percent sign itself gets escaped. The result is a fixed point.
        let encoded = encode_query("%FF");
        assert_eq!(encoded, "%25FF");
        assert_eq!(encode_query(&encoded), encoded);
    }

    #[test]
    fn test_search_url_with_defaults() {
        let config = SearchConfig::default();
        let url = search_url(&config, "new york");
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/search?format=json&q=new%20york&limit=50&accept-language=en-US"
        );
    }

    #[test]
    fn test_search_url_with_custom_config() {
        let config = SearchConfigBuilder::new()
            .endpoint("https://geo.example.com/nominatim")
            .unwrap()
            .language("de-DE")
            .result_limit(10)
            .unwrap()
            .build();
        let url = search_url(&config, "münchen");
        assert_eq!(
            url.as_str(),
            "https://geo.example.com/nominatim/search?format=json&q=m%C3%BCnchen&limit=10&accept-language=de-DE"
        );
    }

    #[test]
    fn test_search_url_trailing_slash_endpoint() {
        let config = SearchConfigBuilder::new()
            .endpoint("https://geo.example.com/prefix/")
            .unwrap()
            .build();
        let url = search_url(&config, "paris");
        assert_eq!(url.path(), "/prefix/search");
    }

    #[test]
    fn test_search_url_empty_query() {
        let config = SearchConfig::default();
        let url = search_url(&config, "");
        assert_eq!(
            url.query(),
            Some("format=json&q=&limit=50&accept-language=en-US")
        );
    }
}
