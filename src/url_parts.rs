//! URL decomposition for request summaries
//!
//! Pulls out the pieces the summary view needs: the host, the last non-empty
//! path segment (the "name" shown in a request list), and the query
//! parameters in their original order with duplicate keys preserved.

use thiserror::Error;
use url::Url;

/// Errors for URL decomposition
#[derive(Error, Debug)]
pub enum UrlError {
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Decomposed pieces of a request URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub host: String,
    /// Last non-empty `/`-delimited path component, or empty if none
    pub name: String,
    /// Query pairs in query-string order; duplicate keys kept as separate pairs
    pub query_params: Vec<(String, String)>,
}

/// Decompose a raw URL string
///
/// Fails with `InvalidUrl` when the string cannot be parsed; the caller
/// decides whether to skip the record or propagate.
pub fn decompose(raw: &str) -> Result<UrlParts, UrlError> {
    let url = Url::parse(raw).map_err(|source| UrlError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    let name = url
        .path()
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
        .to_string();

    let query_params = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    Ok(UrlParts {
        host: url.host_str().unwrap_or_default().to_string(),
        name,
        query_params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_decompose() {
        let parts = decompose("https://a.test/x?y=1").unwrap();
        assert_eq!(parts.host, "a.test");
        assert_eq!(parts.name, "x");
        assert_eq!(
            parts.query_params,
            vec![("y".to_string(), "1".to_string())]
        );
    }

    #[test]
    fn test_deep_path_takes_last_segment() {
        let parts = decompose("https://cdn.example.com/assets/js/app.min.js").unwrap();
        assert_eq!(parts.host, "cdn.example.com");
        assert_eq!(parts.name, "app.min.js");
        assert!(parts.query_params.is_empty());
    }

    #[test]
    fn test_trailing_slash_skips_empty_segment() {
        let parts = decompose("https://a.test/docs/").unwrap();
        assert_eq!(parts.name, "docs");
    }

    #[test]
    fn test_root_path_has_empty_name() {
        let parts = decompose("https://a.test/").unwrap();
        assert_eq!(parts.name, "");
        let parts = decompose("https://a.test").unwrap();
        assert_eq!(parts.name, "");
    }

    #[test]
    fn test_duplicate_query_keys_preserved_in_order() {
        let parts = decompose("https://a.test/search?q=one&lang=en&q=two").unwrap();
        assert_eq!(
            parts.query_params,
            vec![
                ("q".to_string(), "one".to_string()),
                ("lang".to_string(), "en".to_string()),
                ("q".to_string(), "two".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = decompose("not a url").unwrap_err();
        assert!(matches!(err, UrlError::InvalidUrl { .. }));
    }

    #[test]
    fn test_percent_encoded_query_values_decoded() {
        let parts = decompose("https://a.test/p?msg=hello%20world").unwrap();
        assert_eq!(
            parts.query_params,
            vec![("msg".to_string(), "hello world".to_string())]
        );
    }
}
