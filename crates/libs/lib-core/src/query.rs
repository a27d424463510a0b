//! # Query Parameters
//!
//! Reads the page's query string into an immutable key/value map. The browser crate does
//! this once per page load; after that the map is only read.
//!
//! Parsing follows `application/x-www-form-urlencoded`: `+` is a space, percent escapes are
//! decoded, and when a key repeats the last occurrence wins. An empty key (`?=v`) is kept,
//! as `URLSearchParams` does.
//!
//! ```rust
//! use lib_core::query::QueryParams;
//!
//! let params = QueryParams::parse("?user_id=123&session_id=abc");
//! assert_eq!(params.user_id(), Some("123"));
//! assert_eq!(params.session_id(), Some("abc"));
//! ```

use std::collections::BTreeMap;

use url::form_urlencoded;

pub const USER_ID: &str = "user_id";
pub const SESSION_ID: &str = "session_id";

/// Identifiers that are always forwarded to the webhook when present.
pub const IDENTIFIER_KEYS: &[&str] = &[USER_ID, SESSION_ID];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, String>,
}

impl QueryParams {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let values = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { values }
    }

    /// Raw value for `key`, including empty strings.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// `user_id`, absent when missing or empty.
    pub fn user_id(&self) -> Option<&str> {
        self.non_empty(USER_ID)
    }

    /// `session_id`, absent when missing or empty.
    pub fn session_id(&self) -> Option<&str> {
        self.non_empty(SESSION_ID)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parameters to forward into the webhook payload.
    ///
    /// With `forward_all` every non-empty parameter is included; otherwise only the
    /// identifiers in [`IDENTIFIER_KEYS`]. Empty values are never forwarded.
    pub fn propagated(&self, forward_all: bool) -> BTreeMap<String, String> {
        self.values
            .iter()
            .filter(|(key, value)| {
                !value.is_empty() && (forward_all || IDENTIFIER_KEYS.contains(&key.as_str()))
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        let params = QueryParams::parse("?user_id=A&session_id=B");
        let collected: Vec<_> = params.iter().collect();
        assert_eq!(collected, vec![("session_id", "B"), ("user_id", "A")]);
        assert_eq!(params.user_id(), Some("A"));
        assert_eq!(params.session_id(), Some("B"));
    }

    #[test]
    fn test_empty_query() {
        for search in ["", "?", "?&&"] {
            let params = QueryParams::parse(search);
            assert!(params.is_empty(), "expected empty for {:?}", search);
            assert_eq!(params.user_id(), None);
            assert_eq!(params.session_id(), None);
        }
    }

    #[test]
    fn test_leading_question_mark_is_optional() {
        assert_eq!(QueryParams::parse("a=1"), QueryParams::parse("?a=1"));
    }

    #[test]
    fn test_all_keys_verbatim() {
        let params = QueryParams::parse("?utm_source=mail&ref=landing&user_id=7");
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("utm_source"), Some("mail"));
        assert_eq!(params.get("ref"), Some("landing"));
        assert_eq!(params.get("user_id"), Some("7"));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let params = QueryParams::parse("?user_id=first&user_id=second");
        assert_eq!(params.user_id(), Some("second"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_decoding() {
        let params = QueryParams::parse("?name=John+Doe&city=%D0%9C%D0%BE%D1%81%D0%BA%D0%B2%D0%B0&flag");
        assert_eq!(params.get("name"), Some("John Doe"));
        assert_eq!(params.get("city"), Some("Москва"));
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn test_empty_identifier_is_absent() {
        let params = QueryParams::parse("?user_id=&session_id=s");
        assert_eq!(params.get("user_id"), Some(""));
        assert_eq!(params.user_id(), None);
        assert_eq!(params.session_id(), Some("s"));
    }

    #[test]
    fn test_empty_key_is_kept() {
        let params = QueryParams::parse("?=orphan&user_id=1");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get(""), Some("orphan"));
        assert_eq!(params.propagated(true).get(""), Some(&"orphan".to_string()));
        assert_eq!(params.propagated(false).len(), 1);
    }

    #[test]
    fn test_propagated() {
        let params = QueryParams::parse("?user_id=1&session_id=&utm_source=ads");

        let all = params.propagated(true);
        assert_eq!(all.len(), 2);
        assert_eq!(all["user_id"], "1");
        assert_eq!(all["utm_source"], "ads");

        let identifiers = params.propagated(false);
        assert_eq!(identifiers.len(), 1);
        assert_eq!(identifiers["user_id"], "1");
    }
}
