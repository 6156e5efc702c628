//! URL input seam for the matcher.
//!
//! [`UrlConvertible`] abstracts over the string-like things callers hand to
//! [`match_url`](crate::matcher::UrlMatcher::match_url): `&str`, `String`,
//! and a parsed [`url::Url`]. The trait also carries the query-string
//! helpers so every input type decodes parameters the same way.

use std::borrow::Cow;
use std::collections::HashMap;

/// A type that can be treated as a URL by the matcher
///
/// Only [`url_str`](UrlConvertible::url_str) is required; the remaining
/// methods have default implementations driven by the raw string.
pub trait UrlConvertible {
    /// The raw URL text this value represents
    fn url_str(&self) -> &str;

    /// The URL's scheme, if it has one
    ///
    /// Returns the text before the first `:` when it looks like a scheme
    /// (non-empty, ASCII alphanumeric plus `+` `-` `.`). A URL such as
    /// `/users/10` or `a/b?k=v` has no scheme.
    fn scheme(&self) -> Option<&str> {
        scheme_of(self.url_str())
    }

    /// Query parameters as ordered key-value pairs
    ///
    /// Pairs are split on `&`, each pair on the first `=` only, so
    /// `a=b=c` yields `("a", "b=c")`. Pairs without `=` are dropped.
    /// Values are percent-decoded; keys are kept verbatim. `+` is left
    /// alone rather than decoded to a space. Everything after the first
    /// `#` is ignored.
    fn query_pairs(&self) -> Vec<(String, String)> {
        match query_str(self.url_str()) {
            Some(query) => query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .map(|(key, value)| (key.to_string(), decode_component(value)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Query parameters keyed by name, duplicate keys resolved last-wins
    fn query_parameters(&self) -> HashMap<String, String> {
        self.query_pairs().into_iter().collect()
    }
}

impl UrlConvertible for str {
    fn url_str(&self) -> &str {
        self
    }
}

impl UrlConvertible for String {
    fn url_str(&self) -> &str {
        self
    }
}

impl UrlConvertible for url::Url {
    fn url_str(&self) -> &str {
        self.as_str()
    }

    fn scheme(&self) -> Option<&str> {
        Some(url::Url::scheme(self))
    }
}

/// Extract the scheme from a raw URL string.
///
/// Everything before the first `:` qualifies as long as it is non-empty
/// and built from scheme characters. Stricter than a full URL parse on
/// purpose: relative inputs like `user/<id>` must not grow a scheme.
pub(crate) fn scheme_of(url: &str) -> Option<&str> {
    let idx = url.find(':')?;
    let scheme = &url[..idx];
    if scheme.is_empty()
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    Some(scheme)
}

/// The query portion of a URL, without the leading `?`.
fn query_str(url: &str) -> Option<&str> {
    let before_fragment = match url.split_once('#') {
        Some((head, _)) => head,
        None => url,
    };
    before_fragment.split_once('?').map(|(_, query)| query)
}

/// Percent-decode a query value, falling back to the raw text when the
/// encoding is invalid UTF-8.
fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}
