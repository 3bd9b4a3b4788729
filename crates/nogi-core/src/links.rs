//! Deterministic search links built from a place's display name.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const INSTAGRAM_KEYWORD_SEARCH: &str = "https://www.instagram.com/explore/search/keyword/?q=";

/// Characters left unescaped in a query component: RFC 3986 unreserved
/// characters plus `/`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes `value` for use as a single query-string value.
///
/// `%` is always escaped, so distinct inputs produce distinct outputs.
#[must_use]
pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Instagram keyword-search URL for `name`. No network access.
#[must_use]
pub fn instagram_search_url(name: &str) -> String {
    format!("{INSTAGRAM_KEYWORD_SEARCH}{}", encode_query_component(name))
}
