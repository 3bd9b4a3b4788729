//! HTML extraction for Tabelog search and detail pages.
//!
//! Both selectors track Tabelog's current markup. If the site changes its
//! class names, only this module needs to follow.

use std::sync::LazyLock;

use scraper::{Html, Selector};

/// Listing-name anchor on a search results page.
pub const LISTING_ANCHOR_SELECTOR: &str = "a.list-rst__rst-name-target";

/// Score element on a listing detail page.
pub const RATING_SELECTOR: &str = "b.c-rating__val";

static LISTING_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(LISTING_ANCHOR_SELECTOR).expect("valid listing selector"));

static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(RATING_SELECTOR).expect("valid rating selector"));

/// What the first listing anchor on a search results page looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstListing {
    /// The page lists no results.
    Absent,
    /// A listing is there but its `href` is missing or blank.
    Unlinked,
    Href(String),
}

/// Inspects the first listing anchor on a search results page.
#[must_use]
pub fn first_listing(html: &str) -> FirstListing {
    let document = Html::parse_document(html);
    let Some(anchor) = document.select(&LISTING_ANCHOR).next() else {
        return FirstListing::Absent;
    };

    match anchor.value().attr("href").map(str::trim) {
        Some(href) if !href.is_empty() => FirstListing::Href(href.to_owned()),
        _ => FirstListing::Unlinked,
    }
}

/// Trimmed text of the first rating element on a detail page.
#[must_use]
pub fn rating_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&RATING)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}
