//! Two-hop listing lookup: search page, first hit, detail page.
//!
//! Matching is by construction "first search result for the exact name
//! string". There is no scoring and no address check, so a chain branch or
//! a similarly named shop can win over the intended one.

use std::future::Future;

use reqwest::Url;

use crate::client::TabelogMatcher;
use crate::error::ScraperError;
use crate::parse::{first_listing, rating_text, FirstListing};
use crate::types::{ReviewRating, ReviewSiteMatch};

/// Looks up a place on a review site by display name.
///
/// Implementations are best-effort and infallible from the caller's view:
/// every failure becomes [`ReviewSiteMatch::FetchError`].
pub trait ReviewSiteMatcher: Send + Sync {
    fn find_listing(&self, name: &str) -> impl Future<Output = ReviewSiteMatch> + Send;
}

impl ReviewSiteMatcher for TabelogMatcher {
    async fn find_listing(&self, name: &str) -> ReviewSiteMatch {
        match self.lookup(name).await {
            Ok(Some((url, rating))) => {
                tracing::debug!(name, url = %url, ?rating, "review site listing found");
                ReviewSiteMatch::Found {
                    url: url.to_string(),
                    rating,
                }
            }
            Ok(None) => {
                tracing::info!(name, "no review site listing for name");
                ReviewSiteMatch::NotFound
            }
            Err(e) => {
                tracing::warn!(name, error = %e, "review site lookup failed");
                ReviewSiteMatch::FetchError {
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl TabelogMatcher {
    /// `Ok(None)` means the search page loaded and listed nothing. A listing
    /// that cannot be followed is an error, not a miss.
    async fn lookup(&self, name: &str) -> Result<Option<(Url, ReviewRating)>, ScraperError> {
        let search_url = self.search_url(name)?;
        let search_html = self.fetch_html(&search_url).await?;

        let href = match first_listing(&search_html) {
            FirstListing::Href(href) => href,
            FirstListing::Absent => return Ok(None),
            FirstListing::Unlinked => {
                return Err(ScraperError::UnlinkedListing {
                    search_url: search_url.to_string(),
                });
            }
        };

        let listing_url = search_url
            .join(&href)
            .map_err(|e| ScraperError::InvalidUrl {
                url: href.clone(),
                reason: e.to_string(),
            })?;

        let detail_html = self.fetch_html(&listing_url).await?;
        let rating = rating_text(&detail_html).map_or(ReviewRating::Unrated, ReviewRating::Value);

        Ok(Some((listing_url, rating)))
    }
}
