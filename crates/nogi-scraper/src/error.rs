use thiserror::Error;

/// Failures inside a review-site lookup.
///
/// These never leave the matcher: [`crate::ReviewSiteMatcher::find_listing`]
/// folds every one of them into [`crate::ReviewSiteMatch::FetchError`].
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("first listing on {search_url} has no link")]
    UnlinkedListing { search_url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
