use nogi_places::PlacesError;
use nogi_scraper::ScraperError;
use thiserror::Error;

/// Pipeline-fatal errors. Per-place review-site failures never appear here.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The bulk places search failed; there is nothing to show.
    #[error(transparent)]
    Places(#[from] PlacesError),

    /// The review-site matcher could not be constructed.
    #[error("review site matcher setup failed: {0}")]
    Matcher(#[from] ScraperError),
}
