use nogi_core::ReviewSiteStatus;

/// Rating shown on a listing's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewRating {
    /// Rating text as displayed, e.g. `"3.58"`.
    Value(String),
    /// The detail page had no rating element.
    Unrated,
}

/// Outcome of looking up one place name on the review site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewSiteMatch {
    /// A listing was found. The rating may still be unknown.
    Found { url: String, rating: ReviewRating },
    /// The search page loaded but listed nothing.
    NotFound,
    /// A request failed, timed out, or returned non-2xx at either hop.
    FetchError { reason: String },
}

impl ReviewSiteMatch {
    #[must_use]
    pub fn status(&self) -> ReviewSiteStatus {
        match self {
            Self::Found { .. } => ReviewSiteStatus::Found,
            Self::NotFound => ReviewSiteStatus::NotFound,
            Self::FetchError { .. } => ReviewSiteStatus::FetchError,
        }
    }
}
