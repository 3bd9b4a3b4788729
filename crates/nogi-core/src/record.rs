use serde::{Deserialize, Serialize};

/// How the review-site lookup for a record ended.
///
/// Presenters show the same kind of placeholder for `NotFound` and
/// `FetchError`; the status keeps them apart for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSiteStatus {
    Found,
    NotFound,
    FetchError,
}

/// One merged result card, ready for a presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub name: String,
    pub address: Option<String>,
    /// Map rating; `0.0` when the places API had none.
    pub map_rating: f64,
    /// Review-site rating, or a placeholder from [`crate::placeholders`].
    pub review_site_rating: String,
    pub map_link: String,
    pub social_search_link: String,
    /// Listing URL, or a placeholder from [`crate::placeholders`].
    pub review_site_link: String,
    pub review_site_status: ReviewSiteStatus,
    /// Weekday lines joined with `<br>`, today's name wrapped in `<b>`.
    /// Upstream text is already escaped, so this can be rendered as markup.
    pub formatted_hours: String,
}
