//! Normalization of one place and its review-site outcome into a record.

use chrono::Weekday;
use nogi_core::placeholders::{
    REVIEW_SITE_FETCH_FAILED, REVIEW_SITE_NOT_FOUND, REVIEW_SITE_UNRATED,
};
use nogi_core::{highlight_today, instagram_search_url, DisplayRecord};
use nogi_places::RawPlace;
use nogi_scraper::{ReviewRating, ReviewSiteMatch};

/// Builds the display record for `place`.
///
/// `NotFound` and `FetchError` put their placeholder in both the rating and
/// the link slot; `review_site_status` keeps the two apart.
#[must_use]
pub fn merge_record(place: RawPlace, review: ReviewSiteMatch, today: Weekday) -> DisplayRecord {
    let review_site_status = review.status();

    let (review_site_rating, review_site_link) = match review {
        ReviewSiteMatch::Found {
            url,
            rating: ReviewRating::Value(rating),
        } => (rating, url),
        ReviewSiteMatch::Found {
            url,
            rating: ReviewRating::Unrated,
        } => (REVIEW_SITE_UNRATED.to_string(), url),
        ReviewSiteMatch::NotFound => (
            REVIEW_SITE_NOT_FOUND.to_string(),
            REVIEW_SITE_NOT_FOUND.to_string(),
        ),
        ReviewSiteMatch::FetchError { .. } => (
            REVIEW_SITE_FETCH_FAILED.to_string(),
            REVIEW_SITE_FETCH_FAILED.to_string(),
        ),
    };

    DisplayRecord {
        social_search_link: instagram_search_url(&place.name),
        formatted_hours: highlight_today(&place.weekday_hours, today),
        name: place.name,
        address: place.address,
        map_rating: place.rating,
        review_site_rating,
        map_link: place.map_link,
        review_site_link,
        review_site_status,
    }
}
