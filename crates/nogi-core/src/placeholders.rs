//! Display strings substituted when a source has nothing to show.

/// Review site reached, but the search produced no listing.
pub const REVIEW_SITE_NOT_FOUND: &str = "見つかりませんでした";

/// Review site lookup failed (transport, timeout, or non-2xx).
pub const REVIEW_SITE_FETCH_FAILED: &str = "取得失敗";

/// Listing found, but its page has no rating element.
pub const REVIEW_SITE_UNRATED: &str = "評価なし";

/// Shown by presenters when the filtered result list is empty.
pub const NO_RESULTS_NOTICE: &str = "該当する店舗が見つかりませんでした。";

/// Prefix for the message shown when the places search itself fails.
pub const PLACES_API_FAILURE: &str = "APIリクエストに失敗しました";
