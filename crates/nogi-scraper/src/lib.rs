//! Review-site lookup: matches a place name to a Tabelog listing by
//! scraping the site's search and detail pages.

pub mod client;
pub mod error;
pub mod matcher;
pub mod parse;
pub mod types;

pub use client::{MatcherConfig, TabelogMatcher};
pub use error::ScraperError;
pub use matcher::ReviewSiteMatcher;
pub use types::{ReviewRating, ReviewSiteMatch};
