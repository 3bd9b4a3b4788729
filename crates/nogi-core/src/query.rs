use thiserror::Error;

/// Lowest selectable rating threshold.
pub const MIN_RATING_THRESHOLD: f64 = 2.0;
/// Highest selectable rating threshold.
pub const MAX_RATING_THRESHOLD: f64 = 5.0;
/// Threshold used when the caller does not pick one.
pub const DEFAULT_RATING_THRESHOLD: f64 = 3.0;

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("minimum rating {0} is outside 2.0..=5.0")]
    RatingOutOfRange(f64),
}

/// One search request: where, what, and how good it must be.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    area: String,
    keyword: String,
    min_rating: f64,
}

impl PlaceQuery {
    /// # Errors
    ///
    /// Returns [`QueryError::RatingOutOfRange`] when `min_rating` is not a
    /// finite value within [`MIN_RATING_THRESHOLD`]..=[`MAX_RATING_THRESHOLD`].
    pub fn new(
        area: impl Into<String>,
        keyword: impl Into<String>,
        min_rating: f64,
    ) -> Result<Self, QueryError> {
        if !(MIN_RATING_THRESHOLD..=MAX_RATING_THRESHOLD).contains(&min_rating) {
            return Err(QueryError::RatingOutOfRange(min_rating));
        }
        Ok(Self {
            area: area.into(),
            keyword: keyword.into(),
            min_rating,
        })
    }

    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Free-text query sent to the places search: `"<area> AND <keyword>"`.
    #[must_use]
    pub fn text_query(&self) -> String {
        format!("{} AND {}", self.area, self.keyword)
    }

    /// Whether a place rated `rating` on the map passes this query's threshold.
    #[must_use]
    pub fn accepts(&self, rating: f64) -> bool {
        rating >= self.min_rating
    }
}
