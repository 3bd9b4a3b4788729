//! Aggregation pipeline orchestration.

use chrono::Weekday;
use futures::stream::{self, StreamExt};
use nogi_core::{AppConfig, Clock, DisplayRecord, PlaceQuery, SystemClock};
use nogi_places::{PlacesClient, PlacesConfig, RawPlace};
use nogi_scraper::{MatcherConfig, ReviewSiteMatcher, TabelogMatcher};

use crate::error::PipelineError;
use crate::merge::merge_record;
use crate::source::PlaceSource;

const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Searches places, enriches each with a review-site lookup, and returns
/// the qualifying records in API order.
pub struct AggregationPipeline<S, M, C = SystemClock> {
    source: S,
    matcher: M,
    clock: C,
    max_concurrent: usize,
}

impl AggregationPipeline<PlacesClient, TabelogMatcher, SystemClock> {
    /// Builds the production pipeline: Places API, Tabelog, system clock.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Places`] with `MissingCredential` when no API key
    ///   is configured, or if the places client cannot be built.
    /// - [`PipelineError::Matcher`] if the review-site client cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let source = PlacesClient::new(&PlacesConfig::from_app_config(config))?;
        let matcher = TabelogMatcher::new(&MatcherConfig::from_app_config(config))?;
        Ok(AggregationPipeline::new(source, matcher)
            .with_max_concurrent(config.max_concurrent_matches))
    }
}

impl<S, M> AggregationPipeline<S, M, SystemClock>
where
    S: PlaceSource,
    M: ReviewSiteMatcher,
{
    #[must_use]
    pub fn new(source: S, matcher: M) -> Self {
        Self {
            source,
            matcher,
            clock: SystemClock,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }
}

impl<S, M, C> AggregationPipeline<S, M, C>
where
    S: PlaceSource,
    M: ReviewSiteMatcher,
    C: Clock,
{
    /// Replaces the source of "today" used for hours emphasis.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> AggregationPipeline<S, M, C2> {
        AggregationPipeline {
            source: self.source,
            matcher: self.matcher,
            clock,
            max_concurrent: self.max_concurrent,
        }
    }

    /// Caps in-flight review-site lookups. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Runs one search end to end.
    ///
    /// 1. Search places once. Failure ends the run.
    /// 2. Drop places rated below `query.min_rating()`.
    /// 3. Look up every remaining place on the review site, at most
    ///    `max_concurrent` at a time.
    /// 4. Merge each into a [`DisplayRecord`], slotted back by its original
    ///    index so completion order never affects output order.
    ///
    /// An empty result is `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Places`] if the places search fails. Review
    /// site failures are per-record placeholders, never errors.
    pub async fn run(&self, query: &PlaceQuery) -> Result<Vec<DisplayRecord>, PipelineError> {
        let places = self.source.search(query).await?;
        let total = places.len();

        // Filtering first spends no scrape requests on places that would be
        // discarded; the filter only reads the map rating.
        let qualifying: Vec<RawPlace> = places
            .into_iter()
            .filter(|p| {
                let keep = query.accepts(p.rating);
                if !keep {
                    tracing::debug!(name = %p.name, rating = p.rating, "below rating threshold");
                }
                keep
            })
            .collect();

        let today = self.clock.today();
        let mut slots: Vec<Option<DisplayRecord>> = vec![None; qualifying.len()];

        let mut completed = stream::iter(qualifying.into_iter().enumerate())
            .map(|(idx, place)| async move { (idx, self.enrich(place, today).await) })
            .buffer_unordered(self.max_concurrent);

        while let Some((idx, record)) = completed.next().await {
            slots[idx] = Some(record);
        }

        let records: Vec<DisplayRecord> = slots.into_iter().flatten().collect();

        tracing::info!(
            total,
            kept = records.len(),
            min_rating = query.min_rating(),
            "aggregation run complete"
        );

        Ok(records)
    }

    async fn enrich(&self, place: RawPlace, today: Weekday) -> DisplayRecord {
        let review = self.matcher.find_listing(&place.name).await;
        merge_record(place, review, today)
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
