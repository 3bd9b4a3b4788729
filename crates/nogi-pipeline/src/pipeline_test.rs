use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use nogi_core::placeholders::{REVIEW_SITE_FETCH_FAILED, REVIEW_SITE_NOT_FOUND};
use nogi_core::{FixedClock, ReviewSiteStatus};
use nogi_places::PlacesError;
use nogi_scraper::{ReviewRating, ReviewSiteMatch};

use super::*;

fn raw(name: &str, rating: f64) -> RawPlace {
    RawPlace {
        name: name.to_string(),
        address: None,
        rating,
        map_link: format!("https://maps.google.com/?q={name}"),
        weekday_hours: vec!["火曜日: 11時00分～22時00分".to_string()],
    }
}

fn query(min_rating: f64) -> PlaceQuery {
    PlaceQuery::new("銀座", "焼肉", min_rating).expect("valid query")
}

/// Returns a fixed place list, or fails with a fixed API error.
enum StaticSource {
    Places(Vec<RawPlace>),
    Fails { status: u16, body: &'static str },
}

impl PlaceSource for StaticSource {
    async fn search(&self, _query: &PlaceQuery) -> Result<Vec<RawPlace>, PlacesError> {
        match self {
            Self::Places(places) => Ok(places.clone()),
            Self::Fails { status, body } => Err(PlacesError::Api {
                status: *status,
                body: (*body).to_string(),
            }),
        }
    }
}

/// Answers from a table keyed by name, defaulting to `NotFound`, and
/// records calls plus peak concurrency.
#[derive(Default)]
struct ScriptedMatcher {
    outcomes: HashMap<String, ReviewSiteMatch>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedMatcher {
    fn with_outcome(mut self, name: &str, outcome: ReviewSiteMatch) -> Self {
        self.outcomes.insert(name.to_string(), outcome);
        self
    }

    fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl ReviewSiteMatcher for ScriptedMatcher {
    async fn find_listing(&self, name: &str) -> ReviewSiteMatch {
        self.calls.lock().expect("calls lock").push(name.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self.delays.get(name).copied().unwrap_or(Duration::from_millis(5));
        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.outcomes
            .get(name)
            .cloned()
            .unwrap_or(ReviewSiteMatch::NotFound)
    }
}

fn pipeline(
    source: StaticSource,
    matcher: ScriptedMatcher,
) -> AggregationPipeline<StaticSource, ScriptedMatcher, FixedClock> {
    AggregationPipeline::new(source, matcher).with_clock(FixedClock(Weekday::Tue))
}

#[tokio::test]
async fn keeps_only_places_at_or_above_threshold() {
    let p = pipeline(
        StaticSource::Places(vec![raw("A", 4.5), raw("B", 2.0)]),
        ScriptedMatcher::default(),
    );

    let records = p.run(&query(3.0)).await.expect("run should succeed");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "A");
}

#[tokio::test]
async fn threshold_is_inclusive() {
    let p = pipeline(
        StaticSource::Places(vec![raw("edge", 3.5), raw("under", 3.49)]),
        ScriptedMatcher::default(),
    );

    let records = p.run(&query(3.5)).await.unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["edge"]);
}

#[tokio::test]
async fn missing_rating_defaults_to_zero_and_is_excluded() {
    let p = pipeline(
        StaticSource::Places(vec![raw("unrated", 0.0), raw("rated", 4.0)]),
        ScriptedMatcher::default(),
    );

    let records = p.run(&query(2.0)).await.unwrap();
    assert!(records.iter().all(|r| r.name != "unrated"));
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn output_preserves_input_order_regardless_of_completion_order() {
    // Earlier places finish last.
    let matcher = ScriptedMatcher::default()
        .with_delay("p0", Duration::from_millis(80))
        .with_delay("p1", Duration::from_millis(60))
        .with_delay("p2", Duration::from_millis(40))
        .with_delay("p3", Duration::from_millis(20))
        .with_delay("p4", Duration::from_millis(1));

    let places = vec![
        raw("p0", 4.0),
        raw("p1", 2.5),
        raw("p2", 4.1),
        raw("p3", 3.9),
        raw("p4", 4.8),
    ];
    let p = pipeline(StaticSource::Places(places), matcher).with_max_concurrent(5);

    let records = p.run(&query(3.0)).await.unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["p0", "p2", "p3", "p4"]);
}

#[tokio::test]
async fn output_never_exceeds_input_and_always_meets_threshold() {
    let ratings = [0.0, 2.0, 2.9, 3.0, 3.1, 4.4, 5.0, 1.0];
    let places: Vec<RawPlace> = ratings
        .iter()
        .enumerate()
        .map(|(i, r)| raw(&format!("p{i}"), *r))
        .collect();
    let input_len = places.len();
    let p = pipeline(StaticSource::Places(places), ScriptedMatcher::default());

    let q = query(3.0);
    let records = p.run(&q).await.unwrap();

    assert!(records.len() <= input_len);
    assert!(records.iter().all(|r| r.map_rating >= q.min_rating()));
    assert_eq!(records.len(), 4);
}

#[tokio::test]
async fn concurrency_stays_within_bound() {
    let places: Vec<RawPlace> = (0..10).map(|i| raw(&format!("p{i}"), 4.0)).collect();
    let mut matcher = ScriptedMatcher::default();
    for i in 0..10 {
        matcher = matcher.with_delay(&format!("p{i}"), Duration::from_millis(20));
    }
    let p = pipeline(StaticSource::Places(places), matcher).with_max_concurrent(3);

    let records = p.run(&query(3.0)).await.unwrap();

    assert_eq!(records.len(), 10);
    let peak = p.matcher.peak_in_flight.load(Ordering::SeqCst);
    assert!(peak <= 3, "peak in-flight lookups was {peak}");
    assert!(peak >= 2, "lookups did not overlap (peak {peak})");
}

#[tokio::test]
async fn places_error_short_circuits_without_lookups() {
    let p = pipeline(
        StaticSource::Fails {
            status: 403,
            body: "PERMISSION_DENIED",
        },
        ScriptedMatcher::default(),
    );

    let err = p.run(&query(3.0)).await.expect_err("should fail");

    assert!(
        matches!(
            err,
            PipelineError::Places(PlacesError::Api { status: 403, ref body }) if body == "PERMISSION_DENIED"
        ),
        "expected Api error, got: {err:?}"
    );
    assert!(p.matcher.calls().is_empty());
}

#[tokio::test]
async fn empty_search_is_ok_and_empty() {
    let p = pipeline(StaticSource::Places(vec![]), ScriptedMatcher::default());
    let records = p.run(&query(3.0)).await.expect("empty is not an error");
    assert!(records.is_empty());
}

#[tokio::test]
async fn all_filtered_out_is_ok_and_empty() {
    let p = pipeline(
        StaticSource::Places(vec![raw("low", 2.1)]),
        ScriptedMatcher::default(),
    );
    let records = p.run(&query(4.0)).await.unwrap();
    assert!(records.is_empty());
    assert!(p.matcher.calls().is_empty(), "filtered places are not looked up");
}

#[tokio::test]
async fn one_failed_lookup_does_not_affect_siblings() {
    let matcher = ScriptedMatcher::default()
        .with_outcome(
            "ok",
            ReviewSiteMatch::Found {
                url: "https://tabelog.com/tokyo/A1/A1/1/".to_string(),
                rating: ReviewRating::Value("3.70".to_string()),
            },
        )
        .with_outcome(
            "broken",
            ReviewSiteMatch::FetchError {
                reason: "connection reset".to_string(),
            },
        );

    let p = pipeline(
        StaticSource::Places(vec![raw("ok", 4.0), raw("broken", 4.0), raw("missing", 4.0)]),
        matcher,
    );

    let records = p.run(&query(3.0)).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].review_site_rating, "3.70");
    assert_eq!(records[0].review_site_status, ReviewSiteStatus::Found);
    assert_eq!(records[1].review_site_rating, REVIEW_SITE_FETCH_FAILED);
    assert_eq!(records[1].review_site_status, ReviewSiteStatus::FetchError);
    assert_eq!(records[2].review_site_rating, REVIEW_SITE_NOT_FOUND);
    assert_eq!(records[2].review_site_status, ReviewSiteStatus::NotFound);
}

#[tokio::test]
async fn hours_use_injected_clock() {
    let p = pipeline(
        StaticSource::Places(vec![raw("A", 4.5)]),
        ScriptedMatcher::default(),
    );
    let records = p.run(&query(3.0)).await.unwrap();
    assert_eq!(records[0].formatted_hours, "<b>火曜日</b>: 11時00分～22時00分");

    let p = p.with_clock(FixedClock(Weekday::Wed));
    let records = p.run(&query(3.0)).await.unwrap();
    assert_eq!(records[0].formatted_hours, "火曜日: 11時00分～22時00分");
}

#[tokio::test]
async fn matcher_is_called_with_exact_display_name() {
    let p = pipeline(
        StaticSource::Places(vec![raw("焼肉 太郎 銀座店", 4.5)]),
        ScriptedMatcher::default(),
    );
    p.run(&query(3.0)).await.unwrap();
    assert_eq!(p.matcher.calls(), ["焼肉 太郎 銀座店"]);
}
