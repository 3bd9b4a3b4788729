//! `search` command: run the aggregation pipeline once and print the result.

use std::fmt::Write as _;

use nogi_core::hours::LINE_BREAK;
use nogi_core::placeholders::{NO_RESULTS_NOTICE, PLACES_API_FAILURE};
use nogi_core::{AppConfig, DisplayRecord, PlaceQuery};
use nogi_pipeline::{AggregationPipeline, PipelineError};
use nogi_places::PlacesError;

/// Marks today's line in plain-text hours.
const TODAY_MARKER: &str = "▶ ";
const OTHER_DAY_INDENT: &str = "  ";

/// Runs one search and prints cards (or JSON) to stdout.
///
/// # Errors
///
/// Returns an error if the threshold is out of range, the Places credential
/// is missing, or the places search fails. A places API failure is reported
/// with its HTTP status and response body.
pub(crate) async fn run_search(
    config: &AppConfig,
    area: &str,
    keyword: &str,
    min_rating: f64,
    json: bool,
) -> anyhow::Result<()> {
    let query = PlaceQuery::new(area, keyword, min_rating)?;
    tracing::debug!(area, keyword, min_rating, json, "running search");
    let pipeline = AggregationPipeline::from_app_config(config)?;

    let records = match pipeline.run(&query).await {
        Ok(records) => records,
        Err(PipelineError::Places(PlacesError::Api { status, body })) => {
            anyhow::bail!("{PLACES_API_FAILURE}: {status}\n{body}");
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{NO_RESULTS_NOTICE}");
        return Ok(());
    }

    for record in &records {
        println!("{}", render_card(record));
    }

    Ok(())
}

/// Renders one record as a plain-text card.
fn render_card(record: &DisplayRecord) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "■ {}", record.name);
    if let Some(address) = &record.address {
        let _ = writeln!(card, "  住所: {address}");
    }
    let _ = writeln!(card, "  Googleマップ評価: {}", record.map_rating);
    let _ = writeln!(card, "  食べログ評価: {}", record.review_site_rating);
    let _ = writeln!(card, "  Googleマップ: {}", record.map_link);
    let _ = writeln!(card, "  Instagram検索: {}", record.social_search_link);
    let _ = writeln!(card, "  食べログ: {}", record.review_site_link);
    let _ = writeln!(card, "  営業時間:");
    for line in hours_as_plain_lines(&record.formatted_hours) {
        let _ = writeln!(card, "  {line}");
    }
    card
}

/// Converts the `<br>`/`<b>` hours markup into terminal lines, marking the
/// emphasized line instead of bolding it.
fn hours_as_plain_lines(formatted: &str) -> Vec<String> {
    formatted
        .split(LINE_BREAK)
        .map(|line| {
            if line.contains("<b>") {
                let plain = unescape_markup(&line.replace("<b>", "").replace("</b>", ""));
                format!("{TODAY_MARKER}{plain}")
            } else {
                format!("{OTHER_DAY_INDENT}{}", unescape_markup(line))
            }
        })
        .collect()
}

/// `&amp;` goes last so an escaped entity such as `&amp;lt;` stays literal.
fn unescape_markup(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
