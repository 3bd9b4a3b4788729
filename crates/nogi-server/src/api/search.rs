use axum::{
    extract::{Query, State},
    Extension, Json,
};
use nogi_core::placeholders::{NO_RESULTS_NOTICE, PLACES_API_FAILURE};
use nogi_core::query::DEFAULT_RATING_THRESHOLD;
use nogi_core::{DisplayRecord, PlaceQuery};
use nogi_pipeline::PipelineError;
use nogi_places::PlacesError;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Raw query string. Everything arrives as text so bad input gets the
/// standard error envelope instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchParams {
    pub area: Option<String>,
    pub keyword: Option<String>,
    pub min_rating: Option<String>,
}

pub(super) async fn search_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<DisplayRecord>>>, ApiError> {
    let query = parse_query(&params)
        .map_err(|message| ApiError::new(req_id.0.clone(), "validation_error", message))?;

    let records = state
        .pipeline
        .run(&query)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    let mut meta = ResponseMeta::new(req_id.0);
    if records.is_empty() {
        meta = meta.with_notice(NO_RESULTS_NOTICE);
    }

    Ok(Json(ApiResponse {
        data: records,
        meta,
    }))
}

/// Area and keyword are passed through as given, blank included, the same
/// as the CLI does. Only the threshold is validated.
fn parse_query(params: &SearchParams) -> Result<PlaceQuery, String> {
    let area = params.area.as_deref().unwrap_or_default();
    let keyword = params.keyword.as_deref().unwrap_or_default();

    let min_rating = match params.min_rating.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_RATING_THRESHOLD,
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| format!("min_rating must be a number, got {raw:?}"))?,
    };

    PlaceQuery::new(area, keyword, min_rating).map_err(|e| e.to_string())
}

fn map_pipeline_error(request_id: String, error: &PipelineError) -> ApiError {
    match error {
        PipelineError::Places(PlacesError::Api { status, body }) => {
            tracing::warn!(status, "places search rejected");
            ApiError::new(
                request_id,
                "places_api_error",
                format!("{PLACES_API_FAILURE}: {status}\n{body}"),
            )
        }
        PipelineError::Places(e @ (PlacesError::Http(_) | PlacesError::Deserialize { .. })) => {
            tracing::warn!(error = %e, "places search failed");
            ApiError::new(
                request_id,
                "places_api_error",
                format!("{PLACES_API_FAILURE}: {e}"),
            )
        }
        other => {
            tracing::error!(error = %other, "search pipeline failed");
            ApiError::new(request_id, "internal_error", "search failed")
        }
    }
}
