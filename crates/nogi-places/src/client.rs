//! HTTP client for the Places API v1 `places:searchText` endpoint.
//!
//! One request per search, no retry, no pagination. Non-2xx responses are
//! surfaced verbatim as [`PlacesError::Api`] so the caller can show the raw
//! status and body.

use std::time::Duration;

use nogi_core::{AppConfig, PlaceQuery};
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{RawPlace, SearchTextRequest, SearchTextResponse};

const SEARCH_TEXT_PATH: &str = "/v1/places:searchText";

/// Fields requested from the API. Billing depends on this mask.
pub const FIELD_MASK: &str = "places.displayName,places.formattedAddress,places.currentOpeningHours,places.reviews,places.googleMapsLinks,places.rating";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Settings for [`PlacesClient`].
#[derive(Clone)]
pub struct PlacesConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub language_code: String,
    pub timeout_secs: u64,
}

impl PlacesConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.places_api_key.clone(),
            base_url: config.places_base_url.clone(),
            language_code: config.language_code.clone(),
            timeout_secs: config.request_timeout_secs,
        }
    }
}

impl std::fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("language_code", &self.language_code)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Client for the places text search.
///
/// Holds a pooled `reqwest::Client`; cheap to share by reference across tasks.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    language_code: String,
}

impl PlacesClient {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::MissingCredential`] if no API key is configured.
    /// - [`PlacesError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`PlacesError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(PlacesError::MissingCredential)?
            .to_owned();

        let endpoint = Self::endpoint_url(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
            .user_agent("nogi/0.1 (restaurant-discovery)")
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoint,
            language_code: config.language_code.clone(),
        })
    }

    /// Runs one text search for `query` and returns the places in API order.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] on a non-2xx status (body included verbatim).
    /// - [`PlacesError::Http`] on network failure or timeout.
    /// - [`PlacesError::Deserialize`] if a 2xx body is not valid JSON of the
    ///   expected shape.
    pub async fn search(&self, query: &PlaceQuery) -> Result<Vec<RawPlace>, PlacesError> {
        let text_query = query.text_query();
        tracing::info!(text_query = %text_query, language = %self.language_code, "searching places");

        let request = SearchTextRequest {
            text_query,
            language_code: &self.language_code,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(FIELD_MASK_HEADER, FIELD_MASK)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "places search failed");
            return Err(PlacesError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchTextResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: format!("searchText(textQuery={})", request.text_query),
                source: e,
            })?;

        let places: Vec<RawPlace> = parsed.places.into_iter().map(RawPlace::from).collect();
        tracing::info!(count = places.len(), "places search returned");
        Ok(places)
    }

    /// Builds the `searchText` URL under `base_url`, tolerating a trailing slash.
    fn endpoint_url(base_url: &str) -> Result<Url, PlacesError> {
        let raw = format!("{}{SEARCH_TEXT_PATH}", base_url.trim_end_matches('/'));
        Url::parse(&raw).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
