//! HTTP side of the Tabelog lookup.

use std::time::Duration;

use nogi_core::links::encode_query_component;
use nogi_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::ScraperError;

/// Settings for [`TabelogMatcher`].
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl MatcherConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.review_site_base_url.clone(),
            user_agent: config.scraper_user_agent.clone(),
            timeout_secs: config.request_timeout_secs,
        }
    }
}

/// Finds Tabelog listings by display name.
///
/// Sends a browser `User-Agent` on every request; Tabelog answers default
/// client identifiers with an error page.
pub struct TabelogMatcher {
    client: Client,
    base_url: String,
}

impl TabelogMatcher {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `base_url` does not parse, or
    /// [`ScraperError::Http`] if the `reqwest::Client` cannot be constructed.
    pub fn new(config: &MatcherConfig) -> Result<Self, ScraperError> {
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        Url::parse(&base_url).map_err(|e| ScraperError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Search URL for `name`, results ordered by rating.
    pub(crate) fn search_url(&self, name: &str) -> Result<Url, ScraperError> {
        let raw = format!(
            "{}/search/?SrtT=rt&sw={}",
            self.base_url,
            encode_query_component(name)
        );
        Url::parse(&raw).map_err(|e| ScraperError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })
    }

    /// GETs `url` and returns the body of a 2xx response.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ScraperError::Http`] on network failure or timeout.
    pub(crate) async fn fetch_html(&self, url: &Url) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url.clone())
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "ja,en-US;q=0.7,en;q=0.3")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
