use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Places API credential. Optional here so the CLI can still print
    /// `--help`; `PlacesClient` construction rejects a missing key.
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    pub language_code: String,
    pub review_site_base_url: String,
    pub request_timeout_secs: u64,
    pub scraper_user_agent: String,
    pub max_concurrent_matches: usize,
    pub rate_limit_per_minute: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("language_code", &self.language_code)
            .field("review_site_base_url", &self.review_site_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("scraper_user_agent", &self.scraper_user_agent)
            .field("max_concurrent_matches", &self.max_concurrent_matches)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .finish()
    }
}
