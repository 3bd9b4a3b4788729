//! Shared configuration, query, and result types for the nogi aggregator,
//! plus the two pure formatters (social search links and opening hours).

pub mod app_config;
pub mod clock;
pub mod config;
pub mod hours;
pub mod links;
pub mod placeholders;
pub mod query;
pub mod record;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{load_app_config, load_app_config_from_env};
pub use hours::highlight_today;
pub use links::instagram_search_url;
pub use query::{PlaceQuery, QueryError};
pub use record::{DisplayRecord, ReviewSiteStatus};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
