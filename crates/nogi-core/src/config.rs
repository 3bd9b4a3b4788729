use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Browser-like `User-Agent` sent to the review site. Tabelog rejects
/// non-browser client identifiers.
pub const DEFAULT_SCRAPER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/60.0.3112.113 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("NOGI_ENV", "development"))?;

    let bind_addr = or_default("NOGI_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("NOGI_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("NOGI_LOG_LEVEL", "info");

    // `API_KEY` is the name older deployments used in their `.env`.
    let places_api_key = lookup("NOGI_PLACES_API_KEY")
        .or_else(|_| lookup("API_KEY"))
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    let places_base_url = or_default("NOGI_PLACES_BASE_URL", "https://places.googleapis.com");
    let language_code = or_default("NOGI_LANGUAGE_CODE", "ja");
    let review_site_base_url = or_default("NOGI_REVIEW_SITE_BASE_URL", "https://tabelog.com");

    let request_timeout_secs = parse_u64("NOGI_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "NOGI_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let scraper_user_agent = or_default("NOGI_SCRAPER_USER_AGENT", DEFAULT_SCRAPER_USER_AGENT);
    let max_concurrent_matches = parse_usize("NOGI_MAX_CONCURRENT_MATCHES", "4")?.max(1);
    let rate_limit_per_minute = parse_usize("NOGI_RATE_LIMIT_PER_MINUTE", "30")?;
    if rate_limit_per_minute == 0 {
        return Err(invalid(
            "NOGI_RATE_LIMIT_PER_MINUTE",
            "rate limit must allow at least 1 request per minute".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        places_api_key,
        places_base_url,
        language_code,
        review_site_base_url,
        request_timeout_secs,
        scraper_user_agent,
        max_concurrent_matches,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NOGI_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
