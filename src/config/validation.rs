use crate::config::types::{Config, HttpConfig, MiningConfig, SearchConfig, TrackingConfig};
use crate::ConfigError;
use url::Url;

/// Deepest results page the tracker will request
const MAX_FETCH_DEPTH: usize = 100;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_http_config(&config.http)?;
    validate_tracking_config(&config.tracking)?;
    validate_mining_config(&config.mining)?;
    Ok(())
}

fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    validate_endpoint("serp-base-url", &config.serp_base_url)?;
    validate_endpoint("autocomplete-base-url", &config.autocomplete_base_url)?;

    if config.language.trim().is_empty() {
        return Err(ConfigError::Validation(
            "language cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that an endpoint is an absolute HTTP(S) URL
fn validate_endpoint(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", name, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            name,
            url.scheme()
        )));
    }

    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.request_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-ms must be >= 100ms, got {}ms",
            config.request_timeout_ms
        )));
    }

    if config.autocomplete_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "autocomplete-timeout-ms must be >= 100ms, got {}ms",
            config.autocomplete_timeout_ms
        )));
    }

    if config.user_agents.is_empty() {
        return Err(ConfigError::Validation(
            "user-agents must contain at least one entry".to_string(),
        ));
    }

    if config.user_agents.iter().any(|ua| ua.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "user-agents cannot contain blank entries".to_string(),
        ));
    }

    Ok(())
}

fn validate_tracking_config(config: &TrackingConfig) -> Result<(), ConfigError> {
    if config.fetch_depth < 1 || config.fetch_depth > MAX_FETCH_DEPTH {
        return Err(ConfigError::Validation(format!(
            "fetch-depth must be between 1 and {}, got {}",
            MAX_FETCH_DEPTH, config.fetch_depth
        )));
    }

    if config.min_inter_request_delay_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "min-inter-request-delay-ms must be >= 100ms, got {}ms",
            config.min_inter_request_delay_ms
        )));
    }

    Ok(())
}

fn validate_mining_config(config: &MiningConfig) -> Result<(), ConfigError> {
    if config.max_suggestions < 1 {
        return Err(ConfigError::Validation(
            "max-suggestions must be >= 1".to_string(),
        ));
    }

    Ok(())
}
