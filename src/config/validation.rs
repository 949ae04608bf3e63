use crate::config::types::{CacheSettings, HttpSettings, PacingSettings, RetrySettings, Settings};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    validate_http_settings(&settings.http)?;
    validate_retry_settings(&settings.retry)?;
    validate_pacing_settings(&settings.pacing)?;
    validate_cache_settings(&settings.cache)?;
    Ok(())
}

fn validate_http_settings(settings: &HttpSettings) -> Result<(), ConfigError> {
    let url = Url::parse(&settings.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            settings.base_url
        )));
    }

    if settings.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if settings.timeout_seconds < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-seconds must be >= 1, got {}",
            settings.timeout_seconds
        )));
    }

    Ok(())
}

fn validate_retry_settings(settings: &RetrySettings) -> Result<(), ConfigError> {
    if settings.max_consecutive_errors < 1 {
        return Err(ConfigError::Validation(format!(
            "max-consecutive-errors must be >= 1, got {}",
            settings.max_consecutive_errors
        )));
    }

    // 2^count must stay representable for the largest allowed count
    if settings.max_consecutive_errors > 16 {
        return Err(ConfigError::Validation(format!(
            "max-consecutive-errors must be <= 16, got {}",
            settings.max_consecutive_errors
        )));
    }

    Ok(())
}

fn validate_pacing_settings(settings: &PacingSettings) -> Result<(), ConfigError> {
    if settings.min_delay_ms > settings.max_delay_ms {
        return Err(ConfigError::Validation(format!(
            "min-delay-ms ({}) must not exceed max-delay-ms ({})",
            settings.min_delay_ms, settings.max_delay_ms
        )));
    }

    Ok(())
}

fn validate_cache_settings(settings: &CacheSettings) -> Result<(), ConfigError> {
    if settings.ttl_seconds < 1 {
        return Err(ConfigError::Validation(format!(
            "ttl-seconds must be >= 1, got {}",
            settings.ttl_seconds
        )));
    }

    if settings.capacity < 1 {
        return Err(ConfigError::Validation(format!(
            "capacity must be >= 1, got {}",
            settings.capacity
        )));
    }

    Ok(())
}
