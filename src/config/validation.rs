use crate::config::types::{Config, CrawlerConfig, OutputConfig, SelectorConfig, UserAgentConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

const MAX_QUEUE_CAPACITY: usize = 100_000;
const MIN_POLL_INTERVAL_MS: u64 = 10;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_selectors(&config.selectors)?;
    validate_districts(config)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    validate_http_url("seed-url", &config.seed_url)?;

    if let Some(base_url) = &config.base_url {
        validate_http_url("base-url", base_url)?;
    }

    if config.queue_capacity < 1 || config.queue_capacity > MAX_QUEUE_CAPACITY {
        return Err(ConfigError::Validation(format!(
            "queue-capacity must be between 1 and {}, got {}",
            MAX_QUEUE_CAPACITY, config.queue_capacity
        )));
    }

    if config.poll_interval < MIN_POLL_INTERVAL_MS {
        return Err(ConfigError::Validation(format!(
            "poll-interval must be >= {}ms, got {}ms",
            MIN_POLL_INTERVAL_MS, config.poll_interval
        )));
    }

    if config.idle_threshold < 1 {
        return Err(ConfigError::Validation(format!(
            "idle-threshold must be >= 1, got {}",
            config.idle_threshold
        )));
    }

    if config.request_timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout must be >= 1s, got {}s",
            config.request_timeout
        )));
    }

    Ok(())
}

/// Validates that `value` is an absolute http(s) URL
fn validate_http_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", key, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use the http or https scheme",
            key, value
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' has no host",
            key, value
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler-version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "csv-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every selector parses
fn validate_selectors(config: &SelectorConfig) -> Result<(), ConfigError> {
    for (key, selector) in config.entries() {
        Selector::parse(selector).map_err(|e| {
            ConfigError::InvalidSelector(format!("{} = '{}': {:?}", key, selector, e))
        })?;
    }
    Ok(())
}

/// Validates the district override table
fn validate_districts(config: &Config) -> Result<(), ConfigError> {
    for (phrase, district) in &config.districts {
        if phrase.trim().is_empty() {
            return Err(ConfigError::Validation(
                "district phrases cannot be empty".to_string(),
            ));
        }
        if district.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "district for phrase '{}' cannot be empty",
                phrase
            )));
        }
    }
    Ok(())
}
