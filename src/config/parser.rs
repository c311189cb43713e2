use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so that output files can be traced back to the
/// configuration that produced them.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_minimal_config_uses_defaults() {
        let config_content = r#"
[crawler]
seed-url = "https://www.example.com/listings?page=1"

[output]
csv-path = "./listings.csv"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.queue_capacity, 1000);
        assert_eq!(config.crawler.poll_interval, 1000);
        assert_eq!(config.crawler.idle_threshold, 4);
        assert!(config.crawler.base_url.is_none());
        assert!(config.output.write_header);
        assert_eq!(config.selectors.listing, ".vip-header-and-details");
        assert_eq!(config.extraction.currency_suffix, "zł");
        assert!(config.districts.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let config_content = r#"
[crawler]
seed-url = "https://www.example.com/listings?page=1"
base-url = "https://www.example.com"
queue-capacity = 50
poll-interval = 250
idle-threshold = 2
request-timeout = 5

[user-agent]
crawler-name = "TestCrawler"
crawler-version = "1.0"

[output]
csv-path = "./out.csv"
write-header = false

[selectors]
listing = "article"
price = ".price"
description = ".desc"
detail-link = ".item"
next-page = ".next"

[extraction]
currency-suffix = "EUR"
unknown-district = "unknown"

[districts]
"old town" = "stare miasto"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.queue_capacity, 50);
        assert_eq!(config.crawler.poll_interval().as_millis(), 250);
        assert_eq!(config.crawler.idle_threshold, 2);
        assert_eq!(config.user_agent.header_value(), "TestCrawler/1.0");
        assert!(!config.output.write_header);
        assert_eq!(config.selectors.next_page, ".next");
        assert_eq!(config.extraction.unknown_district, "unknown");
        assert_eq!(
            config.districts.get("old town").map(String::as_str),
            Some("stare miasto")
        );
    }

    #[test]
    fn test_idle_timeout() {
        let mut crawler = crate::config::CrawlerConfig::with_seed("https://www.example.com/");
        assert_eq!(crawler.idle_timeout(), std::time::Duration::from_secs(4));

        // Oversized intervals must not overflow
        crawler.poll_interval = u64::MAX;
        crawler.idle_threshold = u32::MAX;
        assert_eq!(crawler.idle_timeout(), std::time::Duration::MAX);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/crawler.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[crawler]
seed-url = "https://www.example.com/"
queue-capacity = 0

[output]
csv-path = "./listings.csv"
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }
}
