use anyhow::{Context, Result};
use std::time::Duration;

/// Content API host used when `CONTENT_API_URL` is not set
pub const DEFAULT_CONTENT_API_URL: &str = "https://api.sportacademy.kg/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    // Content API
    pub content_api_url: String,
    pub content_api_timeout_secs: u64,

    // Server
    pub port: u16,

    // SEO
    pub seo_metadata_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let content_api_url = std::env::var("CONTENT_API_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_API_URL.to_string());

        if !content_api_url.starts_with("http://") && !content_api_url.starts_with("https://") {
            anyhow::bail!(
                "CONTENT_API_URL must be an http(s) URL, got '{}'",
                content_api_url
            );
        }

        Ok(Self {
            content_api_url,
            content_api_timeout_secs: std::env::var("CONTENT_API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(10),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            seo_metadata_file: std::env::var("SEO_METADATA_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }

    pub fn content_api_timeout(&self) -> Duration {
        Duration::from_secs(self.content_api_timeout_secs)
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Read the optional SEO metadata override file.
    pub fn read_seo_metadata_file(&self) -> Result<Option<String>> {
        match &self.seo_metadata_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read SEO_METADATA_FILE '{}'", path))?;
                Ok(Some(content))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "CONTENT_API_URL",
            "CONTENT_API_TIMEOUT_SECS",
            "PORT",
            "SEO_METADATA_FILE",
        ] {
            std::env::remove_var(key);
        }
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("Should load defaults");
        assert_eq!(config.content_api_url, DEFAULT_CONTENT_API_URL);
        assert_eq!(config.content_api_timeout_secs, 10);
        assert_eq!(config.port, 8080);
        assert!(config.seo_metadata_file.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("CONTENT_API_URL", "http://localhost:9000/api/");
        std::env::set_var("CONTENT_API_TIMEOUT_SECS", "3");
        std::env::set_var("PORT", "3000");
        std::env::set_var("SEO_METADATA_FILE", "/etc/academy/seo.json");

        let config = Config::from_env().expect("Should load overrides");
        assert_eq!(config.content_api_url, "http://localhost:9000/api");
        assert_eq!(config.content_api_timeout(), Duration::from_secs(3));
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(
            config.seo_metadata_file.as_deref(),
            Some("/etc/academy/seo.json")
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_numbers_fall_back() {
        clear_env();
        std::env::set_var("CONTENT_API_TIMEOUT_SECS", "soon");
        std::env::set_var("PORT", "99999");

        let config = Config::from_env().expect("Should fall back to defaults");
        assert_eq!(config.content_api_timeout_secs, 10);
        assert_eq!(config.port, 8080);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_timeout_falls_back() {
        clear_env();
        std::env::set_var("CONTENT_API_TIMEOUT_SECS", "0");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.content_api_timeout_secs, 10);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_url_uses_fallback() {
        clear_env();
        std::env::set_var("CONTENT_API_URL", "   ");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.content_api_url, DEFAULT_CONTENT_API_URL);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_http_url() {
        clear_env();
        std::env::set_var("CONTENT_API_URL", "ftp://files.example.com");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("CONTENT_API_URL"));

        clear_env();
    }

    // ==================== Metadata File Tests ====================

    #[test]
    fn test_read_seo_metadata_file_none() {
        let config = Config {
            content_api_url: DEFAULT_CONTENT_API_URL.to_string(),
            content_api_timeout_secs: 10,
            port: 8080,
            seo_metadata_file: None,
        };

        assert!(config.read_seo_metadata_file().unwrap().is_none());
    }

    #[test]
    fn test_read_seo_metadata_file_missing_path() {
        let config = Config {
            content_api_url: DEFAULT_CONTENT_API_URL.to_string(),
            content_api_timeout_secs: 10,
            port: 8080,
            seo_metadata_file: Some("/nonexistent/seo.json".to_string()),
        };

        let err = config.read_seo_metadata_file().unwrap_err();
        assert!(err.to_string().contains("SEO_METADATA_FILE"));
    }
}
