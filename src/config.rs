//! Configuration management
//!
//! Loads configuration from:
//! 1. Default values
//! 2. Configuration file (config/local.toml)
//! 3. Environment variables (override)

use serde::Deserialize;
use std::{net::IpAddr, path::PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub assets: AssetConfig,
    pub ai: AiConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Port number (e.g., 8080)
    pub port: u16,
    /// Public domain (e.g., "portfolio.example.com")
    pub domain: String,
    /// Protocol ("http" or "https")
    pub protocol: String,
}

impl ServerConfig {
    /// Get the base URL for the site
    ///
    /// # Returns
    /// Full URL like "https://portfolio.example.com"
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.protocol, self.domain)
    }
}

/// Image asset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Directory the `/images` route serves from
    pub root: PathBuf,
}

/// AI gateway configuration
///
/// The credential is optional: without it the gateway stays mounted
/// and every chat submission resolves to the connectivity-error reply.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Hosted model API key
    pub api_key: Option<String>,
    /// Model identifier (e.g., "gemini-2.5-flash")
    pub model: String,
    /// API base URL
    pub endpoint: String,
    /// Outbound request timeout in seconds
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Loading Order
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/local.toml (if exists)
    /// 4. Environment variables (ATELIER_*)
    ///
    /// # Errors
    /// Returns error if configuration is invalid
    pub fn load() -> Result<Self, crate::error::AppError> {
        use config::{Config, Environment, File};

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.domain", "localhost")?
            .set_default("server.protocol", "http")?
            .set_default("assets.root", "public/images")?
            .set_default("ai.model", "gemini-2.5-flash")?
            .set_default(
                "ai.endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("ai.timeout_seconds", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Load from config/default.toml if it exists
            .add_source(File::with_name("config/default").required(false))
            // Load from config/local.toml if it exists (overrides default)
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables (ATELIER_*)
            .add_source(
                Environment::with_prefix("ATELIER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), crate::error::AppError> {
        if self.ai.timeout_seconds == 0 {
            return Err(crate::error::AppError::Config(
                "ai.timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if self.ai.model.trim().is_empty() {
            return Err(crate::error::AppError::Config(
                "ai.model must not be empty".to_string(),
            ));
        }

        if !is_local_server_domain(&self.server.domain)
            && !self.server.protocol.eq_ignore_ascii_case("https")
        {
            return Err(crate::error::AppError::Config(
                "server.protocol must be https for non-local server domains".to_string(),
            ));
        }

        if self.ai.api_key.is_none() {
            tracing::warn!(
                "No AI credential configured; chat replies will fall back to the connectivity error"
            );
        }

        Ok(())
    }
}

fn normalized_server_host(domain: &str) -> String {
    let trimmed = domain.trim();
    let parsed_host = url::Url::parse(&format!("http://{trimmed}"))
        .ok()
        .and_then(|url| url.host_str().map(|host| host.to_string()));
    let host = parsed_host.unwrap_or_else(|| trimmed.to_string());
    host.trim_end_matches('.').to_ascii_lowercase()
}

fn is_local_server_domain(domain: &str) -> bool {
    let host = normalized_server_host(domain);
    if host == "localhost" || host.ends_with(".localhost") {
        return true;
    }

    if let Ok(ip) = host.parse::<IpAddr>() {
        return ip.is_loopback() || ip.is_unspecified();
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                domain: "localhost".to_string(),
                protocol: "http".to_string(),
            },
            assets: AssetConfig {
                root: PathBuf::from("public/images"),
            },
            ai: AiConfig {
                api_key: Some("test-key".to_string()),
                model: "gemini-2.5-flash".to_string(),
                endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                timeout_seconds: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }

    #[test]
    fn validate_accepts_http_on_localhost() {
        let config = valid_config();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = valid_config();
        config.ai.timeout_seconds = 0;

        let error = config.validate().expect_err("zero timeout must fail");
        assert!(matches!(
            error,
            crate::error::AppError::Config(message)
                if message.contains("ai.timeout_seconds")
        ));
    }

    #[test]
    fn validate_rejects_http_for_non_local_domain() {
        let mut config = valid_config();
        config.server.domain = "portfolio.example.com".to_string();
        config.server.protocol = "http".to_string();

        let error = config
            .validate()
            .expect_err("public domains must require https");
        assert!(matches!(
            error,
            crate::error::AppError::Config(message)
                if message.contains("server.protocol must be https")
        ));
    }

    #[test]
    fn validate_accepts_missing_api_key() {
        let mut config = valid_config();
        config.ai.api_key = None;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn base_url_joins_protocol_and_domain() {
        let config = valid_config();
        assert_eq!(config.server.base_url(), "http://localhost");
    }
}
