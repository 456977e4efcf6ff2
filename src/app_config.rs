use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles loading the gateway configuration from the
/// environment, validating it, and exposing it read-only to the rest of
/// the process. Values are established once at startup and never mutated.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Chat provider settings (plain `/translate` endpoint)
    pub chipp: ChippConfig,

    /// Generative provider settings (subtitle/text/detect/transliterate)
    pub gemini: GeminiConfig,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Retry settings for the batch pipeline
    pub retry: RetryConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Chat-completion provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChippConfig {
    /// API key used as a bearer token
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Chat-completions endpoint URL
    #[serde(default = "default_chipp_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_chipp_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ChippConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_chipp_base_url(),
            model: default_chipp_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Generative text provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key passed as a query parameter
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Model name (e.g. "gemini-2.5-flash-lite")
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Base URL of the generative language API
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Request timeout in seconds, bounding every single attempt
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Debug mode, raises the default log level to info
    #[serde(default)]
    pub debug: bool,

    /// Origins allowed by the CORS layer
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Retry configuration for the batch translation pipeline
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RetryConfig {
    /// Maximum attempts per batch call
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Base backoff in milliseconds, doubled before each retry
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `config.env` (if present) is loaded by the caller before this runs,
    /// so plain environment variables always win.
    pub fn from_env() -> Self {
        let debug = env_var("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            chipp: ChippConfig {
                api_key: env_var("API_KEY").unwrap_or_default(),
                base_url: env_var("CHIPP_BASE_URL").unwrap_or_else(default_chipp_base_url),
                model: env_var("CHIPP_MODEL").unwrap_or_else(default_chipp_model),
                timeout_secs: env_parsed("REQUEST_TIMEOUT_SECS", default_timeout_secs()),
            },
            gemini: GeminiConfig {
                api_key: env_var("GEMINI_API_KEY").unwrap_or_default(),
                model: env_var("GEMINI_MODEL").unwrap_or_else(default_gemini_model),
                base_url: env_var("GEMINI_BASE_URL").unwrap_or_else(default_gemini_base_url),
                timeout_secs: env_parsed("REQUEST_TIMEOUT_SECS", default_timeout_secs()),
            },
            server: ServerConfig {
                host: env_var("HOST").unwrap_or_else(default_host),
                port: env_parsed("PORT", default_port()),
                debug,
                allowed_origins: env_var("ALLOWED_ORIGINS")
                    .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                    .unwrap_or_else(default_allowed_origins),
            },
            retry: RetryConfig {
                retry_count: env_parsed("RETRY_COUNT", default_retry_count()),
                retry_backoff_ms: env_parsed("RETRY_BACKOFF_MS", default_retry_backoff_ms()),
            },
            log_level: if debug { LogLevel::Info } else { LogLevel::Warn },
        }
    }

    /// Validate the configuration, failing loudly on anything that would
    /// leave a service half-initialized at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chipp.api_key.trim().is_empty() {
            return Err(ConfigError::MissingKey("API_KEY"));
        }
        if self.gemini.api_key.trim().is_empty() {
            return Err(ConfigError::MissingKey("GEMINI_API_KEY"));
        }
        Url::parse(&self.chipp.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "CHIPP_BASE_URL",
            message: e.to_string(),
        })?;
        Url::parse(&self.gemini.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "GEMINI_BASE_URL",
            message: e.to_string(),
        })?;
        if self.retry.retry_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "RETRY_COUNT",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chipp: ChippConfig::default(),
            gemini: GeminiConfig::default(),
            server: ServerConfig::default(),
            retry: RetryConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log verbosity levels
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    env_var(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn default_chipp_base_url() -> String {
    "https://app.chipp.ai/api/v1/chat/completions".to_string()
}

fn default_chipp_model() -> String {
    "translationforfree-10024994".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash-lite".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "https://translationforfree.com".to_string(),
        "http://localhost:8080".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}
