// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate client configuration from .env files

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Production backend deployment
pub const PRODUCTION_API_BASE: &str = "https://tripbox-intelliorganizer.onrender.com";

/// Local development backend
pub const LOCAL_API_BASE: &str = "http://127.0.0.1:5000";

/// Host name fragments that select the production backend
const PRODUCTION_HOST_MARKERS: [&str; 2] = ["render.com", "tripbox-intelliorganizer.onrender.com"];

/// Client configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Seconds between member location polls (default 30)
    pub location_poll_interval_secs: u64,

    /// Seconds between chat polls (default 5)
    pub chat_poll_interval_secs: u64,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Directory downloaded documents are saved into
    pub download_dir: PathBuf,

    /// Bearer token for the backend
    pub token: String,

    /// Authenticated user id (used to tell own location apart from peers)
    pub user_id: i64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    pub fn from_env() -> Self {
        dotenv().ok();

        let api_base_url = match env::var("TRIPBOX_API_BASE") {
            Ok(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_string(),
            _ => resolve_api_base(&env::var("TRIPBOX_HOST").unwrap_or_default()).to_string(),
        };

        Config {
            api_base_url,

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            location_poll_interval_secs: env::var("LOCATION_POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),

            chat_poll_interval_secs: env::var("CHAT_POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),

            download_dir: env::var("DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),

            token: env::var("TRIPBOX_TOKEN").unwrap_or_default(),

            user_id: env::var("TRIPBOX_USER_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures the client can run safely
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("TRIPBOX_API_BASE resolved to an empty URL".to_string());
        }

        if self.location_poll_interval_secs == 0 {
            return Err("LOCATION_POLL_INTERVAL_SECS must be greater than zero".to_string());
        }

        if self.chat_poll_interval_secs == 0 {
            return Err("CHAT_POLL_INTERVAL_SECS must be greater than zero".to_string());
        }

        if self.token.is_empty() {
            log::warn!("TRIPBOX_TOKEN not configured - authenticated calls will be rejected");
        }

        Ok(())
    }

    pub fn location_poll_interval(&self) -> Duration {
        Duration::from_secs(self.location_poll_interval_secs)
    }

    pub fn chat_poll_interval(&self) -> Duration {
        Duration::from_secs(self.chat_poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Pick the backend for a given host name
/// DOCUMENTATION: Production deployment hosts talk to the production
/// backend, everything else to the local development server
pub fn resolve_api_base(hostname: &str) -> &'static str {
    if PRODUCTION_HOST_MARKERS
        .iter()
        .any(|marker| hostname.contains(marker))
    {
        PRODUCTION_API_BASE
    } else {
        LOCAL_API_BASE
    }
}
