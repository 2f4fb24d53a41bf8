use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REST_TIMEOUT, DEFAULT_THREAD_PAGE_SIZE};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login credentials for the Swaply backend
pub struct Credentials {
    /// Username for the Swaply account
    pub username: String,
    /// Password for the Swaply account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Swaply backend; all resource paths are resolved
    /// against this single origin
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Swaply API client
pub struct Config {
    /// Login credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Number of items to retrieve per page in paged requests
    pub page_size: u32,
    /// When enabled, an order update whose PATCH is rejected with 405/501
    /// is retried once as PUT with the same payload and path
    pub patch_put_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// Reads `SWAPLY_*` variables, falling back to local-dev defaults.
    /// A `.env` file is loaded first when present.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                username: get_env_or_default("SWAPLY_USERNAME", String::new()),
                password: get_env_or_default("SWAPLY_PASSWORD", String::new()),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "SWAPLY_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("SWAPLY_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            page_size: get_env_or_default("SWAPLY_PAGE_SIZE", DEFAULT_THREAD_PAGE_SIZE),
            patch_put_fallback: get_env_or_default("SWAPLY_PATCH_PUT_FALLBACK", true),
        }
    }

    /// Creates a configuration pointing at the given base URL, keeping
    /// defaults for everything else
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                username: String::new(),
                password: String::new(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REST_TIMEOUT,
            },
            page_size: DEFAULT_THREAD_PAGE_SIZE,
            patch_put_fallback: true,
        }
    }
}
