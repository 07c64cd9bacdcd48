//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `JAZZ_WHATSAPP_NUMBER` - Merchant number for checkout links (default: 2348012345678)
//! - `JAZZ_MESSAGING_BASE_URL` - Messaging service base URL (default: <https://wa.me>)
//! - `JAZZ_CATALOG_PATH` - JSON product file (default: bundled catalog)
//! - `JAZZ_CART_PATH` - Persisted session cart (default: .jazz/cart.json)
//! - `JAZZ_VIEW_CACHE_CAPACITY` - Memoized listing views (default: 64)
//! - `JAZZ_CONTACT_EMAIL` - Store contact email
//! - `JAZZ_LOCATION` - Store location

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::checkout::CheckoutConfig;

const DEFAULT_WHATSAPP_NUMBER: &str = "2348012345678";
const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";
const DEFAULT_CART_PATH: &str = ".jazz/cart.json";
const DEFAULT_VIEW_CACHE_CAPACITY: &str = "64";

/// E.164 allows at most 15 digits; anything under 7 is not a phone number.
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Messaging checkout configuration
    pub checkout: CheckoutConfig,
    /// JSON product file; `None` uses the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Where the session cart is persisted
    pub cart_path: PathBuf,
    /// Maximum number of memoized listing views
    pub view_cache_capacity: u64,
    /// Store settings shown to customers
    pub store: StoreSettings,
}

/// Store contact settings.
#[derive(Debug, Clone, Default)]
pub struct StoreSettings {
    pub contact_email: Option<String>,
    pub location: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let merchant_number =
            get_env_or_default(&lookup, "JAZZ_WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER);
        let merchant_number = validate_phone_number(&merchant_number, "JAZZ_WHATSAPP_NUMBER")?;

        let base_url = get_env_or_default(
            &lookup,
            "JAZZ_MESSAGING_BASE_URL",
            DEFAULT_MESSAGING_BASE_URL,
        );
        let base_url = parse_http_url(&base_url, "JAZZ_MESSAGING_BASE_URL")?;

        let view_cache_capacity = get_env_or_default(
            &lookup,
            "JAZZ_VIEW_CACHE_CAPACITY",
            DEFAULT_VIEW_CACHE_CAPACITY,
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("JAZZ_VIEW_CACHE_CAPACITY".to_string(), e.to_string())
        })?;

        Ok(Self {
            checkout: CheckoutConfig {
                base_url,
                merchant_number,
            },
            catalog_path: get_optional_env(&lookup, "JAZZ_CATALOG_PATH").map(PathBuf::from),
            cart_path: PathBuf::from(get_env_or_default(
                &lookup,
                "JAZZ_CART_PATH",
                DEFAULT_CART_PATH,
            )),
            view_cache_capacity,
            store: StoreSettings {
                contact_email: get_optional_env(&lookup, "JAZZ_CONTACT_EMAIL"),
                location: get_optional_env(&lookup, "JAZZ_LOCATION"),
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable. Blank values count as unset.
fn get_optional_env(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

/// Get a variable with a default value.
fn get_env_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> String {
    get_optional_env(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Normalize a phone number to bare digits.
///
/// Spaces, dashes and a leading `+` are tolerated; anything else is rejected.
fn validate_phone_number(value: &str, var_name: &str) -> Result<String, ConfigError> {
    let digits: String = value
        .trim()
        .trim_start_matches('+')
        .chars()
        .filter(|&c| c != ' ' && c != '-')
        .collect();

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must contain only digits".to_string(),
        ));
    }
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!(
                "must have {MIN_PHONE_DIGITS}-{MAX_PHONE_DIGITS} digits (got {})",
                digits.len()
            ),
        ));
    }
    Ok(digits)
}

/// Parse an http(s) URL.
fn parse_http_url(value: &str, var_name: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}
