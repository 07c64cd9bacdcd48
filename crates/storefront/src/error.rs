//! Unified error handling.
//!
//! Provides a unified `StorefrontError` type for everything the storefront
//! front ends call. Persistence failures are deliberately absent: the session
//! logs and swallows them.

use jazz_core::{CartError, ParseFilterError};
use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::source::SourceError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Source(#[from] SourceError),

    /// A cart operation was rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout could not proceed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Listing filters could not be parsed.
    #[error("Bad filter: {0}")]
    Query(#[from] ParseFilterError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl StorefrontError {
    /// Message safe to show a shopper.
    ///
    /// Configuration and catalog failures are operator problems, so their
    /// details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(_) | Self::Source(_) => "The store is temporarily unavailable".to_string(),
            Self::Cart(CartError::InvalidSelection { kind, value, .. }) => {
                format!("Please choose an available {kind} ({value:?} is not offered)")
            }
            Self::Checkout(CheckoutError::EmptyCart) => {
                "Your cart is empty. Add some beautiful pieces to get started.".to_string()
            }
            Self::Checkout(CheckoutError::Cart(err)) => Self::Cart(err.clone()).user_message(),
            Self::Query(err) => err.to_string(),
            Self::NotFound(what) => format!("{what} not found"),
        }
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
