//! WhatsApp checkout deep-links.
//!
//! Checkout hands the order message to the messaging service as
//! `<base>/<merchant-number>?text=<percent-encoded message>`. Opening the
//! link is left to the caller.

use jazz_core::cart::CartError;
use jazz_core::order::buy_now_message;
use jazz_core::{Cart, Product};
use thiserror::Error;
use url::Url;

/// Where checkout links point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Messaging service base URL (e.g., `https://wa.me`)
    pub base_url: Url,
    /// Merchant phone number, digits only
    pub merchant_number: String,
}

/// Checkout errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cannot check out an empty cart")]
    EmptyCart,
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Build a deep-link carrying `message`.
///
/// The message is percent-encoded: RFC 3986 unreserved characters are kept
/// and everything else, including spaces and newlines, is escaped.
#[must_use]
pub fn deep_link(config: &CheckoutConfig, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        config.base_url.as_str().trim_end_matches('/'),
        config.merchant_number,
        urlencoding::encode(message),
    )
}

/// Deep-link for the whole cart.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if there is nothing to order.
pub fn cart_checkout_link(config: &CheckoutConfig, cart: &Cart) -> Result<String, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Ok(deep_link(config, &cart.to_order_message()))
}

/// Deep-link ordering a single product straight from its page.
///
/// # Errors
///
/// Returns [`CheckoutError::Cart`] if the product does not offer the
/// selection.
pub fn buy_now_link(
    config: &CheckoutConfig,
    product: &Product,
    size: &str,
    color: &str,
) -> Result<String, CheckoutError> {
    let message = buy_now_message(product, size, color)?;
    Ok(deep_link(config, &message))
}
