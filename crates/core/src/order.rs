//! Order messages for the messaging checkout.
//!
//! The text produced here is embedded, percent-encoded, in a deep-link by the
//! caller. Every line item stays on one line: control characters inside
//! names and selections are replaced by spaces.

use core::fmt::Write as _;

use crate::cart::{Cart, CartError, validate_selection};
use crate::catalog::Product;

const ORDER_GREETING: &str = "Hello! I'd like to place an order:";
const ORDER_CLOSING: &str = "Please confirm availability and delivery details.";
const BUY_NOW_GREETING: &str = "Hello! I'd like to order:";
const BUY_NOW_CLOSING: &str = "Please confirm availability.";

/// Cart summary, one line per item followed by the total.
///
/// ```text
/// Hello! I'd like to place an order:
///
/// • Burgundy Elegance Gown (M, Black) x3 - ₦255,000
///
/// Total: ₦255,000
///
/// Please confirm availability and delivery details.
/// ```
#[must_use]
pub fn order_message(cart: &Cart) -> String {
    let mut message = String::new();
    message.push_str(ORDER_GREETING);
    message.push_str("\n\n");
    for line in cart.lines() {
        // Writing to a String cannot fail.
        let _ = writeln!(
            message,
            "• {} ({}, {}) x{} - {}",
            single_line(&line.product().name),
            single_line(line.size()),
            single_line(line.color()),
            line.quantity(),
            line.line_total(),
        );
    }
    let _ = write!(message, "\nTotal: {}\n\n{ORDER_CLOSING}", cart.total_price());
    message
}

/// Single-product order from the product page.
///
/// # Errors
///
/// Returns [`CartError::InvalidSelection`] if the product does not offer
/// `size` or `color`.
pub fn buy_now_message(product: &Product, size: &str, color: &str) -> Result<String, CartError> {
    validate_selection(product, size, color)?;
    Ok(format!(
        "{BUY_NOW_GREETING}\n\nProduct: {}\nPrice: {}\nSize: {}\nColor: {}\n\n{BUY_NOW_CLOSING}",
        single_line(&product.name),
        product.price,
        single_line(size),
        single_line(color),
    ))
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
