//! Cart and checkout commands.
//!
//! The cart lives in the session store (`JAZZ_CART_PATH`) between
//! invocations. Checkout never places an order itself: it prints the order
//! message and the WhatsApp link that carries it to the boutique.
//!
//! # Usage
//!
//! ```bash
//! jazz cart add 1 --size M --color Black --quantity 2
//! jazz cart update 1 --size M --color Black 1
//! jazz cart show
//! jazz checkout
//!
//! # Skip the cart and order one piece
//! jazz buy-now 7
//! ```

use std::io::Write;
use std::num::NonZeroU32;

use jazz_core::order::buy_now_message;
use jazz_core::{LineKey, Product, ProductId};
use jazz_storefront::checkout::buy_now_link;
use jazz_storefront::{CartStore, ShopSession, StorefrontError};

use super::{CommandResult, Context};

/// A size and color picked on a product page. Missing parts fall back to
/// the product's first size and color.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    pub size: Option<String>,
    pub color: Option<String>,
}

impl Selection {
    fn resolve<'a>(&'a self, product: &'a Product) -> (&'a str, &'a str) {
        let (size, color) = product.default_selection().unwrap_or_default();
        (
            self.size.as_deref().unwrap_or(size),
            self.color.as_deref().unwrap_or(color),
        )
    }
}

/// Print the cart.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn show<S: CartStore>(session: &ShopSession<S>, out: &mut impl Write) -> CommandResult {
    let cart = session.cart();
    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    writeln!(out, "Cart ({} items)", cart.item_count())?;
    for line in cart.lines() {
        writeln!(
            out,
            "  {} ({}, {}) x{}  {}",
            line.product().name,
            line.size(),
            line.color(),
            line.quantity(),
            line.line_total()
        )?;
    }
    writeln!(out, "Total: {}", cart.total_price())?;
    Ok(())
}

/// Add a selection to the cart.
///
/// # Errors
///
/// Returns [`StorefrontError::NotFound`] for an unknown id and
/// [`StorefrontError::Cart`] for a size or color the product does not offer.
pub fn add<S: CartStore>(
    ctx: &Context,
    session: &mut ShopSession<S>,
    id: &str,
    selection: &Selection,
    quantity: NonZeroU32,
    out: &mut impl Write,
) -> CommandResult {
    let product = ctx.product(id)?;
    let (size, color) = selection.resolve(product);
    session
        .add_item(product, size, color, quantity)
        .map_err(StorefrontError::from)?;

    writeln!(
        out,
        "Added {} ({size}, {color}) x{quantity}. {} items in cart.",
        product.name,
        session.cart().item_count()
    )?;
    Ok(())
}

/// Set a cart row's quantity; zero removes it.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn update<S: CartStore>(
    session: &mut ShopSession<S>,
    id: &str,
    size: &str,
    color: &str,
    quantity: u32,
    out: &mut impl Write,
) -> CommandResult {
    let product_id = ProductId::new(id);
    if session
        .cart()
        .get(&LineKey::new(product_id.clone(), size, color))
        .is_none()
    {
        writeln!(out, "No {id} ({size}, {color}) in your cart.")?;
        return Ok(());
    }

    session.update_quantity(&product_id, size, color, quantity);
    if quantity == 0 {
        writeln!(out, "Removed {id} ({size}, {color}).")?;
    } else {
        writeln!(out, "Updated {id} ({size}, {color}) to x{quantity}.")?;
    }
    Ok(())
}

/// Remove a cart row.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn remove<S: CartStore>(
    session: &mut ShopSession<S>,
    id: &str,
    size: &str,
    color: &str,
    out: &mut impl Write,
) -> CommandResult {
    update(session, id, size, color, 0, out)
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn clear<S: CartStore>(session: &mut ShopSession<S>, out: &mut impl Write) -> CommandResult {
    session.clear();
    writeln!(out, "Cart cleared.")?;
    Ok(())
}

/// Print the order message and its WhatsApp link.
///
/// # Errors
///
/// Returns [`StorefrontError::Checkout`] if the cart is empty.
pub fn checkout<S: CartStore>(
    ctx: &Context,
    session: &ShopSession<S>,
    out: &mut impl Write,
) -> CommandResult {
    let link = session
        .checkout_link(&ctx.config.checkout)
        .map_err(StorefrontError::from)?;

    writeln!(out, "{}", session.cart().to_order_message())?;
    writeln!(out)?;
    writeln!(out, "Send your order on WhatsApp:")?;
    writeln!(out, "{link}")?;
    Ok(())
}

/// Print the message and WhatsApp link for ordering one piece directly.
///
/// # Errors
///
/// Returns [`StorefrontError::NotFound`] for an unknown id and
/// [`StorefrontError::Cart`] for a size or color the product does not offer.
pub fn buy_now(
    ctx: &Context,
    id: &str,
    selection: &Selection,
    out: &mut impl Write,
) -> CommandResult {
    let product = ctx.product(id)?;
    let (size, color) = selection.resolve(product);
    let message = buy_now_message(product, size, color).map_err(StorefrontError::from)?;
    let link =
        buy_now_link(&ctx.config.checkout, product, size, color).map_err(StorefrontError::from)?;

    writeln!(out, "{message}")?;
    writeln!(out)?;
    writeln!(out, "Send your order on WhatsApp:")?;
    writeln!(out, "{link}")?;
    Ok(())
}
